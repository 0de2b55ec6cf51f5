//! PQL construction and response types.

use serde::Deserialize;
use std::fmt::Write;
use sync_core::Coordinate;

/// `GET /schema` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaInfo {
    #[serde(default)]
    pub indexes: Option<Vec<IndexInfo>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexInfo {
    pub name: String,
    #[serde(default)]
    pub frames: Option<Vec<FrameInfo>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrameInfo {
    pub name: String,
}

impl SchemaInfo {
    /// Whether `frame` is listed under `index`
    pub fn has_frame(&self, index: &str, frame: &str) -> bool {
        self.indexes
            .iter()
            .flatten()
            .filter(|i| i.name == index)
            .flat_map(|i| i.frames.iter().flatten())
            .any(|f| f.name == frame)
    }

    pub fn has_index(&self, index: &str) -> bool {
        self.indexes.iter().flatten().any(|i| i.name == index)
    }
}

/// `POST /index/{index}/query` response
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Build one `SetBit` call per coordinate, newline separated
pub fn set_bit_query(frame: &str, batch: &[Coordinate]) -> String {
    let mut query = String::with_capacity(batch.len() * 48);
    for bit in batch {
        // Writing to a String cannot fail.
        let _ = writeln!(
            query,
            "SetBit(frame=\"{frame}\", rowID={}, columnID={})",
            bit.row, bit.column
        );
    }
    query
}
