//! Data types flowing through the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A `(row, column)` pair marking one set bit in a sparse boolean matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row ID
    pub row: i64,
    /// Column ID
    pub column: i64,
}

impl Coordinate {
    pub fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((row, column): (i64, i64)) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Progress report emitted once per acknowledged batch.
///
/// Produced by the batch importer and consumed exactly once by the
/// progress monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatusUpdate {
    /// Zero-based submission order of the batch
    pub batch_index: u64,
    /// Number of coordinates the import service acknowledged
    pub imported_count: usize,
    /// Round-trip time of the batch submission
    pub elapsed: Duration,
}

impl ImportStatusUpdate {
    pub fn new(batch_index: u64, imported_count: usize, elapsed: Duration) -> Self {
        Self {
            batch_index,
            imported_count,
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_from_tuple() {
        let c: Coordinate = (3, 4).into();
        assert_eq!(c, Coordinate::new(3, 4));
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(Coordinate::new(-1, 9).to_string(), "(-1, 9)");
    }

    #[test]
    fn test_coordinate_ordering_is_row_major() {
        let mut bits = vec![
            Coordinate::new(1, 0),
            Coordinate::new(0, 5),
            Coordinate::new(0, 1),
        ];
        bits.sort();
        assert_eq!(
            bits,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(0, 5),
                Coordinate::new(1, 0)
            ]
        );
    }

    #[test]
    fn test_coordinate_serialization() {
        let json = serde_json::to_string(&Coordinate::new(10, 20)).unwrap();
        assert_eq!(json, r#"{"row":10,"column":20}"#);
    }
}
