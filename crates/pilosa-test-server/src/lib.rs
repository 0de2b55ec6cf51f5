//! In-process fake Pilosa server for tests.
//!
//! Implements just enough of the Pilosa HTTP API for the import pipeline:
//!
//! - `GET /schema`
//! - `POST /index/{index}` (409 if it exists)
//! - `POST /index/{index}/frame/{frame}` (409 if it exists)
//! - `POST /index/{index}/query` with `SetBit(...)` calls
//!
//! Bits are recorded in arrival order so tests can check for gaps,
//! duplicates and ordering. Failures can be injected per test.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A bit recorded by the fake server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedBit {
    pub index: String,
    pub frame: String,
    pub row: i64,
    pub column: i64,
}

#[derive(Debug, Default)]
struct FakeState {
    /// index name -> frame names
    indexes: BTreeMap<String, BTreeSet<String>>,
    bits: Vec<RecordedBit>,
    queries: usize,
    fail_queries_after: Option<usize>,
    hide_frames: bool,
}

type SharedState = Arc<Mutex<FakeState>>;

fn lock(state: &SharedState) -> MutexGuard<'_, FakeState> {
    // A panicking handler must not wedge the remaining assertions.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Running fake server; stops when dropped
pub struct FakePilosa {
    addr: SocketAddr,
    state: SharedState,
    handle: JoinHandle<()>,
}

impl FakePilosa {
    /// Bind to an ephemeral local port and start serving
    pub async fn start() -> anyhow::Result<Self> {
        let state = SharedState::default();
        let app = Router::new()
            .route("/schema", get(schema))
            .route("/index/:index", post(create_index))
            .route("/index/:index/frame/:frame", post(create_frame))
            .route("/index/:index/query", post(query))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Fake Pilosa server stopped: {e}");
            }
        });
        tracing::debug!("Fake Pilosa listening on {addr}");

        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    /// `host:port` of the server, as passed on the command line
    pub fn address(&self) -> String {
        self.addr.to_string()
    }

    /// Base URL of the server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Bits set in `index`/`frame`, in arrival order
    pub fn bits(&self, index: &str, frame: &str) -> Vec<(i64, i64)> {
        lock(&self.state)
            .bits
            .iter()
            .filter(|b| b.index == index && b.frame == frame)
            .map(|b| (b.row, b.column))
            .collect()
    }

    /// Number of import queries received
    pub fn query_count(&self) -> usize {
        lock(&self.state).queries
    }

    /// Whether the frame exists
    pub fn has_frame(&self, index: &str, frame: &str) -> bool {
        lock(&self.state)
            .indexes
            .get(index)
            .map(|frames| frames.contains(frame))
            .unwrap_or(false)
    }

    /// Answer every query after the first `n` with HTTP 500
    pub fn fail_queries_after(&self, n: usize) {
        lock(&self.state).fail_queries_after = Some(n);
    }

    /// Report indexes without their frames from `GET /schema`
    pub fn hide_frames_in_schema(&self) {
        lock(&self.state).hide_frames = true;
    }
}

impl Drop for FakePilosa {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn schema(State(state): State<SharedState>) -> Response {
    let state = lock(&state);
    let indexes: Vec<_> = state
        .indexes
        .iter()
        .map(|(name, frames)| {
            if state.hide_frames {
                json!({ "name": name })
            } else {
                let frames: Vec<_> = frames.iter().map(|f| json!({ "name": f })).collect();
                json!({ "name": name, "frames": frames })
            }
        })
        .collect();
    Json(json!({ "indexes": indexes })).into_response()
}

async fn create_index(State(state): State<SharedState>, Path(index): Path<String>) -> Response {
    let mut state = lock(&state);
    if state.indexes.contains_key(&index) {
        return error_response(StatusCode::CONFLICT, "index already exists");
    }
    state.indexes.insert(index, BTreeSet::new());
    Json(json!({})).into_response()
}

async fn create_frame(
    State(state): State<SharedState>,
    Path((index, frame)): Path<(String, String)>,
) -> Response {
    let mut state = lock(&state);
    let Some(frames) = state.indexes.get_mut(&index) else {
        return error_response(StatusCode::NOT_FOUND, "index not found");
    };
    if !frames.insert(frame) {
        return error_response(StatusCode::CONFLICT, "frame already exists");
    }
    Json(json!({})).into_response()
}

async fn query(
    State(state): State<SharedState>,
    Path(index): Path<String>,
    body: String,
) -> Response {
    let mut state = lock(&state);

    if let Some(limit) = state.fail_queries_after {
        if state.queries >= limit {
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "injected failure");
        }
    }
    state.queries += 1;

    let Some(calls) = parse_set_bits(&body) else {
        return error_response(StatusCode::BAD_REQUEST, "parse error");
    };

    let mut results = Vec::with_capacity(calls.len());
    for (frame, row, column) in calls {
        let known = state
            .indexes
            .get(&index)
            .map(|frames| frames.contains(&frame))
            .unwrap_or(false);
        if !known {
            return error_response(StatusCode::BAD_REQUEST, "frame not found");
        }

        let bit = RecordedBit {
            index: index.clone(),
            frame,
            row,
            column,
        };
        let changed = !state.bits.contains(&bit);
        state.bits.push(bit);
        results.push(json!(changed));
    }

    Json(json!({ "results": results })).into_response()
}

/// Parse `SetBit(frame="f", rowID=1, columnID=2)` calls out of a PQL body
fn parse_set_bits(body: &str) -> Option<Vec<(String, i64, i64)>> {
    let mut calls = Vec::new();
    for call in body.split("SetBit(").skip(1) {
        let (args, _) = call.split_once(')')?;
        let (mut frame, mut row, mut column) = (None, None, None);
        for arg in args.split(',') {
            let (key, value) = arg.trim().split_once('=')?;
            match key {
                "frame" => frame = Some(value.trim_matches('"').to_string()),
                "rowID" => row = value.parse().ok(),
                "columnID" => column = value.parse().ok(),
                _ => return None,
            }
        }
        calls.push((frame?, row?, column?));
    }
    Some(calls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_bits() {
        let body = "SetBit(frame=\"f1\", rowID=1, columnID=2)\nSetBit(frame=\"f1\", rowID=-3, columnID=4)";
        assert_eq!(
            parse_set_bits(body),
            Some(vec![
                ("f1".to_string(), 1, 2),
                ("f1".to_string(), -3, 4)
            ])
        );
    }

    #[test]
    fn test_parse_rejects_unknown_argument() {
        assert_eq!(parse_set_bits("SetBit(frame=\"f1\", row=1, columnID=2)"), None);
    }

    #[test]
    fn test_parse_empty_body() {
        assert_eq!(parse_set_bits(""), Some(vec![]));
    }
}
