//! Pilosa HTTP client.
//!
//! [`PilosaClient`] implements [`pilosa_sink::ImportSink`] on top of the
//! Pilosa HTTP API: schema creation through the index and frame endpoints,
//! and imports as batched `SetBit` queries.

mod connect;
mod query;
mod sink;

pub use connect::{parse_pilosa_addr, ClientError, PilosaClient, DEFAULT_PORT};
pub use query::{set_bit_query, FrameInfo, IndexInfo, QueryResponse, SchemaInfo};
