//! Import service trait abstraction.
//!
//! This crate defines the `ImportSink` trait that the batch importer writes
//! through. The remote store is treated as an opaque service exposing a
//! schema-ensure operation and a batch import operation; `pilosa-client`
//! implements it over HTTP and [`DryRunSink`] implements it without I/O.

mod dry_run;
mod error;
mod target;
mod traits;

pub use dry_run::DryRunSink;
pub use error::SinkError;
pub use target::{SchemaTarget, DEFAULT_FRAME, DEFAULT_INDEX};
pub use traits::ImportSink;
