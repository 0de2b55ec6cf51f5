//! Core types for the pilosa-sync pipeline.
//!
//! This crate provides the foundational types shared by every stage of the
//! generate → encode → decode → import pipeline:
//!
//! - [`Coordinate`] - One set bit of a sparse boolean matrix
//! - [`ImportStatusUpdate`] - Progress report for one acknowledged batch
//! - [`parse_separated_int`] - Integer parsing that tolerates `_` digit groups
//! - [`ConfigError`] - Invalid configuration reported to the user
//!
//! # Architecture
//!
//! ```text
//! sync-core (this crate)
//!    │
//!    ├─── loadtest-generator   (produces Coordinates)
//!    ├─── csv-types            (encodes/decodes Coordinates)
//!    ├─── pilosa-sink          (import service contract)
//!    └─── csv-source           (batches Coordinates, emits ImportStatusUpdates)
//! ```
//!
//! # Example
//!
//! ```rust
//! use sync_core::{parse_separated_int, Coordinate};
//!
//! let max_row: i64 = parse_separated_int("1_000_000").unwrap();
//! let bit = Coordinate::new(max_row - 1, 7);
//! assert_eq!(bit.row, 999_999);
//! ```

pub mod parse;
pub mod types;

// Re-exports for convenience
pub use parse::{parse_separated_int, ConfigError};
pub use types::{Coordinate, ImportStatusUpdate};
