//! CSV record encoding for sync-core coordinates.
//!
//! This crate provides the bidirectional conversion between
//! [`sync_core::Coordinate`] and the `row,col\n` line format used for
//! persisted bit data.
//!
//! # Modules
//!
//! - [`forward`] - Coordinate → CSV line
//! - [`reverse`] - CSV line → Coordinate
//!
//! # Example
//!
//! ```
//! use csv_types::{decode_coordinate, encode_coordinate};
//! use sync_core::Coordinate;
//!
//! let line = encode_coordinate(&Coordinate::new(3, 7));
//! assert_eq!(line, "3,7\n");
//! assert_eq!(decode_coordinate(&line).unwrap(), Coordinate::new(3, 7));
//! ```

pub mod forward;
pub mod reverse;

pub use forward::{encode_coordinate, CoordinateWriter};
pub use reverse::{decode_coordinate, CoordinateReader, MalformedReason, RecordError};
