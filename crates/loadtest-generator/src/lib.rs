//! Coordinate generator for the pilosa-sync load testing tools.
//!
//! This crate provides the [`CoordinateGenerator`] which produces a lazy,
//! bounded sequence of `(row, column)` pairs. Generation is deterministic:
//! every generator owns its own seeded RNG, so the same parameters always
//! yield the same sequence.
//!
//! # Architecture
//!
//! ```text
//! CLI: STRATEGY [PARAMS...]
//!        │
//!        ▼
//! ┌──────────────────────────┐
//! │   CoordinateGenerator    │
//! │                          │
//! │  Random(RandomGenerator) │
//! │  Sequential(..)          │
//! └────────────┬─────────────┘
//!              │
//!              ▼
//!     Coordinate { row, column }
//! ```
//!
//! # Example
//!
//! ```rust
//! use loadtest_generator::CoordinateGenerator;
//!
//! let params = ["42", "10", "5", "3"].map(String::from);
//! let generator = CoordinateGenerator::from_args("random", &params).unwrap();
//! let bits: Vec<_> = generator.collect();
//! assert_eq!(bits.len(), 3);
//! ```
//!
//! # Strategies
//!
//! - `random SEED MAX_ROW_ID MAX_COL_ID BIT_COUNT` - Uniform random bits
//! - `sequential MAX_ROW_ID MAX_COL_ID BIT_COUNT` - Row-major walk of the matrix

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{CoordinateGenerator, GeneratorError};
pub use generators::{random::RandomGenerator, sequential::SequentialGenerator, CoordinateSource};
