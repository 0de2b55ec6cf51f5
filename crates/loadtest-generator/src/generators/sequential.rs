//! Row-major walk over the matrix.

use super::{check_bounds, expect_params, parse_count, parse_dimension, CoordinateSource};
use crate::generator::GeneratorError;
use sync_core::{ConfigError, Coordinate};

/// Usage string for the sequential strategy parameters.
pub const SEQUENTIAL_USAGE: &str = "MAX_ROW_ID MAX_COL_ID BIT_COUNT";

/// Emits `(0,0), (0,1), ..., (0,max_col_id-1), (1,0), ...`, wrapping back to
/// the first row once every cell has been visited.
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    max_row_id: i64,
    max_col_id: i64,
    index: u64,
    remaining: u64,
}

impl SequentialGenerator {
    /// Create a sequential generator.
    ///
    /// Fails if either bound is not strictly positive.
    pub fn new(max_row_id: i64, max_col_id: i64, count: u64) -> Result<Self, ConfigError> {
        check_bounds(max_row_id, max_col_id)?;
        Ok(Self {
            max_row_id,
            max_col_id,
            index: 0,
            remaining: count,
        })
    }

    /// Build a generator from `MAX_ROW_ID MAX_COL_ID BIT_COUNT`.
    pub fn from_params(params: &[String]) -> Result<Self, GeneratorError> {
        let params = expect_params(params, 3, SEQUENTIAL_USAGE)?;
        let max_row_id = parse_dimension("MAX_ROW_ID", &params[0])?;
        let max_col_id = parse_dimension("MAX_COL_ID", &params[1])?;
        let count = parse_count("BIT_COUNT", &params[2])?;
        Ok(Self::new(max_row_id, max_col_id, count)?)
    }
}

impl CoordinateSource for SequentialGenerator {
    fn next_coordinate(&mut self) -> Option<Coordinate> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // Bounds are positive, so the casts cannot change sign.
        let cols = self.max_col_id as u64;
        let rows = self.max_row_id as u64;
        let row = (self.index / cols) % rows;
        let column = self.index % cols;
        self.index += 1;

        Some(Coordinate::new(row as i64, column as i64))
    }

    fn remaining(&self) -> u64 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_walk() {
        let mut generator = SequentialGenerator::new(2, 3, 7).unwrap();
        let bits: Vec<_> = std::iter::from_fn(|| generator.next_coordinate()).collect();

        assert_eq!(
            bits,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1),
                Coordinate::new(1, 2),
                // wraps
                Coordinate::new(0, 0),
            ]
        );
        assert_eq!(generator.next_coordinate(), None);
    }

    #[test]
    fn test_from_params() {
        let params: Vec<String> = ["10", "1_000", "25"].iter().map(|s| s.to_string()).collect();
        let generator = SequentialGenerator::from_params(&params).unwrap();
        assert_eq!(generator.remaining(), 25);
    }

    #[test]
    fn test_from_params_rejects_zero_columns() {
        let params: Vec<String> = ["10", "0", "25"].iter().map(|s| s.to_string()).collect();
        assert!(matches!(
            SequentialGenerator::from_params(&params),
            Err(GeneratorError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_new_rejects_non_positive_bounds() {
        for (rows, cols) in [(5, 0), (0, 5), (-1, 3), (3, -1)] {
            assert!(
                matches!(
                    SequentialGenerator::new(rows, cols, 1),
                    Err(ConfigError::OutOfRange { .. })
                ),
                "rows={rows} cols={cols}"
            );
        }
    }
}
