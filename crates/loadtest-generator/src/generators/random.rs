//! Uniform random coordinate generation.

use super::{check_bounds, expect_params, parse_count, parse_dimension, CoordinateSource};
use crate::generator::GeneratorError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sync_core::{parse_separated_int, ConfigError, Coordinate};

/// Usage string for the random strategy parameters.
pub const RANDOM_USAGE: &str = "RANDOM_SEED MAX_ROW_ID MAX_COL_ID BIT_COUNT";

/// Draws rows from `[0, max_row_id)` and columns from `[0, max_col_id)`.
///
/// The RNG is owned by the generator and seeded from the configured seed,
/// so two generators with identical parameters emit identical sequences.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: StdRng,
    max_row_id: i64,
    max_col_id: i64,
    remaining: u64,
}

impl RandomGenerator {
    /// Create a random generator.
    ///
    /// Fails if either bound is not strictly positive.
    pub fn new(seed: i64, max_row_id: i64, max_col_id: i64, count: u64) -> Result<Self, ConfigError> {
        check_bounds(max_row_id, max_col_id)?;

        Ok(Self {
            rng: StdRng::seed_from_u64(seed as u64),
            max_row_id,
            max_col_id,
            remaining: count,
        })
    }

    /// Build a generator from `RANDOM_SEED MAX_ROW_ID MAX_COL_ID BIT_COUNT`.
    pub fn from_params(params: &[String]) -> Result<Self, GeneratorError> {
        let params = expect_params(params, 4, RANDOM_USAGE)?;
        let seed: i64 = parse_separated_int(&params[0])?;
        let max_row_id = parse_dimension("MAX_ROW_ID", &params[1])?;
        let max_col_id = parse_dimension("MAX_COL_ID", &params[2])?;
        let count = parse_count("BIT_COUNT", &params[3])?;
        Ok(Self::new(seed, max_row_id, max_col_id, count)?)
    }
}

impl CoordinateSource for RandomGenerator {
    fn next_coordinate(&mut self) -> Option<Coordinate> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let row = self.rng.gen_range(0..self.max_row_id);
        let column = self.rng.gen_range(0..self.max_col_id);
        Some(Coordinate::new(row, column))
    }

    fn remaining(&self) -> u64 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_emits_exactly_count_within_bounds() {
        let mut generator = RandomGenerator::new(42, 10, 5, 3).unwrap();

        for _ in 0..3 {
            let bit = generator.next_coordinate().unwrap();
            assert!((0..10).contains(&bit.row));
            assert!((0..5).contains(&bit.column));
        }
        assert_eq!(generator.next_coordinate(), None);
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let mut generator = RandomGenerator::new(1, 100, 100, 1).unwrap();
        assert!(generator.next_coordinate().is_some());
        for _ in 0..10 {
            assert_eq!(generator.next_coordinate(), None);
            assert_eq!(generator.remaining(), 0);
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut generator = RandomGenerator::new(42, 10, 10, 0).unwrap();
        assert_eq!(generator.next_coordinate(), None);
    }

    #[test]
    fn test_unit_bounds_collapse_to_zero() {
        let mut generator = RandomGenerator::new(7, 1, 1, 50).unwrap();
        while let Some(bit) = generator.next_coordinate() {
            assert_eq!(bit, Coordinate::new(0, 0));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = RandomGenerator::new(42, 1_000, 1_000, 100).unwrap();
        let mut gen2 = RandomGenerator::new(42, 1_000, 1_000, 100).unwrap();

        for _ in 0..100 {
            assert_eq!(gen1.next_coordinate(), gen2.next_coordinate());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a: Vec<_> = std::iter::from_fn({
            let mut g = RandomGenerator::new(1, 1_000_000, 1_000_000, 20).unwrap();
            move || g.next_coordinate()
        })
        .collect();
        let b: Vec<_> = std::iter::from_fn({
            let mut g = RandomGenerator::new(2, 1_000_000, 1_000_000, 20).unwrap();
            move || g.next_coordinate()
        })
        .collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_negative_seed_is_accepted() {
        let mut generator = RandomGenerator::new(-42, 10, 10, 1).unwrap();
        assert!(generator.next_coordinate().is_some());
    }

    #[test]
    fn test_rejects_non_positive_bounds() {
        assert!(RandomGenerator::new(42, 0, 5, 3).is_err());
        assert!(RandomGenerator::new(42, 5, -1, 3).is_err());
    }

    #[test]
    fn test_from_params_with_separators() {
        let generator = RandomGenerator::from_params(&params(&["4_2", "1_000", "10", "2_000"])).unwrap();
        assert_eq!(generator.remaining(), 2000);
    }

    #[test]
    fn test_from_params_wrong_count() {
        let result = RandomGenerator::from_params(&params(&["42", "10", "5"]));
        assert!(matches!(
            result,
            Err(GeneratorError::WrongParamCount {
                usage: RANDOM_USAGE
            })
        ));
    }

    #[test]
    fn test_from_params_non_numeric() {
        let result = RandomGenerator::from_params(&params(&["seed", "10", "5", "3"]));
        assert!(matches!(
            result,
            Err(GeneratorError::InvalidConfiguration(ConfigError::InvalidInt(_)))
        ));
    }
}
