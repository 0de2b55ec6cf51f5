//! Individual coordinate generation strategies.
//!
//! Each strategy owns its parameters and remaining budget and implements
//! [`CoordinateSource`].

pub mod random;
pub mod sequential;

use crate::generator::GeneratorError;
use sync_core::{parse_separated_int, ConfigError, Coordinate};

/// Trait implemented by every generation strategy.
pub trait CoordinateSource {
    /// Produce the next coordinate, or `None` once the budget is spent.
    ///
    /// After the first `None` every further call returns `None`.
    fn next_coordinate(&mut self) -> Option<Coordinate>;

    /// Number of coordinates still to be produced.
    fn remaining(&self) -> u64;
}

/// Check the parameter count for a strategy.
pub(crate) fn expect_params<'a>(
    params: &'a [String],
    count: usize,
    usage: &'static str,
) -> Result<&'a [String], GeneratorError> {
    if params.len() != count {
        return Err(GeneratorError::WrongParamCount { usage });
    }
    Ok(params)
}

/// Parse a matrix dimension, which must be strictly positive.
pub(crate) fn parse_dimension(name: &str, value: &str) -> Result<i64, ConfigError> {
    let parsed: i64 = parse_separated_int(value)?;
    if parsed <= 0 {
        return Err(ConfigError::OutOfRange {
            name: name.to_string(),
            constraint: "greater than 0".to_string(),
            value: value.to_string(),
        });
    }
    Ok(parsed)
}

/// Reject matrix bounds that are not strictly positive.
pub(crate) fn check_bounds(max_row_id: i64, max_col_id: i64) -> Result<(), ConfigError> {
    for (name, value) in [("MAX_ROW_ID", max_row_id), ("MAX_COL_ID", max_col_id)] {
        if value <= 0 {
            return Err(ConfigError::OutOfRange {
                name: name.to_string(),
                constraint: "greater than 0".to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

/// Parse a bit budget, which must not be negative.
pub(crate) fn parse_count(name: &str, value: &str) -> Result<u64, ConfigError> {
    let parsed: i64 = parse_separated_int(value)?;
    u64::try_from(parsed).map_err(|_| ConfigError::OutOfRange {
        name: name.to_string(),
        constraint: "non-negative".to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("MAX_ROW_ID", "1_000"), Ok(1000));
        assert!(matches!(
            parse_dimension("MAX_ROW_ID", "0"),
            Err(ConfigError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_dimension("MAX_ROW_ID", "-3"),
            Err(ConfigError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_dimension("MAX_ROW_ID", "ten"),
            Err(ConfigError::InvalidInt(_))
        ));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("BIT_COUNT", "0"), Ok(0));
        assert_eq!(parse_count("BIT_COUNT", "5_000"), Ok(5000));
        assert!(parse_count("BIT_COUNT", "-1").is_err());
    }

    #[test]
    fn test_expect_params() {
        let params = vec!["1".to_string(), "2".to_string()];
        assert!(expect_params(&params, 2, "A B").is_ok());
        assert!(matches!(
            expect_params(&params, 3, "A B C"),
            Err(GeneratorError::WrongParamCount { usage: "A B C" })
        ));
    }
}
