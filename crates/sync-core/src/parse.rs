//! Parsing of user-supplied integers.

use std::str::FromStr;

/// Invalid configuration supplied on the command line or to a generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A value could not be parsed as an integer
    #[error("Invalid int: {0}")]
    InvalidInt(String),

    /// A value parsed but is outside its allowed range
    #[error("{name} must be {constraint}, got {value}")]
    OutOfRange {
        name: String,
        constraint: String,
        value: String,
    },
}

/// Parse an integer that may contain `_` digit-group separators.
///
/// `"1_000_000"` and `"1000000"` parse to the same value. Any other
/// non-digit content (apart from a leading sign) is rejected.
pub fn parse_separated_int<T: FromStr>(s: &str) -> Result<T, ConfigError> {
    let cleaned = s.replace('_', "");
    if cleaned.is_empty() {
        return Err(ConfigError::InvalidInt(s.to_string()));
    }
    cleaned
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidInt(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_separated_int::<i64>("42"), Ok(42));
    }

    #[test]
    fn test_parse_with_separators() {
        assert_eq!(parse_separated_int::<i64>("10_000_000"), Ok(10_000_000));
        assert_eq!(parse_separated_int::<usize>("1_0"), Ok(10));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse_separated_int::<i64>("-1_000"), Ok(-1000));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_separated_int::<i64>("12abc"),
            Err(ConfigError::InvalidInt("12abc".to_string()))
        );
        assert!(parse_separated_int::<i64>("").is_err());
        assert!(parse_separated_int::<i64>("___").is_err());
        assert!(parse_separated_int::<usize>("-5").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = parse_separated_int::<i64>("x").unwrap_err();
        assert_eq!(err.to_string(), "Invalid int: x");
    }
}
