//! Argument parsers shared by the CLI subcommands.

mod duration;

pub use duration::parse_duration;

use sync_core::{parse_separated_int, ConfigError};

/// Parse a positive count that may use `_` as a digit separator
fn parse_positive(name: &str, s: &str) -> Result<usize, ConfigError> {
    let value: usize = parse_separated_int(s)?;
    if value == 0 {
        return Err(ConfigError::OutOfRange {
            name: name.to_string(),
            constraint: "at least 1".to_string(),
            value: s.to_string(),
        });
    }
    Ok(value)
}

/// Parse `BATCH_SIZE`, e.g. `100_000`
pub fn parse_batch_size(s: &str) -> Result<usize, ConfigError> {
    parse_positive("BATCH_SIZE", s)
}

/// Parse the status channel capacity
pub fn parse_capacity(s: &str) -> Result<usize, ConfigError> {
    parse_positive("status capacity", s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_batch_size() {
        assert_eq!(parse_batch_size("3").unwrap(), 3);
        assert_eq!(parse_batch_size("100_000").unwrap(), 100_000);
        assert_eq!(
            parse_batch_size("0").unwrap_err().to_string(),
            "BATCH_SIZE must be at least 1, got 0"
        );
        assert!(matches!(parse_batch_size("ten"), Err(ConfigError::InvalidInt(_))));
        assert!(parse_batch_size("-5").is_err());
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity("1_000").unwrap(), 1000);
        assert!(parse_capacity("0").is_err());
    }
}
