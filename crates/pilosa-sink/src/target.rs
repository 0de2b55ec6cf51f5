//! Import target naming.

use sync_core::ConfigError;

/// Index used when none is configured
pub const DEFAULT_INDEX: &str = "i1";

/// Frame used when none is configured
pub const DEFAULT_FRAME: &str = "f1";

const MAX_NAME_LEN: usize = 64;

/// The index and frame that receive imported bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaTarget {
    pub index: String,
    pub frame: String,
}

impl SchemaTarget {
    /// Build a target, validating both names.
    ///
    /// Names must start with a lowercase letter and contain only lowercase
    /// letters, digits, `_` and `-`, up to 64 characters.
    pub fn new(index: &str, frame: &str) -> Result<Self, ConfigError> {
        validate_name("index", index)?;
        validate_name("frame", frame)?;
        Ok(Self {
            index: index.to_string(),
            frame: frame.to_string(),
        })
    }
}

impl Default for SchemaTarget {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX.to_string(),
            frame: DEFAULT_FRAME.to_string(),
        }
    }
}

fn validate_name(kind: &str, name: &str) -> Result<(), ConfigError> {
    let mut chars = name.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
        && name.len() <= MAX_NAME_LEN;

    if valid {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name: kind.to_string(),
            constraint: "a lowercase name matching [a-z][a-z0-9_-]* (max 64 chars)".to_string(),
            value: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target() {
        let target = SchemaTarget::default();
        assert_eq!(target.index, "i1");
        assert_eq!(target.frame, "f1");
    }

    #[test]
    fn test_valid_names() {
        assert!(SchemaTarget::new("repository", "stargazer").is_ok());
        assert!(SchemaTarget::new("a", "b-1_c").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert!(SchemaTarget::new("", "f1").is_err());
        assert!(SchemaTarget::new("1index", "f1").is_err());
        assert!(SchemaTarget::new("i1", "Frame").is_err());
        assert!(SchemaTarget::new("i1", "has space").is_err());
        assert!(SchemaTarget::new(&"x".repeat(65), "f1").is_err());
    }
}
