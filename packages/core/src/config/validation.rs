//! Configuration validation utilities

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid separator: {0}")]
    InvalidSeparator(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidSeparator` - if a path separator could appear inside a key
    /// - `InvalidParameter` - if parameters are empty or outside valid ranges
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a path separator
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidSeparator` if the separator is
    /// alphanumeric or whitespace.
    pub fn validate_separator(separator: char, name: &str) -> ConfigResult<()> {
        if separator.is_alphanumeric() || separator.is_whitespace() {
            return Err(ConfigurationError::InvalidSeparator(format!(
                "{name} cannot be alphanumeric or whitespace, got {separator:?}"
            )));
        }
        Ok(())
    }

    /// Validate that a string setting is not empty
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if `value` is empty.
    pub fn validate_non_empty(value: &str, name: &str) -> ConfigResult<()> {
        if value.is_empty() {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} cannot be empty"
            )));
        }
        Ok(())
    }

    /// Validate numeric range
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the value is outside
    /// the specified range [min, max] (inclusive).
    pub fn validate_range<T>(value: T, min: T, max: T, name: &str) -> ConfigResult<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} must be between {min} and {max}, got {value}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_rules() {
        assert!(ConfigValidator::validate_separator('.', "separator").is_ok());
        assert!(ConfigValidator::validate_separator('/', "separator").is_ok());
        assert!(ConfigValidator::validate_separator('a', "separator").is_err());
        assert!(ConfigValidator::validate_separator(' ', "separator").is_err());
    }

    #[test]
    fn range_is_inclusive() {
        assert!(ConfigValidator::validate_range(1, 1, 10, "depth").is_ok());
        assert!(ConfigValidator::validate_range(10, 1, 10, "depth").is_ok());
        let err = ConfigValidator::validate_range(11, 1, 10, "depth").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration parameter: depth must be between 1 and 10, got 11"
        );
    }
}
