//! Structural normalizer configuration

use serde::{Deserialize, Serialize};

use super::validation::{ConfigResult, ConfigValidator, Validator};

/// Foreign-key suffix appended to the key of an extracted mapping
pub const DEFAULT_FOREIGN_KEY_SUFFIX: &str = "Id";

/// Matches the recursion limit of the `serde_json` parser, so anything it
/// decoded can be normalized with the default settings
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Upper bound accepted for `max_depth`
pub const MAX_DEPTH_LIMIT: usize = 4096;

/// How the identifier of a nested mapping is found
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierStrategy {
    /// Value of the first declared entry, whatever its key
    #[default]
    FirstEntry,
    /// Value of the named entry
    Field(String),
}

/// What to do with a nested mapping that has no usable identifier
/// (no entries, identifier field absent, or identifier `null`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnidentifiedPolicy {
    /// Copy the mapping into the root unchanged
    #[default]
    KeepInline,
    /// Fail with `TreeError::Unidentified`
    Reject,
}

/// Settings for [`crate::normalize::StructuralNormalizer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    pub identifier: IdentifierStrategy,
    pub foreign_key_suffix: String,
    pub unidentified: UnidentifiedPolicy,
    pub max_depth: usize,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            identifier: IdentifierStrategy::FirstEntry,
            foreign_key_suffix: DEFAULT_FOREIGN_KEY_SUFFIX.to_string(),
            unidentified: UnidentifiedPolicy::KeepInline,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl NormalizeConfig {
    /// Use the named field as identifier instead of the first entry
    #[must_use]
    pub fn identifier_field(mut self, field: impl Into<String>) -> Self {
        self.identifier = IdentifierStrategy::Field(field.into());
        self
    }

    #[must_use]
    pub fn foreign_key_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.foreign_key_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn unidentified(mut self, policy: UnidentifiedPolicy) -> Self {
        self.unidentified = policy;
        self
    }

    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Key written into the root in place of the nested mapping under `key`
    #[must_use]
    pub fn foreign_key(&self, key: &str) -> String {
        format!("{key}{}", self.foreign_key_suffix)
    }
}

impl Validator for NormalizeConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_non_empty(&self.foreign_key_suffix, "foreign_key_suffix")?;
        if let IdentifierStrategy::Field(name) = &self.identifier {
            ConfigValidator::validate_non_empty(name, "identifier field")?;
        }
        ConfigValidator::validate_range(self.max_depth, 1, MAX_DEPTH_LIMIT, "max_depth")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = NormalizeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.foreign_key("car"), "carId");
    }

    #[test]
    fn rejects_empty_suffix_and_zero_depth() {
        assert!(NormalizeConfig::default().foreign_key_suffix("").validate().is_err());
        assert!(NormalizeConfig::default().max_depth(0).validate().is_err());
        assert!(NormalizeConfig::default().identifier_field("").validate().is_err());
    }

    #[test]
    fn loads_from_json_with_defaults_for_missing_fields() {
        let config: NormalizeConfig = serde_json::from_str(
            r#"{"identifier": {"field": "uuid"}, "unidentified": "reject"}"#,
        )
        .expect("config should deserialize");
        assert_eq!(config.identifier, IdentifierStrategy::Field("uuid".into()));
        assert_eq!(config.unidentified, UnidentifiedPolicy::Reject);
        assert_eq!(config.foreign_key_suffix, "Id");
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }
}
