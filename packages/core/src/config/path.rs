//! Path parsing configuration

use serde::{Deserialize, Serialize};

use super::validation::{ConfigResult, ConfigValidator, Validator};

/// Default segment separator for dotted paths
pub const DEFAULT_SEPARATOR: char = '.';

/// Controls how path strings are split into segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub separator: char,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl PathConfig {
    #[must_use]
    pub fn with_separator(separator: char) -> Self {
        Self { separator }
    }
}

impl Validator for PathConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_separator(self.separator, "separator")
    }
}
