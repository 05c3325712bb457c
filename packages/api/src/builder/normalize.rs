//! `NormalizeBuilder` for configuring and running a normalization

use serde_json::{Map, Value};
use treekit_core::config::{NormalizeConfig, UnidentifiedPolicy};
use treekit_core::normalize::{NormalizedResult, StructuralNormalizer};
use treekit_core::TreeResult;

/// Collects [`NormalizeConfig`] options, then normalizes or joins values
///
/// # Examples
/// ```rust
/// use serde_json::json;
/// use treekit::TreeKit;
///
/// let order = json!({"id": 7, "customer": {"uuid": "c-1", "id": 3, "name": "Ann"}});
/// let result = TreeKit::normalizer()
///     .identifier_field("uuid")
///     .suffix("Ref")
///     .run(&order)?;
///
/// assert_eq!(result.root_value(), json!({"id": 7, "customerRef": "c-1"}));
/// # Ok::<(), treekit::TreeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct NormalizeBuilder {
    config: NormalizeConfig,
    debug_enabled: bool,
}

impl NormalizeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    #[must_use]
    pub fn with_config(config: NormalizeConfig) -> Self {
        Self {
            config,
            debug_enabled: false,
        }
    }

    /// Identify nested mappings by `field` instead of their first entry
    #[must_use]
    pub fn identifier_field(mut self, field: impl Into<String>) -> Self {
        self.config = self.config.identifier_field(field);
        self
    }

    /// Suffix appended to a key to form its foreign key (default `Id`)
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config = self.config.foreign_key_suffix(suffix);
        self
    }

    /// Fail instead of keeping mappings without an identifier inline
    #[must_use]
    pub fn reject_unidentified(mut self) -> Self {
        self.config = self.config.unidentified(UnidentifiedPolicy::Reject);
        self
    }

    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config = self.config.max_depth(depth);
        self
    }

    /// Log the size of every result at debug level
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    #[must_use]
    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Validate the configuration and build the normalizer
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Configuration` if an option is out of range.
    pub fn build(self) -> TreeResult<StructuralNormalizer> {
        StructuralNormalizer::new(self.config)
    }

    /// Normalize `object`
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Configuration` for an invalid configuration, and
    /// the normalizer's own errors otherwise.
    pub fn run(self, object: &Value) -> TreeResult<NormalizedResult> {
        let debug_enabled = self.debug_enabled;
        let result = self.build()?.normalize(object)?;
        if debug_enabled {
            log::debug!(
                "normalized into {} root keys and {} table entries",
                result.root.len(),
                result.table.len()
            );
        }
        Ok(result)
    }

    /// Join a normalized result back into a nested object
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Configuration` for an invalid configuration, and
    /// the normalizer's own errors otherwise.
    pub fn join(self, result: &NormalizedResult) -> TreeResult<Map<String, Value>> {
        let joined = self.build()?.denormalize(result)?;
        tracing::trace!("joined {} keys", joined.len());
        Ok(joined)
    }
}
