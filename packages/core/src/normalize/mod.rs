//! Structural normalization
//!
//! Splits every nested mapping of an object out into a flat side-table keyed
//! by the nested mapping's identifier, and replaces it in place with a
//! foreign key (`car` becomes `carId`). [`StructuralNormalizer::denormalize`]
//! joins the two halves back together.
//!
//! ```rust
//! use serde_json::json;
//! use treekit_core::normalize;
//!
//! let user = json!({"id": 1, "name": "John", "car": {"id": 33, "manufacturer": "Ford"}});
//! let result = normalize::normalize(&user)?;
//!
//! assert_eq!(result.root_value(), json!({"id": 1, "name": "John", "carId": 33}));
//! assert_eq!(result.table_value(), json!({"33": {"id": 33, "manufacturer": "Ford"}}));
//! # Ok::<(), treekit_core::TreeError>(())
//! ```

mod denormalize;
mod engine;
mod identifier;
mod types;

pub use identifier::Identifier;
pub use types::NormalizedResult;

use serde_json::{Map, Value};

use crate::config::{NormalizeConfig, Validator};
use crate::error::TreeResult;

/// Normalizes objects according to a [`NormalizeConfig`]
#[derive(Debug, Clone, Default)]
pub struct StructuralNormalizer {
    config: NormalizeConfig,
}

impl StructuralNormalizer {
    /// Create a normalizer after validating `config`
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Configuration` if the configuration is invalid.
    pub fn new(config: NormalizeConfig) -> TreeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }
}

/// Normalize `object` with the default configuration
///
/// # Errors
///
/// See [`StructuralNormalizer::normalize`].
pub fn normalize(object: &Value) -> TreeResult<NormalizedResult> {
    StructuralNormalizer::default().normalize(object)
}

/// Join a normalized result back together with the default configuration
///
/// # Errors
///
/// See [`StructuralNormalizer::denormalize`].
pub fn denormalize(result: &NormalizedResult) -> TreeResult<Map<String, Value>> {
    StructuralNormalizer::default().denormalize(result)
}
