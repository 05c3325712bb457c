//! # treekit
//!
//! Path access with fallbacks, structural normalization and tree metrics over
//! JSON-like values (`serde_json::Value`).
//!
//! ```rust
//! use serde_json::json;
//! use treekit::TreeKit;
//!
//! let user = json!({"address": {"city": "NY"}});
//! assert_eq!(TreeKit::get(&user, "address.city"), Some(&json!("NY")));
//! assert_eq!(TreeKit::query(&user).or(json!("?")).get("address.zip"), json!("?"));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::{NormalizeBuilder, QueryBuilder};

// Re-export the core surface
pub use treekit_core::accessor::{Lookup, Miss, MissReason, PathAccessor};
pub use treekit_core::config::{
    IdentifierStrategy, NormalizeConfig, PathConfig, UnidentifiedPolicy,
};
pub use treekit_core::normalize::{NormalizedResult, StructuralNormalizer};
pub use treekit_core::path::Path;
pub use treekit_core::tree::Tree;
pub use treekit_core::{Object, TreeError, TreeResult};
pub use treekit_core::{accessor, arrays, fixtures, geojson, objects, ops, tree};

use serde_json::Value;

/// Main entry point providing static helpers and builders
pub struct TreeKit;

impl TreeKit {
    /// Start a path query against `root`
    #[must_use]
    pub fn query(root: &Value) -> QueryBuilder<'_> {
        QueryBuilder::new(root)
    }

    /// Start configuring a normalizer
    #[must_use]
    pub fn normalizer() -> NormalizeBuilder {
        NormalizeBuilder::new()
    }

    /// Resolve a dotted path; `None` signals missing
    #[must_use]
    pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
        accessor::get(root, path)
    }

    /// Resolve a dotted path, or return `fallback`
    #[must_use]
    pub fn get_or<'a>(root: &'a Value, path: &str, fallback: &'a Value) -> &'a Value {
        accessor::get_or(root, path, fallback)
    }

    /// Normalize with the default configuration
    ///
    /// # Errors
    ///
    /// Returns `TreeError::NotAMapping` if `object` is not a mapping.
    pub fn normalize(object: &Value) -> TreeResult<NormalizedResult> {
        treekit_core::normalize::normalize(object)
    }

    /// Depth and leaf count of an explicit `{value, children}` tree
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Decode` if `value` is not shaped as a tree.
    pub fn measure(value: &Value) -> TreeResult<(usize, usize)> {
        let tree = Tree::from_value(value)?;
        Ok((tree::depth(&tree), tree::leaf_count(&tree)))
    }
}
