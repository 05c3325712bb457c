//! Path-addressed access into nested values
//!
//! Resolves a dotted path such as `"movies.1"` against a tree of mappings and
//! sequences. Resolution never fails: a missing segment anywhere along the
//! path resolves to the caller's fallback (or `None`). A `null` that is
//! present at the end of the path is a found value, distinct from missing.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use treekit_core::accessor;
//!
//! let user = json!({"address": {"city": "NY"}, "movies": ["A", "B"]});
//!
//! assert_eq!(accessor::get(&user, "address.city"), Some(&json!("NY")));
//! assert_eq!(accessor::get(&user, "movies.1"), Some(&json!("B")));
//! assert_eq!(accessor::get_or(&user, "movies.9", &json!("X")), &json!("X"));
//! ```

mod array_access;
mod lookup;
mod property_access;

pub use lookup::{Lookup, Miss, MissReason};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{PathConfig, Validator};
use crate::error::TreeResult;
use crate::path::Path;

/// Resolves paths using a [`PathConfig`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PathAccessor {
    config: PathConfig,
}

impl PathAccessor {
    /// Create an accessor after validating `config`
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Configuration` if the separator is alphanumeric
    /// or whitespace.
    pub fn new(config: PathConfig) -> TreeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Parse `path` with this accessor's separator
    #[inline]
    #[must_use]
    pub fn path(&self, path: &str) -> Path {
        Path::parse_with(path, &self.config)
    }

    /// Resolve `path`, reporting where and why a miss happened
    #[must_use]
    pub fn lookup<'a>(&self, root: &'a Value, path: &str) -> Lookup<'a> {
        resolve(root, &self.path(path))
    }

    /// Resolve `path`; `None` signals missing
    #[inline]
    #[must_use]
    pub fn get<'a>(&self, root: &'a Value, path: &str) -> Option<&'a Value> {
        self.lookup(root, path).found()
    }

    /// Resolve `path`, or return `fallback` if any segment is missing
    #[inline]
    #[must_use]
    pub fn get_or<'a>(&self, root: &'a Value, path: &str, fallback: &'a Value) -> &'a Value {
        self.get(root, path).unwrap_or(fallback)
    }

    /// Resolve `path` and deserialize the found value into `T`
    ///
    /// Returns `fallback` when the path is missing or the value found does
    /// not deserialize into `T`.
    pub fn get_as<T: DeserializeOwned>(&self, root: &Value, path: &str, fallback: T) -> T {
        let Some(value) = self.get(root, path) else {
            return fallback;
        };
        match T::deserialize(value) {
            Ok(typed) => typed,
            Err(e) => {
                tracing::debug!("value at '{}' did not deserialize, using fallback: {}", path, e);
                fallback
            }
        }
    }

    /// Check whether `path` resolves to a present value (`null` included)
    #[inline]
    #[must_use]
    pub fn contains(&self, root: &Value, path: &str) -> bool {
        self.lookup(root, path).is_found()
    }
}

/// Walk `path` from `root`, short-circuiting on the first missing segment
#[must_use]
pub fn resolve<'a>(root: &'a Value, path: &Path) -> Lookup<'a> {
    let mut cursor = root;

    for (index, segment) in path.segments().iter().enumerate() {
        let next = match cursor {
            Value::Null => Err(MissReason::NullCursor),
            Value::Object(_) => property_access::access_key(cursor, segment),
            Value::Array(_) => array_access::access_index(cursor, segment),
            _ => Err(MissReason::NotTraversable),
        };

        match next {
            Ok(value) => cursor = value,
            Err(reason) => {
                tracing::trace!("path '{}' missed at segment {} ({:?})", path, index, reason);
                return Lookup::Missing(Miss {
                    segment: index,
                    reason,
                });
            }
        }
    }

    Lookup::Found(cursor)
}

/// Resolve a dotted `path` against `root`; `None` signals missing
#[inline]
#[must_use]
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    PathAccessor::default().get(root, path)
}

/// Resolve a dotted `path` against `root`, or return `fallback`
#[inline]
#[must_use]
pub fn get_or<'a>(root: &'a Value, path: &str, fallback: &'a Value) -> &'a Value {
    PathAccessor::default().get_or(root, path, fallback)
}

/// Resolve a dotted `path` and deserialize the value, or return `fallback`
#[inline]
pub fn get_as<T: DeserializeOwned>(root: &Value, path: &str, fallback: T) -> T {
    PathAccessor::default().get_as(root, path, fallback)
}

/// Resolve a dotted `path` with miss diagnostics
#[inline]
#[must_use]
pub fn lookup<'a>(root: &'a Value, path: &str) -> Lookup<'a> {
    PathAccessor::default().lookup(root, path)
}
