//! `QueryBuilder` for path lookups with a fallback

use serde::de::DeserializeOwned;
use serde_json::Value;
use treekit_core::accessor::{Lookup, PathAccessor};
use treekit_core::config::PathConfig;
use treekit_core::TreeResult;

/// Path lookup against a borrowed root value
///
/// # Examples
/// ```rust
/// use serde_json::json;
/// use treekit::TreeKit;
///
/// let user = json!({"movies": ["A", "B"]});
/// let title = TreeKit::query(&user).or(json!("none")).get("movies.5");
/// assert_eq!(title, json!("none"));
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder<'a> {
    root: &'a Value,
    accessor: PathAccessor,
    fallback: Option<Value>,
    debug_enabled: bool,
}

impl<'a> QueryBuilder<'a> {
    #[must_use]
    pub fn new(root: &'a Value) -> Self {
        Self {
            root,
            accessor: PathAccessor::default(),
            fallback: None,
            debug_enabled: false,
        }
    }

    /// Split paths on `separator` instead of `.`
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Configuration` for an alphanumeric or whitespace
    /// separator, which could not be told apart from key text.
    pub fn separator(mut self, separator: char) -> TreeResult<Self> {
        self.accessor = PathAccessor::new(PathConfig::with_separator(separator))?;
        Ok(self)
    }

    /// Value returned by [`get`](Self::get) when the path is missing
    #[must_use]
    pub fn or(mut self, fallback: Value) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Log every miss at debug level
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Resolve `path` with miss diagnostics
    #[must_use]
    pub fn lookup(&self, path: &str) -> Lookup<'a> {
        let lookup = self.accessor.lookup(self.root, path);
        if self.debug_enabled
            && let Some(miss) = lookup.miss()
        {
            log::debug!(
                "query '{}' missed at segment {}: {:?}",
                path,
                miss.segment,
                miss.reason
            );
        }
        lookup
    }

    /// Resolve `path`; `None` signals missing
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&'a Value> {
        self.lookup(path).found()
    }

    /// Resolve `path` into an owned value, or the fallback (`null` if none
    /// was set)
    #[must_use]
    pub fn get(&self, path: &str) -> Value {
        match self.find(path) {
            Some(value) => value.clone(),
            None => self.fallback.clone().unwrap_or(Value::Null),
        }
    }

    /// Resolve `path` and deserialize it, or return `fallback`
    pub fn get_as<T: DeserializeOwned>(&self, path: &str, fallback: T) -> T {
        self.accessor.get_as(self.root, path, fallback)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.lookup(path).is_found()
    }
}
