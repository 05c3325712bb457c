//! Normalization output

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The flattened root object and the side-table of extracted mappings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    /// Input entries with nested mappings replaced by foreign keys
    pub root: Map<String, Value>,
    /// Extracted mappings keyed by the string form of their identifier
    pub table: Map<String, Value>,
}

impl NormalizedResult {
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Map<String, Value>, Map<String, Value>) {
        (self.root, self.table)
    }

    #[must_use]
    pub fn root_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    #[must_use]
    pub fn table_value(&self) -> Value {
        Value::Object(self.table.clone())
    }

    /// `[root, table]` as a two-element sequence
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Array(vec![Value::Object(self.root), Value::Object(self.table)])
    }

    /// True when nothing was extracted
    #[inline]
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.table.is_empty()
    }
}
