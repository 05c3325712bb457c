//! Tree type

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TreeResult;

/// A node holding a value and optional children
///
/// Absent and empty `children` both make the node a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree<T> {
    pub value: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Tree<T>>>,
}

impl<T> Tree<T> {
    #[must_use]
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: None,
        }
    }

    #[must_use]
    pub fn node(value: T, children: Vec<Tree<T>>) -> Self {
        Self {
            value,
            children: Some(children),
        }
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Tree<T>] {
        self.children.as_deref().unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

impl Tree<Value> {
    /// Decode a tree from its JSON form
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Decode` if a node lacks `value` or `children` is
    /// not a sequence of nodes.
    pub fn from_value(value: &Value) -> TreeResult<Self> {
        Ok(Self::deserialize(value)?)
    }
}
