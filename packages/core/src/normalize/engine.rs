//! Recursive extraction

use serde_json::{Map, Value};

use super::StructuralNormalizer;
use super::identifier::Identifier;
use super::types::NormalizedResult;
use crate::config::UnidentifiedPolicy;
use crate::error::{TreeError, TreeResult};

impl StructuralNormalizer {
    /// Normalize `object`, which must be a mapping
    ///
    /// Entries whose value is not a mapping are copied into the root as they
    /// are. Each nested mapping is normalized recursively, stored in the
    /// table under its identifier (after the entries extracted from inside
    /// it; on an identifier collision the later write wins), and
    /// replaced in the root by `{key}{suffix}` holding the identifier.
    ///
    /// # Errors
    ///
    /// - `TreeError::NotAMapping` if `object` is not a mapping
    /// - `TreeError::NonScalarIdentifier` if an identifier is a sequence or mapping
    /// - `TreeError::Unidentified` if a nested mapping has no identifier and
    ///   the policy is `Reject`
    /// - `TreeError::DepthExceeded` if nesting exceeds `max_depth`
    pub fn normalize(&self, object: &Value) -> TreeResult<NormalizedResult> {
        let Value::Object(map) = object else {
            return Err(TreeError::not_a_mapping(object));
        };
        self.normalize_map(map)
    }

    /// Normalize an already unwrapped mapping
    ///
    /// # Errors
    ///
    /// See [`StructuralNormalizer::normalize`].
    pub fn normalize_map(&self, object: &Map<String, Value>) -> TreeResult<NormalizedResult> {
        let result = self.walk(object, 1)?;
        tracing::debug!(
            "normalized object with {} root entries, {} extracted",
            result.root.len(),
            result.table.len()
        );
        Ok(result)
    }

    fn walk(&self, object: &Map<String, Value>, depth: usize) -> TreeResult<NormalizedResult> {
        if depth > self.config.max_depth {
            return Err(TreeError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }

        let mut root = Map::new();
        let mut table = Map::new();

        for (key, value) in object {
            let Value::Object(nested) = value else {
                root.insert(key.clone(), value.clone());
                continue;
            };

            let Some(identifier) = Identifier::extract(&self.config.identifier, key, nested)? else {
                match self.config.unidentified {
                    UnidentifiedPolicy::KeepInline => {
                        tracing::trace!("'{}' has no identifier, kept inline", key);
                        root.insert(key.clone(), value.clone());
                        continue;
                    }
                    UnidentifiedPolicy::Reject => return Err(TreeError::unidentified(key.as_str())),
                }
            };

            let inner = self.walk(nested, depth + 1)?;
            for (table_key, entry) in inner.table {
                insert_entry(&mut table, table_key, entry);
            }
            insert_entry(&mut table, identifier.table_key, Value::Object(inner.root));
            root.insert(self.config.foreign_key(key), identifier.value);
        }

        Ok(NormalizedResult { root, table })
    }
}

/// Insert into the table; an existing entry under the same key is replaced
fn insert_entry(table: &mut Map<String, Value>, table_key: String, entry: Value) {
    if table.contains_key(&table_key) {
        tracing::warn!(
            "identifier '{}' extracted more than once, last write wins",
            table_key
        );
    }
    table.insert(table_key, entry);
}
