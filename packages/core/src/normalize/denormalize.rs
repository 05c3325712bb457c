//! Joining a normalized result back together

use serde_json::{Map, Value};

use super::StructuralNormalizer;
use super::types::NormalizedResult;
use crate::error::{TreeError, TreeResult};
use crate::value::scalar_key;

impl StructuralNormalizer {
    /// Replace every foreign key in the root with the table entry it names
    ///
    /// An entry `{key}{suffix}` whose scalar value names a mapping in the
    /// table becomes `key` holding that mapping, itself joined recursively.
    /// Foreign keys that name nothing are left as they are. A primitive field
    /// that happens to end with the suffix and match a table key is expanded
    /// too; identifiers must be unique for the join to be exact.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::DepthExceeded` if joining nests deeper than
    /// `max_depth`, which happens when table entries refer to each other in
    /// a cycle.
    pub fn denormalize(&self, result: &NormalizedResult) -> TreeResult<Map<String, Value>> {
        self.join(&result.root, &result.table, 1)
    }

    fn join(
        &self,
        object: &Map<String, Value>,
        table: &Map<String, Value>,
        depth: usize,
    ) -> TreeResult<Map<String, Value>> {
        if depth > self.config.max_depth {
            return Err(TreeError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }

        let suffix = self.config.foreign_key_suffix.as_str();
        let mut joined = Map::new();

        for (key, value) in object {
            if let Some(base) = key.strip_suffix(suffix)
                && !base.is_empty()
                && let Some(id) = scalar_key(value)
                && let Some(Value::Object(entry)) = table.get(&id)
            {
                let nested = self.join(entry, table, depth + 1)?;
                joined.insert(base.to_string(), Value::Object(nested));
            } else {
                joined.insert(key.clone(), value.clone());
            }
        }

        Ok(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejoins_nested_levels() {
        let input = json!({
            "id": 1,
            "car": {"id": 33, "engine": {"serial": "E-9", "cylinders": 4}},
            "tags": ["a", "b"]
        });
        let normalizer = StructuralNormalizer::default();
        let result = normalizer.normalize(&input).expect("input is a mapping");
        assert_eq!(result.table.len(), 2);

        let joined = normalizer.denormalize(&result).expect("acyclic table");
        assert_eq!(Value::Object(joined), input);
    }

    #[test]
    fn suffixed_scalar_naming_a_table_entry_is_expanded() {
        let input = json!({"ownerId": 9, "car": {"id": 9}});
        let normalizer = StructuralNormalizer::default();
        let result = normalizer.normalize(&input).expect("input is a mapping");
        let joined = normalizer.denormalize(&result).expect("acyclic table");
        assert_eq!(
            Value::Object(joined),
            json!({"owner": {"id": 9}, "car": {"id": 9}})
        );
    }

    #[test]
    fn dangling_foreign_key_is_kept() {
        let result = NormalizedResult {
            root: json!({"ownerId": 7}).as_object().cloned().unwrap_or_default(),
            table: Map::new(),
        };
        let joined = StructuralNormalizer::default()
            .denormalize(&result)
            .expect("nothing to join");
        assert_eq!(Value::Object(joined), json!({"ownerId": 7}));
    }

    #[test]
    fn cyclic_table_hits_depth_limit() {
        let result = NormalizedResult {
            root: json!({"nodeId": 1}).as_object().cloned().unwrap_or_default(),
            table: json!({"1": {"id": 1, "nodeId": 1}})
                .as_object()
                .cloned()
                .unwrap_or_default(),
        };
        let err = StructuralNormalizer::default().denormalize(&result).unwrap_err();
        assert!(err.is_depth_exceeded());
    }
}
