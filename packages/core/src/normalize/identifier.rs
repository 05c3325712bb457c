//! Identifier extraction for nested mappings

use serde_json::{Map, Value};

use crate::config::IdentifierStrategy;
use crate::error::{TreeError, TreeResult};
use crate::value::scalar_key;

/// Identifier of an extracted mapping
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// Scalar written into the root as the foreign key
    pub value: Value,
    /// Key of the mapping in the side-table
    pub table_key: String,
}

impl Identifier {
    /// Extract the identifier of `nested`, found under `key` in its parent
    ///
    /// Returns `Ok(None)` when the mapping has no usable identifier: it is
    /// empty, lacks the configured field, or the identifier is `null`.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::NonScalarIdentifier` if the identifier is itself a
    /// sequence or mapping.
    pub fn extract(
        strategy: &IdentifierStrategy,
        key: &str,
        nested: &Map<String, Value>,
    ) -> TreeResult<Option<Self>> {
        let candidate = match strategy {
            IdentifierStrategy::FirstEntry => nested.values().next(),
            IdentifierStrategy::Field(field) => nested.get(field),
        };

        let Some(value) = candidate else {
            return Ok(None);
        };
        if value.is_null() {
            return Ok(None);
        }

        let table_key =
            scalar_key(value).ok_or_else(|| TreeError::non_scalar_identifier(key, value))?;
        Ok(Some(Self {
            value: value.clone(),
            table_key,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected mapping, got {other}"),
        }
    }

    #[test]
    fn first_entry_whatever_its_name() {
        let nested = map(json!({"code": "FR", "name": "France"}));
        let id = Identifier::extract(&IdentifierStrategy::FirstEntry, "country", &nested)
            .expect("scalar identifier")
            .expect("identifier present");
        assert_eq!(id.value, json!("FR"));
        assert_eq!(id.table_key, "FR");
    }

    #[test]
    fn named_field() {
        let nested = map(json!({"name": "Ford", "id": 33}));
        let strategy = IdentifierStrategy::Field("id".into());
        let id = Identifier::extract(&strategy, "car", &nested)
            .expect("scalar identifier")
            .expect("identifier present");
        assert_eq!(id.value, json!(33));
        assert_eq!(id.table_key, "33");
    }

    #[test]
    fn empty_and_null_are_unidentified() {
        let strategy = IdentifierStrategy::FirstEntry;
        assert_eq!(Identifier::extract(&strategy, "a", &Map::new()).ok(), Some(None));
        let nested = map(json!({"id": null}));
        assert_eq!(Identifier::extract(&strategy, "a", &nested).ok(), Some(None));
    }

    #[test]
    fn structured_identifier_is_rejected() {
        let nested = map(json!({"id": [1, 2]}));
        let err = Identifier::extract(&IdentifierStrategy::FirstEntry, "car", &nested).unwrap_err();
        assert!(matches!(err, TreeError::NonScalarIdentifier { ref key, found: "sequence" } if key == "car"));
    }
}
