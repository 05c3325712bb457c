//! Error constructor helpers

use serde_json::Value;

use super::types::TreeError;
use crate::value::value_kind;

impl TreeError {
    /// Creates a `NotAMapping` error describing `found`
    #[must_use]
    pub fn not_a_mapping(found: &Value) -> Self {
        Self::NotAMapping {
            found: value_kind(found),
        }
    }

    /// Creates a `NotASequence` error describing `found`
    #[must_use]
    pub fn not_a_sequence(found: &Value) -> Self {
        Self::NotASequence {
            found: value_kind(found),
        }
    }

    /// Creates a `NonScalarIdentifier` error for the entry `key`
    pub fn non_scalar_identifier(key: impl Into<String>, found: &Value) -> Self {
        Self::NonScalarIdentifier {
            key: key.into(),
            found: value_kind(found),
        }
    }

    /// Creates an `Unidentified` error for the entry `key`
    pub fn unidentified(key: impl Into<String>) -> Self {
        Self::Unidentified { key: key.into() }
    }

    /// Creates an `InvalidCoordinate` error
    pub fn invalid_coordinate(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn messages_name_the_offending_kind() {
        let err = TreeError::not_a_mapping(&json!([1, 2]));
        assert_eq!(err.to_string(), "expected a mapping, found sequence");

        let err = TreeError::non_scalar_identifier("car", &json!({"x": 1}));
        assert_eq!(
            err.to_string(),
            "identifier of 'car' must be a string, number or boolean, found mapping"
        );
    }
}
