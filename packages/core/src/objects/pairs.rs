//! `[key, value]` pair lists to mappings

use serde_json::Value;

use crate::error::{TreeError, TreeResult};
use crate::value::{Object, scalar_key};

/// Convert a list of `[key, value]` pairs into a mapping
///
/// `[['name', 'John'], ['age', 22]]` becomes `{name: 'John', age: 22}`.
/// Later pairs overwrite earlier ones with the same key.
///
/// # Errors
///
/// Returns `TreeError::MalformedPair` if an element is not a two-element
/// sequence whose first element is a string, number or boolean.
pub fn array_to_object(pairs: &[Value]) -> TreeResult<Object> {
    convert(pairs, false)
}

/// Like [`array_to_object`], but every sequence value is itself a pair list
/// and is converted recursively
///
/// # Errors
///
/// Returns `TreeError::MalformedPair` for the first malformed element at
/// any level, and `TreeError::DepthExceeded` past 128 levels.
pub fn array_to_object_deep(pairs: &[Value]) -> TreeResult<Object> {
    convert(pairs, true)
}

const MAX_PAIR_DEPTH: usize = crate::config::normalize::DEFAULT_MAX_DEPTH;

fn convert(pairs: &[Value], deep: bool) -> TreeResult<Object> {
    convert_level(pairs, deep, 1)
}

fn convert_level(pairs: &[Value], deep: bool, depth: usize) -> TreeResult<Object> {
    if depth > MAX_PAIR_DEPTH {
        return Err(TreeError::DepthExceeded {
            limit: MAX_PAIR_DEPTH,
        });
    }

    let mut object = Object::new();
    for (index, pair) in pairs.iter().enumerate() {
        let (key, value) = split_pair(pair).ok_or(TreeError::MalformedPair { index })?;
        let value = match value {
            Value::Array(inner) if deep => Value::Object(convert_level(inner, deep, depth + 1)?),
            other => other.clone(),
        };
        object.insert(key, value);
    }
    Ok(object)
}

fn split_pair(pair: &Value) -> Option<(String, &Value)> {
    match pair.as_array()?.as_slice() {
        [key, value] => Some((scalar_key(key)?, value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(value: Value) -> Vec<Value> {
        value.as_array().cloned().unwrap_or_default()
    }

    #[test]
    fn flat_pairs() {
        let input = pairs(json!([["name", "John"], ["age", 22]]));
        let object = array_to_object(&input).expect("well-formed pairs");
        assert_eq!(Value::Object(object), json!({"name": "John", "age": 22}));
    }

    #[test]
    fn flat_conversion_keeps_sequence_values() {
        let input = pairs(json!([["tags", [["a", 1]]]]));
        let object = array_to_object(&input).expect("well-formed pairs");
        assert_eq!(Value::Object(object), json!({"tags": [["a", 1]]}));
    }

    #[test]
    fn deep_pairs() {
        let input = pairs(json!([
            ["name", "Mario"],
            ["address", [["city", "Rome"], ["geo", [["lat", 41.9], ["lng", 12.5]]]]],
            ["age", 44]
        ]));
        let object = array_to_object_deep(&input).expect("well-formed pairs");
        assert_eq!(
            Value::Object(object),
            json!({
                "name": "Mario",
                "address": {"city": "Rome", "geo": {"lat": 41.9, "lng": 12.5}},
                "age": 44
            })
        );
    }

    #[test]
    fn numeric_keys_are_stringified() {
        let input = pairs(json!([[1, "one"]]));
        let object = array_to_object(&input).expect("numeric key");
        assert_eq!(Value::Object(object), json!({"1": "one"}));
    }

    #[test]
    fn malformed_pair_reports_its_index() {
        let input = pairs(json!([["a", 1], ["b"]]));
        let err = array_to_object(&input).unwrap_err();
        assert!(matches!(err, TreeError::MalformedPair { index: 1 }));

        let input = pairs(json!([["a", [1, 2, 3]]]));
        assert!(matches!(
            array_to_object_deep(&input),
            Err(TreeError::MalformedPair { index: 0 })
        ));
    }
}
