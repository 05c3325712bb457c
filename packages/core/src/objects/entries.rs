//! Copying, merging and flattening mappings

use serde_json::Value;

use crate::value::Object;

/// Shallow copy of `object`
#[inline]
#[must_use]
pub fn clone_object(object: &Object) -> Object {
    object.clone()
}

/// Entries of `first` then `second`; `second` wins on shared keys
#[must_use]
pub fn merge_objects(first: &Object, second: &Object) -> Object {
    let mut merged = first.clone();
    merged.extend(second.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Copy of `object` with `key` set to `value`
#[must_use]
pub fn set_property(object: &Object, (key, value): (&str, Value)) -> Object {
    let mut updated = object.clone();
    updated.insert(key.to_string(), value);
    updated
}

/// One element per entry, tagged with the entry's key
///
/// `{a: {name: 'X'}}` becomes `[{key: 'a', name: 'X'}]`. A nested mapping's
/// own `key` entry overrides the tag. Entries whose value is not a mapping
/// become `{key, value}`.
#[must_use]
pub fn to_array(object: &Object) -> Vec<Value> {
    object
        .iter()
        .map(|(key, value)| {
            let mut element = Object::new();
            element.insert("key".to_string(), Value::String(key.clone()));
            match value {
                Value::Object(fields) => {
                    element.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
                other => {
                    element.insert("value".to_string(), other.clone());
                }
            }
            Value::Object(element)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Object {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn merge_prefers_second() {
        let first = object(json!({"a": 1, "b": 2}));
        let second = object(json!({"b": 3, "c": 4}));
        let merged = merge_objects(&first, &second);
        assert_eq!(Value::Object(merged), json!({"a": 1, "b": 3, "c": 4}));
        assert_eq!(Value::Object(first), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn set_property_copies() {
        let original = object(json!({"name": "John"}));
        let updated = set_property(&original, ("age", json!(22)));
        assert_eq!(Value::Object(updated), json!({"name": "John", "age": 22}));
        assert!(!original.contains_key("age"));
    }

    #[test]
    fn to_array_tags_keys() {
        let input = object(json!({"a": {"name": "X"}, "b": {"name": "Y"}, "c": 5}));
        assert_eq!(
            to_array(&input),
            vec![
                json!({"key": "a", "name": "X"}),
                json!({"key": "b", "name": "Y"}),
                json!({"key": "c", "value": 5}),
            ]
        );
    }
}
