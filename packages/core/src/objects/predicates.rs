//! Key/value predicates over mappings

use serde_json::Value;

use crate::value::Object;

/// Entries of `object` for which `predicate(key, value)` holds
#[must_use]
pub fn filter_object<P>(object: &Object, mut predicate: P) -> Object
where
    P: FnMut(&str, &Value) -> bool,
{
    object
        .iter()
        .filter(|(key, value)| predicate(key, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// True if `predicate(key, value)` holds for at least one entry
#[must_use]
pub fn has_valid_property<P>(object: &Object, mut predicate: P) -> bool
where
    P: FnMut(&str, &Value) -> bool,
{
    object.iter().any(|(key, value)| predicate(key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gt(value: &Value, bound: f64) -> bool {
        value.as_f64().is_some_and(|n| n > bound)
    }

    #[test]
    fn filter_by_key_or_value() {
        let input = json!({"name": "Kate", "number1": 100, "number2": 40, "number3": 77});
        let object = input.as_object().cloned().unwrap_or_default();
        let filtered = filter_object(&object, |key, value| key == "name" || gt(value, 50.0));
        assert_eq!(
            Value::Object(filtered),
            json!({"name": "Kate", "number1": 100, "number3": 77})
        );
    }

    #[test]
    fn any_property() {
        let input = json!({"name": "Mary", "age": 99, "children": 4});
        let object = input.as_object().cloned().unwrap_or_default();
        assert!(has_valid_property(&object, |_, value| gt(value, 10.0)));
        assert!(!has_valid_property(&object, |_, value| gt(value, 100.0)));
        assert!(!has_valid_property(&Object::new(), |_, _| true));
    }
}
