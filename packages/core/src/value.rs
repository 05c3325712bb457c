//! Helpers over `serde_json::Value`, the tree value model
//!
//! A value is a primitive (`null`, boolean, number, string), a sequence of
//! values, or a mapping from string keys to values. Mappings iterate in
//! insertion order.

use serde_json::{Map, Number, Value};

/// A mapping from string keys to values
pub type Object = Map<String, Value>;

/// Name of the variant a value holds, used in error messages
#[must_use]
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// String form of a scalar when used as a mapping key
///
/// Strings are used as-is, numbers and booleans through their JSON text.
/// An integral float drops its fraction (`1.0` keys as `"1"`), so the same
/// number has one key whichever way it was written. `null`, sequences and
/// mappings have no key form.
#[must_use]
pub fn scalar_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_key(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Largest magnitude below which every integral `f64` is exact
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

fn number_key(number: &Number) -> String {
    match number.as_f64() {
        Some(float)
            if number.is_f64() && float.fract() == 0.0 && float.abs() < EXACT_INTEGER_LIMIT =>
        {
            #[allow(clippy::cast_possible_truncation)]
            let integral = float as i64;
            integral.to_string()
        }
        _ => number.to_string(),
    }
}
