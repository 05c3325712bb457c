//! Edits over user records; each returns new records and leaves the input
//! untouched

use serde_json::{Number, Value};

use crate::error::{TreeError, TreeResult};
use crate::value::Object;

/// Overwrite, anywhere inside each user's `address`, the keys that also
/// appear in `changes`
///
/// Keys in `changes` that the address does not already have are ignored.
#[must_use]
pub fn change_users_address(users: &[Value], changes: &Object) -> Vec<Value> {
    users
        .iter()
        .map(|user| {
            let mut user = user.clone();
            if let Some(Value::Object(address)) = user.get_mut("address") {
                apply_changes(address, changes);
            }
            user
        })
        .collect()
}

fn apply_changes(target: &mut Object, changes: &Object) {
    for (key, value) in target.iter_mut() {
        match value {
            Value::Object(nested) => apply_changes(nested, changes),
            _ => {
                if let Some(replacement) = changes.get(key) {
                    *value = replacement.clone();
                }
            }
        }
    }
}

/// Drop `address.geo` from every user
#[must_use]
pub fn remove_address_coordinates(users: &[Value]) -> Vec<Value> {
    users
        .iter()
        .map(|user| {
            let mut user = user.clone();
            if let Some(Value::Object(address)) = user.get_mut("address") {
                address.shift_remove("geo");
            }
            user
        })
        .collect()
}

/// Drop `company` from every user
#[must_use]
pub fn remove_company_info(users: &[Value]) -> Vec<Value> {
    users
        .iter()
        .map(|user| {
            let mut user = user.clone();
            if let Value::Object(fields) = &mut user {
                fields.shift_remove("company");
            }
            user
        })
        .collect()
}

#[must_use]
pub fn add_new_user(users: &[Value], user: Value) -> Vec<Value> {
    let mut out = Vec::with_capacity(users.len() + 1);
    out.extend_from_slice(users);
    out.push(user);
    out
}

/// Parse `address.geo.lat` and `address.geo.lng` into numbers
///
/// Values that are already numbers are kept; users without coordinates are
/// copied unchanged.
///
/// # Errors
///
/// Returns `TreeError::InvalidCoordinate` for a coordinate that is not a
/// finite decimal number.
pub fn convert_users_geo_to_number(users: &[Value]) -> TreeResult<Vec<Value>> {
    users
        .iter()
        .map(|user| {
            let mut user = user.clone();
            if let Some(Value::Object(geo)) = user.pointer_mut("/address/geo") {
                for field in ["lat", "lng"] {
                    if let Some(coordinate) = geo.get_mut(field) {
                        *coordinate = to_number(field, coordinate)?;
                    }
                }
            }
            Ok(user)
        })
        .collect()
}

fn to_number(field: &str, coordinate: &Value) -> TreeResult<Value> {
    match coordinate {
        Value::Number(_) => Ok(coordinate.clone()),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| TreeError::invalid_coordinate(field, text.as_str())),
        other => Err(TreeError::invalid_coordinate(field, other.to_string())),
    }
}
