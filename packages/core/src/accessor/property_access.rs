//! Mapping key access

use serde_json::Value;

use super::lookup::MissReason;

/// Step into the entry `key` of a mapping
#[inline]
pub(super) fn access_key<'a>(object: &'a Value, key: &str) -> Result<&'a Value, MissReason> {
    match object {
        Value::Object(map) => map.get(key).ok_or(MissReason::KeyAbsent),
        _ => Err(MissReason::NotTraversable),
    }
}
