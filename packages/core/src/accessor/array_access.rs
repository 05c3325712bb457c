//! Sequence index access
//!
//! Out-of-bounds access is missing, not an error.

use serde_json::Value;

use super::lookup::MissReason;
use crate::path::parse_index;

/// Step into the element named by `segment` of a sequence
#[inline]
pub(super) fn access_index<'a>(array: &'a Value, segment: &str) -> Result<&'a Value, MissReason> {
    let Value::Array(items) = array else {
        return Err(MissReason::NotTraversable);
    };
    let index = parse_index(segment).ok_or(MissReason::NotAnIndex)?;
    items.get(index).ok_or(MissReason::IndexOutOfRange)
}
