//! Object helpers
//!
//! Every function returns a new mapping; inputs are never modified.

mod cache;
mod entries;
mod pairs;
mod predicates;

pub use cache::{ValueCache, get_cached_value};
pub use entries::{clone_object, merge_objects, set_property, to_array};
pub use pairs::{array_to_object, array_to_object_deep};
pub use predicates::{filter_object, has_valid_property};
