//! Array helpers
//!
//! Generic helpers over slices plus helpers over lists of JSON records.
//! Every function returns a new vector; inputs are never modified.

mod merge;
mod modify;
mod ordering;
mod posts;
mod pricing;
mod records;

pub use merge::{merge_arrays, merge_arrays_unique};
pub use modify::{
    add_to_beginning, add_to_end, clone_array, insert_into, remove_at, replace_at, toggle_item,
};
pub use ordering::{Direction, sort_by};
pub use posts::populate_posts;
pub use pricing::{Discounts, Product, get_total};
pub use records::{
    add_extra_properties, are_items_valid, filter_by, find_by, key_by, map_to, populate,
    remove_properties, set_selected,
};
