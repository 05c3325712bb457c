//! Dotted paths into nested values
//!
//! A [`Path`] is the ordered list of segments obtained by splitting a string
//! such as `"movies.1.title"` on the separator. A segment is read as a
//! mapping key or, when the value being walked is a sequence, as an index.

pub mod operations;
pub mod parser;
pub mod types;

pub use parser::parse_index;
pub use types::Path;
