//! `{ value, children }` trees and their metrics

mod metrics;
mod types;

pub use metrics::{depth, leaf_count};
pub use types::Tree;
