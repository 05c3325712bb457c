//! Fluent builders over the core accessor and normalizer
//!
//! Each builder collects options by method chaining. `QueryBuilder` checks
//! its separator when it is set; `NormalizeBuilder` validates its whole
//! configuration once, when the terminal method runs.

pub mod normalize;
pub mod query;

pub use normalize::NormalizeBuilder;
pub use query::QueryBuilder;
