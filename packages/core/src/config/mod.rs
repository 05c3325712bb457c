//! Configuration for path resolution and normalization
//!
//! Every configuration type has a `Default` that reproduces the plain
//! behavior (dot-separated paths, first-entry identifiers, `Id` suffix) and
//! can be loaded from JSON through serde.

pub mod normalize;
pub mod path;
pub mod validation;

pub use normalize::{IdentifierStrategy, NormalizeConfig, UnidentifiedPolicy};
pub use path::PathConfig;
pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
