//! Core error types

use crate::config::ConfigurationError;

/// Result type for treekit operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors raised by the normalizer, converters and builders
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("expected a mapping, found {found}")]
    NotAMapping { found: &'static str },

    #[error("expected a sequence, found {found}")]
    NotASequence { found: &'static str },

    #[error("identifier of '{key}' must be a string, number or boolean, found {found}")]
    NonScalarIdentifier { key: String, found: &'static str },

    #[error("nested mapping '{key}' has no identifier")]
    Unidentified { key: String },

    #[error("nesting deeper than {limit} levels")]
    DepthExceeded { limit: usize },

    #[error("element {index} is not a [key, value] pair")]
    MalformedPair { index: usize },

    #[error("invalid sort direction '{0}', expected ASC or DESC")]
    InvalidDirection(String),

    #[error("street '{street}' has an empty polyline")]
    EmptyPolyline { street: String },

    #[error("invalid coordinate {field}: '{value}'")]
    InvalidCoordinate { field: String, value: String },

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
