//! Types most callers need

pub use crate::accessor::{Lookup, Miss, MissReason, PathAccessor};
pub use crate::config::{
    IdentifierStrategy, NormalizeConfig, PathConfig, UnidentifiedPolicy, Validator,
};
pub use crate::error::{TreeError, TreeResult};
pub use crate::normalize::{NormalizedResult, StructuralNormalizer};
pub use crate::path::Path;
pub use crate::tree::Tree;
pub use crate::value::Object;
