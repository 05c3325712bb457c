//! Error handling for treekit operations
//!
//! Error types, constructors and classification helpers. The path accessor
//! never errors; everything else that can fail returns [`TreeResult`].

mod classification;
mod constructors;
mod types;

pub use types::{TreeError, TreeResult};
