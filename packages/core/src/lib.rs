//! # treekit core
//!
//! Utilities over JSON-like trees (`serde_json::Value`):
//!
//! - **Path access** with fallbacks: [`accessor::get`], [`accessor::get_or`],
//!   and diagnostics through [`accessor::lookup`]
//! - **Structural normalization** of nested mappings into a root plus a flat
//!   table keyed by identifier, and the inverse join
//! - **Tree metrics** over explicit `{value, children}` trees
//! - Object, array and record helpers, sample fixtures, and GeoJSON
//!   construction
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use treekit_core::{accessor, normalize};
//!
//! let user = json!({"id": 1, "name": "John", "car": {"id": 33, "manufacturer": "Ford"}});
//! assert_eq!(accessor::get(&user, "car.manufacturer"), Some(&json!("Ford")));
//!
//! let result = normalize::normalize(&user)?;
//! assert_eq!(result.root_value(), json!({"id": 1, "name": "John", "carId": 33}));
//! # Ok::<(), treekit_core::TreeError>(())
//! ```
//!
//! The library emits `tracing` events and installs no subscriber.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod accessor;
pub mod arrays;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod geojson;
pub mod normalize;
pub mod objects;
pub mod ops;
pub mod path;
pub mod prelude;
pub mod tree;
pub mod value;

pub use error::{TreeError, TreeResult};
pub use value::Object;
