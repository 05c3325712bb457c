//! GeoJSON object model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TreeResult;
use crate::value::Object;

/// `[longitude, latitude]`
pub type Position = [f64; 2];

/// Geometry object, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
}

/// Feature object; `properties` is omitted when absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Object>,
}

/// FeatureCollection object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl Feature {
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            properties: None,
        }
    }

    /// Set the property `key`, creating the properties object if needed
    #[must_use]
    pub fn with_property(mut self, key: &str, value: Value) -> Self {
        self.properties
            .get_or_insert_with(Object::new)
            .insert(key.to_string(), value);
        self
    }

    #[must_use]
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }
}

impl FeatureCollection {
    #[must_use]
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Serialize into a JSON value
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Decode` if a coordinate is not finite.
    pub fn to_value(&self) -> TreeResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
