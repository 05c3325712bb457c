//! Highlighting the features a point touches

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::intersects::Intersects;
use super::types::{Feature, FeatureCollection, Geometry, Position};
use crate::error::TreeResult;

/// A `[kind, coordinates]` pair: `"point"` with a position, anything else
/// with a list of positions forming a line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape(pub String, pub Value);

impl Shape {
    #[must_use]
    pub fn new(kind: impl Into<String>, coordinates: Value) -> Self {
        Self(kind.into(), coordinates)
    }

    /// Decode into a geometry
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Decode` if the coordinates do not fit the kind.
    pub fn geometry(&self) -> TreeResult<Geometry> {
        let Shape(kind, coordinates) = self;
        let geometry = if kind == "point" {
            Geometry::Point {
                coordinates: Position::deserialize(coordinates)?,
            }
        } else {
            Geometry::LineString {
                coordinates: Vec::<Position>::deserialize(coordinates)?,
            }
        };
        Ok(geometry)
    }
}

/// Convert `shapes` into a feature collection where every feature that
/// intersects `point` has `properties: {highlighted: true}`
///
/// Returns `Ok(None)` when `point` intersects nothing.
///
/// # Errors
///
/// Returns `TreeError::Decode` if a shape's coordinates do not fit its kind.
pub fn highlight_active_features<I>(
    shapes: &[Shape],
    point: Position,
    predicate: &I,
) -> TreeResult<Option<FeatureCollection>>
where
    I: Intersects + ?Sized,
{
    let marker = Geometry::Point { coordinates: point };
    let mut any_highlighted = false;
    let mut features = Vec::with_capacity(shapes.len());

    for shape in shapes {
        let feature = Feature::new(shape.geometry()?);
        if predicate.intersects(&feature.geometry, &marker) {
            any_highlighted = true;
            features.push(feature.with_property("highlighted", Value::Bool(true)));
        } else {
            features.push(feature);
        }
    }

    if !any_highlighted {
        tracing::debug!("point {:?} intersects none of {} shapes", point, shapes.len());
        return Ok(None);
    }
    Ok(Some(FeatureCollection::new(features)))
}
