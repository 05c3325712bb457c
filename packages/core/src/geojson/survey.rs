//! Survey data to feature collections

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{Feature, FeatureCollection, Geometry, Position};
use crate::error::{TreeError, TreeResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// GeoJSON order: longitude first
    #[inline]
    #[must_use]
    pub fn position(self) -> Position {
        [self.lng, self.lat]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub coordinates: LatLng,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreetProps {
    pub lane: Value,
}

/// A street whose geometry is a JSON-encoded list of segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Street {
    pub name: String,
    pub polyline: String,
    pub extra_props: StreetProps,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolylineSegment {
    pub start: LatLng,
    pub end: LatLng,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyData {
    #[serde(default)]
    pub points_of_interest: Vec<PointOfInterest>,
    #[serde(default)]
    pub streets: Vec<Street>,
}

impl Street {
    /// Decode the polyline segments
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Decode` if the polyline is not a JSON list of
    /// `{start, end}` segments.
    pub fn segments(&self) -> TreeResult<Vec<PolylineSegment>> {
        Ok(serde_json::from_str(&self.polyline)?)
    }

    /// Every segment's start followed by the last segment's end
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Decode` for an undecodable polyline and
    /// `TreeError::EmptyPolyline` if it has no segments.
    pub fn line_coordinates(&self) -> TreeResult<Vec<Position>> {
        let segments = self.segments()?;
        let Some(last) = segments.last() else {
            return Err(TreeError::EmptyPolyline {
                street: self.name.clone(),
            });
        };

        let mut coordinates: Vec<Position> = segments.iter().map(|s| s.start.position()).collect();
        coordinates.push(last.end.position());
        Ok(coordinates)
    }
}

/// Points of interest as `Point` features, then streets as `LineString`
/// features
///
/// # Errors
///
/// Fails on the first street whose polyline is undecodable or empty.
pub fn create_geojson(data: &SurveyData) -> TreeResult<FeatureCollection> {
    let mut features = Vec::with_capacity(data.points_of_interest.len() + data.streets.len());

    features.extend(data.points_of_interest.iter().map(|poi| {
        Feature::new(Geometry::Point {
            coordinates: poi.coordinates.position(),
        })
        .with_property("name", Value::String(poi.name.clone()))
    }));

    for street in &data.streets {
        let coordinates = street.line_coordinates()?;
        tracing::trace!("street '{}' has {} vertices", street.name, coordinates.len());
        features.push(
            Feature::new(Geometry::LineString { coordinates })
                .with_property("lanes", street.extra_props.lane.clone())
                .with_property("name", Value::String(street.name.clone())),
        );
    }

    Ok(FeatureCollection::new(features))
}
