//! GeoJSON (RFC 7946) construction and highlighting
//!
//! Builds feature collections from survey data (points of interest and
//! street polylines) and marks the features a point intersects. The
//! intersection test is pluggable through [`Intersects`].

mod highlight;
mod intersects;
mod survey;
mod types;

pub use highlight::{Shape, highlight_active_features};
pub use intersects::{Intersects, PlanarIntersects};
pub use survey::{
    LatLng, PointOfInterest, PolylineSegment, Street, StreetProps, SurveyData, create_geojson,
};
pub use types::{Feature, FeatureCollection, Geometry, Position};
