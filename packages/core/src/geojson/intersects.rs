//! Geometry intersection predicates

use super::types::{Geometry, Position};

/// Decides whether two geometries share at least one point
pub trait Intersects {
    fn intersects(&self, a: &Geometry, b: &Geometry) -> bool;
}

impl<F> Intersects for F
where
    F: Fn(&Geometry, &Geometry) -> bool,
{
    fn intersects(&self, a: &Geometry, b: &Geometry) -> bool {
        self(a, b)
    }
}

/// Intersection on the plane, treating coordinates as cartesian
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarIntersects {
    /// Distance under which two points are considered equal
    pub tolerance: f64,
}

impl Default for PlanarIntersects {
    fn default() -> Self {
        Self { tolerance: 1e-9 }
    }
}

impl Intersects for PlanarIntersects {
    fn intersects(&self, a: &Geometry, b: &Geometry) -> bool {
        let tol = self.tolerance;
        match (a, b) {
            (Geometry::Point { coordinates: p }, Geometry::Point { coordinates: q }) => {
                same_point(*p, *q, tol)
            }
            (Geometry::Point { coordinates: p }, Geometry::LineString { coordinates: line })
            | (Geometry::LineString { coordinates: line }, Geometry::Point { coordinates: p }) => {
                point_on_line(*p, line, tol)
            }
            (
                Geometry::LineString { coordinates: first },
                Geometry::LineString { coordinates: second },
            ) => lines_cross(first, second, tol),
        }
    }
}

fn same_point(p: Position, q: Position, tol: f64) -> bool {
    (p[0] - q[0]).abs() <= tol && (p[1] - q[1]).abs() <= tol
}

/// Cross product of `b - a` and `c - a`; its sign gives the turn direction
fn orientation(a: Position, b: Position, c: Position) -> f64 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

fn on_segment(p: Position, a: Position, b: Position, tol: f64) -> bool {
    let length = ((b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2)).sqrt();
    if length <= tol {
        return same_point(p, a, tol);
    }
    if orientation(a, b, p).abs() > tol * length {
        return false;
    }
    p[0] >= a[0].min(b[0]) - tol
        && p[0] <= a[0].max(b[0]) + tol
        && p[1] >= a[1].min(b[1]) - tol
        && p[1] <= a[1].max(b[1]) + tol
}

/// Consecutive vertex pairs; a single vertex is a zero-length segment
fn segments(line: &[Position]) -> impl Iterator<Item = (Position, Position)> + '_ {
    let single = (line.len() == 1).then(|| (line[0], line[0]));
    line.windows(2).map(|w| (w[0], w[1])).chain(single)
}

fn point_on_line(p: Position, line: &[Position], tol: f64) -> bool {
    segments(line).any(|(a, b)| on_segment(p, a, b, tol))
}

fn segments_cross(p1: Position, p2: Position, q1: Position, q2: Position, tol: f64) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    let straddles = |x: f64, y: f64| (x > tol && y < -tol) || (x < -tol && y > tol);
    if straddles(d1, d2) && straddles(d3, d4) {
        return true;
    }

    on_segment(p1, q1, q2, tol)
        || on_segment(p2, q1, q2, tol)
        || on_segment(q1, p1, p2, tol)
        || on_segment(q2, p1, p2, tol)
}

fn lines_cross(first: &[Position], second: &[Position], tol: f64) -> bool {
    segments(first).any(|(p1, p2)| segments(second).any(|(q1, q2)| segments_cross(p1, p2, q1, q2, tol)))
}
