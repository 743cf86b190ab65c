use geo::LineString;
use serde::Serialize;

use super::GeoPoint;

/// A closed ring of coordinates produced by one completed stroke.
///
/// The first and last vertices are equal. No minimum vertex count is
/// enforced: a single-tap stroke yields a two-vertex ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    pub points: Vec<GeoPoint>,
}

impl Polygon {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&GeoPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&GeoPoint> {
        self.points.last()
    }

    /// Fewer than four vertices (three distinct plus the closing one)
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 4
    }

    /// Well-known text, lon before lat: `POLYGON((lon lat, ...))`
    pub fn to_wkt(&self) -> String {
        let coords: Vec<String> = self
            .points
            .iter()
            .map(|p| format!("{} {}", p.lon, p.lat))
            .collect();
        format!("POLYGON(({}))", coords.join(", "))
    }

    pub fn to_line_string(&self) -> LineString<f64> {
        self.points
            .iter()
            .map(|p| geo::coord! { x: p.lon, y: p.lat })
            .collect()
    }
}
