use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// Build from a (lat, lon) pair
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.lon, p.lat)
    }
}

/// A position on the render surface, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A captured coordinate plus the screen position it was last projected to.
///
/// `geo` is authoritative. `screen` is a cache that goes stale whenever the
/// surface pans or zooms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapturedPoint {
    pub geo: GeoPoint,
    pub screen: Option<ScreenPoint>,
}

impl CapturedPoint {
    pub fn new(geo: GeoPoint, screen: ScreenPoint) -> Self {
        Self {
            geo,
            screen: Some(screen),
        }
    }
}
