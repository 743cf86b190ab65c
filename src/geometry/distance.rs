use geo::{Distance, Haversine, Point};

use crate::domain::{GeoPoint, ScreenPoint};

/// Straight-line distance between two surface positions, in pixels
pub fn screen_distance(a: ScreenPoint, b: ScreenPoint) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Great-circle distance between two coordinates, in kilometres
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let a: Point<f64> = a.into();
    let b: Point<f64> = b.into();
    Haversine::distance(a, b) / 1000.0
}
