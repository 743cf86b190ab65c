use crate::domain::{GeoPoint, ScreenPoint};

/// Meters per degree of latitude (and of longitude at the equator)
pub const METERS_PER_DEGREE: f64 = 111320.0;

/// Converts between surface pixels and geographic coordinates.
///
/// Implemented by whatever renders the map. The capture code only ever sees
/// this trait.
pub trait MapProjector {
    fn to_geo(&self, screen: ScreenPoint) -> GeoPoint;

    fn to_screen(&self, point: GeoPoint) -> ScreenPoint;
}

/// Equirectangular projection of a fixed-size viewport around a center
///
/// Uses the same approximation as a city-scale local projection:
/// - x = (lon - center_lon) * cos(center_lat) * 111320 / meters_per_pixel
/// - y = (center_lat - lat) * 111320 / meters_per_pixel
///
/// both offset by half the viewport so the center lands mid-screen, with
/// y growing downward.
#[derive(Debug, Clone)]
pub struct Viewport {
    center: GeoPoint,
    cos_lat: f64,
    meters_per_pixel: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    /// Create a viewport
    ///
    /// # Arguments
    /// * `center` - coordinate shown at the middle of the surface
    /// * `meters_per_pixel` - ground resolution, must be positive
    /// * `size` - (width, height) of the surface in pixels
    pub fn new(center: GeoPoint, meters_per_pixel: f64, size: (f64, f64)) -> Self {
        Self {
            center,
            cos_lat: center.lat.to_radians().cos(),
            meters_per_pixel,
            width: size.0,
            height: size.1,
        }
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn set_center(&mut self, center: GeoPoint) {
        self.center = center;
        self.cos_lat = center.lat.to_radians().cos();
    }

    pub fn meters_per_pixel(&self) -> f64 {
        self.meters_per_pixel
    }

    pub fn set_meters_per_pixel(&mut self, meters_per_pixel: f64) {
        self.meters_per_pixel = meters_per_pixel;
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn pixels_per_degree(&self) -> f64 {
        METERS_PER_DEGREE / self.meters_per_pixel
    }
}

impl MapProjector for Viewport {
    fn to_geo(&self, screen: ScreenPoint) -> GeoPoint {
        let ppd = self.pixels_per_degree();
        let dx = screen.x - self.width / 2.0;
        let dy = screen.y - self.height / 2.0;

        GeoPoint {
            lat: self.center.lat - dy / ppd,
            lon: self.center.lon + dx / (ppd * self.cos_lat),
        }
    }

    fn to_screen(&self, point: GeoPoint) -> ScreenPoint {
        let ppd = self.pixels_per_degree();

        ScreenPoint {
            x: self.width / 2.0 + (point.lon - self.center.lon) * self.cos_lat * ppd,
            y: self.height / 2.0 + (self.center.lat - point.lat) * ppd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portland() -> Viewport {
        Viewport::new(GeoPoint::new(45.5076, -122.6736), 1.0, (400.0, 800.0))
    }

    #[test]
    fn test_viewport_center() {
        let vp = portland();
        let geo = vp.to_geo(ScreenPoint::new(200.0, 400.0));
        assert!((geo.lat - 45.5076).abs() < 1e-9);
        assert!((geo.lon + 122.6736).abs() < 1e-9);

        let screen = vp.to_screen(vp.center());
        assert!((screen.x - 200.0).abs() < 1e-6);
        assert!((screen.y - 400.0).abs() < 1e-6);
    }

    #[test]
    fn test_viewport_y_grows_south() {
        let vp = portland();
        let below = vp.to_geo(ScreenPoint::new(200.0, 500.0));
        assert!(below.lat < 45.5076);

        // 100px at 1 m/px is 100m, roughly 0.0009 degrees of latitude
        assert!((45.5076 - below.lat - 100.0 / METERS_PER_DEGREE).abs() < 1e-9);
    }

    #[test]
    fn test_viewport_round_trip() {
        let vp = portland();
        let original = ScreenPoint::new(37.0, 712.5);
        let back = vp.to_screen(vp.to_geo(original));
        assert!((back.x - original.x).abs() < 1e-6);
        assert!((back.y - original.y).abs() < 1e-6);
    }

    #[test]
    fn test_viewport_zoom_moves_points() {
        let mut vp = portland();
        let point = vp.to_geo(ScreenPoint::new(300.0, 400.0));

        vp.set_meters_per_pixel(2.0);
        let screen = vp.to_screen(point);
        assert!((screen.x - 250.0).abs() < 1e-6);
    }
}
