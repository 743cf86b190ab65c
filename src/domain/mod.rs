pub mod point;
pub mod polygon;

pub use point::{CapturedPoint, GeoPoint, ScreenPoint};
pub use polygon::Polygon;
