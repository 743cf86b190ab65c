//! mapdraw - Capture freehand polygons on a map from pointer strokes

pub mod capture;
pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod replay;

pub use capture::{CoordinateAccumulator, DrawController, DrawMode, MapSurface};
pub use domain::{GeoPoint, Polygon, ScreenPoint};
pub use error::{Error, Result};
pub use geometry::{MapProjector, Viewport};
