pub mod distance;
pub mod projection;

pub use distance::{distance_km, screen_distance};
pub use projection::{MapProjector, Viewport};
