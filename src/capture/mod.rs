pub mod accumulator;
pub mod controller;
pub mod events;
pub mod surface;

pub use accumulator::CoordinateAccumulator;
pub use controller::{DrawController, DrawMode, EventChannels};
pub use events::{Listeners, PointerEvent, PointerPhase, PointerSource};
pub use surface::MapSurface;
