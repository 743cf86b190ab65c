use tracing::debug;

use crate::domain::{CapturedPoint, GeoPoint, Polygon, ScreenPoint};
use crate::geometry::MapProjector;

/// The points of one drawing session, in the order they were captured.
///
/// Points only ever go on the tail. `close` appends a copy of the first
/// point but leaves the sequence in place; `reset` starts over.
#[derive(Debug, Clone, Default)]
pub struct CoordinateAccumulator {
    points: Vec<CapturedPoint>,
}

impl CoordinateAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Append a point and return the whole line captured so far
    pub fn append(&mut self, point: GeoPoint, projected: ScreenPoint) -> Vec<GeoPoint> {
        self.points.push(CapturedPoint::new(point, projected));
        debug!(
            lat = point.lat,
            lon = point.lon,
            count = self.points.len(),
            "appended point"
        );
        self.coordinates()
    }

    /// Close the ring by repeating the first point, returning a snapshot.
    ///
    /// Returns `None` and leaves the sequence untouched when empty.
    pub fn close(&mut self) -> Option<Polygon> {
        let first = *self.points.first()?;
        self.points.push(first);
        debug!(vertices = self.points.len(), "closed ring");
        Some(Polygon::new(self.coordinates()))
    }

    /// Refresh cached screen positions after the surface moved or zoomed
    pub fn reproject(&mut self, projector: &dyn MapProjector) {
        for point in &mut self.points {
            point.screen = Some(projector.to_screen(point.geo));
        }
    }

    pub fn coordinates(&self) -> Vec<GeoPoint> {
        self.points.iter().map(|p| p.geo).collect()
    }

    pub fn points(&self) -> &[CapturedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
