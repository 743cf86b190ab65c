use crate::domain::{GeoPoint, Polygon};

/// Rendering side of the host map.
///
/// The capture code asks for overlays to be drawn or cleared and for native
/// panning to be switched on or off; how that happens is up to the host.
pub trait MapSurface {
    /// Draw the in-progress stroke as a connected line, replacing any
    /// previous rendering of it
    fn render_line(&mut self, points: &[GeoPoint]);

    fn render_polygon(&mut self, polygon: &Polygon);

    /// Remove every line and polygon overlay added so far
    fn clear_overlays(&mut self);

    fn set_panning_enabled(&mut self, enabled: bool);

    fn set_center(&mut self, center: GeoPoint);
}
