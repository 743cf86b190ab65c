use tracing::{debug, info};

use super::accumulator::CoordinateAccumulator;
use super::events::{Listeners, PointerEvent, PointerPhase, PointerSource};
use super::surface::MapSurface;
use crate::domain::{GeoPoint, Polygon};
use crate::geometry::MapProjector;

/// Whether pointer input pans the map or draws on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    #[default]
    Pan,
    Draw,
}

/// Notification channels a host can subscribe to
#[derive(Debug, Default)]
pub struct EventChannels {
    pub polygon_drawn: Listeners<Polygon>,
    pub mode_changed: Listeners<DrawMode>,
    pub map_ready: Listeners<()>,
    pub location_updated: Listeners<GeoPoint>,
}

/// Gates pointer input into a [`CoordinateAccumulator`] based on [`DrawMode`].
///
/// Starts in `Pan`. Each completed stroke in `Draw` emits one polygon and
/// drops back to `Pan`, so drawing has to be re-armed for the next shape.
pub struct DrawController<P, S> {
    projector: P,
    surface: S,
    mode: DrawMode,
    accumulator: CoordinateAccumulator,
    channels: EventChannels,
    location: Option<GeoPoint>,
}

impl<P: MapProjector, S: MapSurface> DrawController<P, S> {
    pub fn new(projector: P, surface: S) -> Self {
        Self {
            projector,
            surface,
            mode: DrawMode::Pan,
            accumulator: CoordinateAccumulator::new(),
            channels: EventChannels::default(),
            location: None,
        }
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn is_drawing(&self) -> bool {
        self.mode == DrawMode::Draw
    }

    /// Start a fresh drawing session
    pub fn enable_drawing(&mut self) {
        debug!(from = ?self.mode, "enable drawing");
        self.mode = DrawMode::Draw;
        self.surface.set_panning_enabled(false);
        self.surface.clear_overlays();
        self.accumulator.reset();
        self.channels.mode_changed.emit(&self.mode);
    }

    /// Drop any in-progress stroke and hand pointer input back to the map
    pub fn disable_drawing(&mut self) {
        debug!(from = ?self.mode, "disable drawing");
        self.mode = DrawMode::Pan;
        self.accumulator.reset();
        self.surface.set_panning_enabled(true);
        self.channels.mode_changed.emit(&self.mode);
    }

    pub fn toggle_drawing(&mut self) {
        match self.mode {
            DrawMode::Draw => self.disable_drawing(),
            DrawMode::Pan => self.enable_drawing(),
        }
    }

    /// Feed one pointer event.
    ///
    /// Returns the polygon when this event completed a stroke.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<Polygon> {
        if self.mode == DrawMode::Pan {
            return None;
        }

        let point = self.projector.to_geo(event.position);
        let projected = self.projector.to_screen(point);
        let line = self.accumulator.append(point, projected);
        self.surface.render_line(&line);

        if event.phase != PointerPhase::Ended {
            return None;
        }

        let polygon = self.accumulator.close()?;
        info!(vertices = polygon.len(), "polygon drawn");
        self.surface.render_polygon(&polygon);
        self.channels.polygon_drawn.emit(&polygon);
        self.disable_drawing();
        Some(polygon)
    }

    /// Feed every event from `source`, returning the polygons drawn
    pub fn drain(&mut self, source: &mut impl PointerSource) -> Vec<Polygon> {
        let mut polygons = Vec::new();
        while let Some(event) = source.next_event() {
            if let Some(polygon) = self.handle_pointer(event) {
                polygons.push(polygon);
            }
        }
        polygons
    }

    /// Host signal that the map finished loading
    pub fn map_loaded(&mut self) {
        self.channels.map_ready.emit(&());
    }

    /// Host signal that the user's location changed; re-centers the map
    pub fn user_location_updated(&mut self, location: GeoPoint) {
        debug!(lat = location.lat, lon = location.lon, "user location updated");
        self.location = Some(location);
        self.surface.set_center(location);
        self.channels.location_updated.emit(&location);
    }

    pub fn current_location(&self) -> Option<GeoPoint> {
        self.location
    }

    /// Recompute cached screen positions after the projector changed
    pub fn viewport_changed(&mut self) {
        self.accumulator.reproject(&self.projector);
    }

    pub fn on_polygon_drawn(&mut self, listener: impl FnMut(Polygon) + 'static) {
        self.channels.polygon_drawn.subscribe(listener);
    }

    pub fn on_mode_changed(&mut self, listener: impl FnMut(DrawMode) + 'static) {
        self.channels.mode_changed.subscribe(listener);
    }

    pub fn on_map_ready(&mut self, listener: impl FnMut(()) + 'static) {
        self.channels.map_ready.subscribe(listener);
    }

    pub fn on_location_updated(&mut self, listener: impl FnMut(GeoPoint) + 'static) {
        self.channels.location_updated.subscribe(listener);
    }

    pub fn accumulator(&self) -> &CoordinateAccumulator {
        &self.accumulator
    }

    pub fn projector(&self) -> &P {
        &self.projector
    }

    pub fn projector_mut(&mut self) -> &mut P {
        &mut self.projector
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScreenPoint;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Screen x/y map straight onto lon/lat
    struct Identity;

    impl MapProjector for Identity {
        fn to_geo(&self, screen: ScreenPoint) -> GeoPoint {
            GeoPoint::new(screen.y, screen.x)
        }

        fn to_screen(&self, point: GeoPoint) -> ScreenPoint {
            ScreenPoint::new(point.lon, point.lat)
        }
    }

    #[derive(Default)]
    struct Recorder {
        lines: usize,
        polygons: usize,
        clears: usize,
        panning: Option<bool>,
        center: Option<GeoPoint>,
    }

    impl MapSurface for Recorder {
        fn render_line(&mut self, _points: &[GeoPoint]) {
            self.lines += 1;
        }

        fn render_polygon(&mut self, _polygon: &Polygon) {
            self.polygons += 1;
        }

        fn clear_overlays(&mut self) {
            self.clears += 1;
        }

        fn set_panning_enabled(&mut self, enabled: bool) {
            self.panning = Some(enabled);
        }

        fn set_center(&mut self, center: GeoPoint) {
            self.center = Some(center);
        }
    }

    fn controller() -> DrawController<Identity, Recorder> {
        DrawController::new(Identity, Recorder::default())
    }

    #[test]
    fn test_starts_in_pan() {
        assert_eq!(controller().mode(), DrawMode::Pan);
    }

    #[test]
    fn test_enable_drawing_disables_panning() {
        let mut ctl = controller();
        ctl.enable_drawing();
        assert!(ctl.is_drawing());
        assert_eq!(ctl.surface().panning, Some(false));
        assert_eq!(ctl.surface().clears, 1);
    }

    #[test]
    fn test_enable_drawing_clears_prior_points() {
        let mut ctl = controller();
        ctl.enable_drawing();
        ctl.handle_pointer(PointerEvent::began(1.0, 1.0));
        ctl.handle_pointer(PointerEvent::moved(2.0, 2.0));
        assert_eq!(ctl.accumulator().len(), 2);

        // Re-arming while already drawing starts over
        ctl.enable_drawing();
        assert!(ctl.accumulator().is_empty());
    }

    #[test]
    fn test_pan_mode_ignores_pointer() {
        let mut ctl = controller();
        let drawn = Rc::new(RefCell::new(0));
        let d = drawn.clone();
        ctl.on_polygon_drawn(move |_| *d.borrow_mut() += 1);

        assert!(ctl.handle_pointer(PointerEvent::began(0.0, 0.0)).is_none());
        assert!(ctl.handle_pointer(PointerEvent::ended(1.0, 1.0)).is_none());
        assert!(ctl.accumulator().is_empty());
        assert_eq!(*drawn.borrow(), 0);
        assert_eq!(ctl.surface().lines, 0);
    }

    #[test]
    fn test_completed_stroke() {
        let mut ctl = controller();
        let drawn = Rc::new(RefCell::new(Vec::new()));
        let d = drawn.clone();
        ctl.on_polygon_drawn(move |p| d.borrow_mut().push(p));

        ctl.enable_drawing();
        ctl.handle_pointer(PointerEvent::began(0.0, 0.0));
        ctl.handle_pointer(PointerEvent::moved(1.0, 1.0));
        let polygon = ctl.handle_pointer(PointerEvent::ended(2.0, 2.0)).unwrap();

        let expected = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(2.0, 2.0),
            GeoPoint::new(0.0, 0.0),
        ];
        assert_eq!(polygon.points, expected);
        assert_eq!(drawn.borrow().len(), 1);
        assert_eq!(drawn.borrow()[0].points, expected);
        assert_eq!(ctl.surface().lines, 3);
        assert_eq!(ctl.surface().polygons, 1);
    }

    #[test]
    fn test_stroke_exits_draw_mode_once() {
        let mut ctl = controller();
        let modes = Rc::new(RefCell::new(Vec::new()));
        let m = modes.clone();
        ctl.on_mode_changed(move |mode| m.borrow_mut().push(mode));

        ctl.enable_drawing();
        ctl.handle_pointer(PointerEvent::began(0.0, 0.0));
        ctl.handle_pointer(PointerEvent::moved(1.0, 0.0));
        ctl.handle_pointer(PointerEvent::ended(1.0, 1.0));

        assert_eq!(ctl.mode(), DrawMode::Pan);
        assert_eq!(*modes.borrow(), vec![DrawMode::Draw, DrawMode::Pan]);
        assert!(ctl.accumulator().is_empty());
        assert_eq!(ctl.surface().panning, Some(true));

        // A second stroke without re-arming is ignored
        assert!(ctl.handle_pointer(PointerEvent::began(5.0, 5.0)).is_none());
        assert!(ctl.accumulator().is_empty());
    }

    #[test]
    fn test_disable_drawing_idempotent() {
        let mut ctl = controller();
        ctl.enable_drawing();
        ctl.handle_pointer(PointerEvent::began(1.0, 1.0));

        ctl.disable_drawing();
        ctl.disable_drawing();
        assert_eq!(ctl.mode(), DrawMode::Pan);
        assert!(ctl.accumulator().is_empty());
    }

    #[test]
    fn test_toggle_drawing() {
        let mut ctl = controller();
        ctl.toggle_drawing();
        assert_eq!(ctl.mode(), DrawMode::Draw);
        ctl.toggle_drawing();
        assert_eq!(ctl.mode(), DrawMode::Pan);
    }

    #[test]
    fn test_tap_yields_degenerate_polygon() {
        let mut ctl = controller();
        ctl.enable_drawing();
        ctl.handle_pointer(PointerEvent::began(4.0, 4.0));
        let polygon = ctl.handle_pointer(PointerEvent::ended(4.0, 4.0)).unwrap();
        assert_eq!(polygon.len(), 3);
        assert_eq!(polygon.first(), polygon.last());
    }

    #[test]
    fn test_user_location_recenters() {
        let mut ctl = controller();
        let seen = Rc::new(RefCell::new(None));
        let s = seen.clone();
        ctl.on_location_updated(move |loc| *s.borrow_mut() = Some(loc));

        let here = GeoPoint::new(45.5, -122.6);
        ctl.user_location_updated(here);

        assert_eq!(ctl.current_location(), Some(here));
        assert_eq!(ctl.surface().center, Some(here));
        assert_eq!(*seen.borrow(), Some(here));
    }

    #[test]
    fn test_map_loaded_notifies() {
        let mut ctl = controller();
        let ready = Rc::new(RefCell::new(false));
        let r = ready.clone();
        ctl.on_map_ready(move |()| *r.borrow_mut() = true);

        ctl.map_loaded();
        assert!(*ready.borrow());
    }
}
