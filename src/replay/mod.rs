//! Recorded pointer strokes
//!
//! A script is a JSON array of pointer events:
//! `[{"phase": "began", "x": 10, "y": 20}, {"phase": "moved", ...}, ...]`

use std::collections::VecDeque;
use std::path::Path;

use crate::capture::{DrawController, MapSurface, PointerEvent, PointerPhase, PointerSource};
use crate::domain::Polygon;
use crate::error::{Error, Result};
use crate::geometry::MapProjector;

/// A pointer source backed by a pre-recorded list of events
#[derive(Debug, Clone, Default)]
pub struct ScriptedPointer {
    events: VecDeque<PointerEvent>,
}

impl ScriptedPointer {
    pub fn new(events: Vec<PointerEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let events: Vec<PointerEvent> = serde_json::from_str(json)?;
        if events.is_empty() {
            return Err(Error::EmptyScript);
        }
        Ok(Self::new(events))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl PointerSource for ScriptedPointer {
    fn next_event(&mut self) -> Option<PointerEvent> {
        self.events.pop_front()
    }
}

/// Play `source` into `controller` as a user with a pen button would.
///
/// Drawing is armed before the first stroke. With `rearm`, it is armed again
/// at the start of every later stroke; otherwise later strokes pan.
pub fn replay<P, S>(
    controller: &mut DrawController<P, S>,
    source: &mut impl PointerSource,
    rearm: bool,
) -> Vec<Polygon>
where
    P: MapProjector,
    S: MapSurface,
{
    let mut polygons = Vec::new();
    let mut armed_once = false;

    while let Some(event) = source.next_event() {
        if event.phase == PointerPhase::Began
            && !controller.is_drawing()
            && (!armed_once || rearm)
        {
            controller.enable_drawing();
            armed_once = true;
        }

        if let Some(polygon) = controller.handle_pointer(event) {
            polygons.push(polygon);
        }
    }

    polygons
}
