use serde::Deserialize;

use crate::domain::ScreenPoint;

/// Stage of a single-pointer stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Began,
    Moved,
    Ended,
}

/// A phase-tagged pointer position, as delivered by the host surface
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    #[serde(flatten)]
    pub position: ScreenPoint,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            phase,
            position: ScreenPoint::new(x, y),
        }
    }

    pub fn began(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Began, x, y)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Moved, x, y)
    }

    pub fn ended(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Ended, x, y)
    }
}

/// Anything that yields pointer events in delivery order
pub trait PointerSource {
    fn next_event(&mut self) -> Option<PointerEvent>;
}

type Listener<T> = Box<dyn FnMut(T)>;

/// Zero or more listeners for one kind of notification.
///
/// Each listener receives its own copy of the payload.
pub struct Listeners<T> {
    listeners: Vec<Listener<T>>,
}

impl<T: Clone> Listeners<T> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(T) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, value: &T) {
        for listener in &mut self.listeners {
            listener(value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T: Clone> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listeners({})", self.listeners.len())
    }
}
