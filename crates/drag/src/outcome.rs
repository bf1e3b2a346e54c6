//! The drag-end event value.

use std::path::PathBuf;

/// A point in screen coordinates, as reported by the drag session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// "Is this screen point inside one of my own visible windows?"
///
/// Supplied by the UI collaborator; used to detect a drop back onto the
/// shelf itself so it can be ignored instead of tearing entries out of the
/// collection.
pub trait SurfaceProbe: Send + Sync {
    fn contains(&self, point: ScreenPoint) -> bool;
}

impl<F> SurfaceProbe for F
where
    F: Fn(ScreenPoint) -> bool + Send + Sync,
{
    fn contains(&self, point: ScreenPoint) -> bool {
        self(point)
    }
}

/// Everything known about one completed external drag gesture.
///
/// Ephemeral: built when the OS reports the drag session ended, consumed by
/// [`decide`](crate::decide), never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DragOutcome {
    /// Source paths the drag carried (the shelf's drag set at gesture start).
    pub sources: Vec<PathBuf>,
    /// Whether the OS reports an effective operation (false on a cancelled
    /// or no-op drag).
    pub operation_effective: bool,
    /// Whether the designated modifier key was held at drag end.
    pub modifier_held: bool,
    /// Whether the drop landed back on one of our own surfaces.
    pub dropped_inside_own_surface: bool,
}

impl DragOutcome {
    pub fn new(
        sources: Vec<PathBuf>,
        operation_effective: bool,
        modifier_held: bool,
        dropped_inside_own_surface: bool,
    ) -> Self {
        Self { sources, operation_effective, modifier_held, dropped_inside_own_surface }
    }

    /// Build an outcome from the raw drag-end signal, resolving the drop
    /// point against the injected surface probe.
    pub fn from_drag_end(
        sources: Vec<PathBuf>,
        operation_effective: bool,
        modifier_held: bool,
        ended_at: ScreenPoint,
        probe: &dyn SurfaceProbe,
    ) -> Self {
        Self::new(sources, operation_effective, modifier_held, probe.contains(ended_at))
    }
}
