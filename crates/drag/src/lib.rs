//! Drag-end policy and coordination.
//!
//! A completed drag out of the shelf produces one [`DragOutcome`]. The pure
//! [`decide`] function maps it to a [`DragDecision`] — keep everything,
//! remove the dragged entries, or remove them *and* schedule verified
//! deletion of the source files. The [`DragCoordinator`] applies that
//! decision to a [`SharedShelf`](ledge_shelf::SharedShelf) and, when asked,
//! hands the sources to the
//! [`Verifier`](ledge_verify::Verifier) after a grace delay that gives the
//! receiving application time to finish writing its copy.
//!
//! The policy is stateless across gestures. Whether the drop landed on one
//! of our own windows is the UI collaborator's knowledge, injected through
//! the [`SurfaceProbe`] predicate — this crate assumes no windowing model.

mod coordinator;
mod outcome;
mod policy;

pub use crate::coordinator::DragCoordinator;
pub use crate::outcome::{DragOutcome, ScreenPoint, SurfaceProbe};
pub use crate::policy::{DragDecision, decide};
