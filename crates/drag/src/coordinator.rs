//! Applies drag decisions to the shelf and schedules verification.

use crate::outcome::DragOutcome;
use crate::policy::{DragDecision, decide};
use ledge_config::Settings;
use ledge_locate::LocatorHandle;
use ledge_shelf::{EntryId, SharedShelf};
use ledge_verify::Verifier;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Connects the drag-end signal to the shelf and the verification engine.
///
/// Shelf mutation happens before this returns; verification is scheduled on
/// a background task after the grace delay and never blocks the caller. A
/// later drag cannot cancel an in-flight verification — each one is
/// self-contained, and trashing an already-trashed file is a no-op.
pub struct DragCoordinator {
    shelf: SharedShelf,
    verifier: Arc<Verifier>,
    grace_delay: Duration,
}

impl DragCoordinator {
    /// `grace_delay` is how long to wait before verification starts, giving
    /// the receiving application time to finish writing its copy. Zero
    /// disables the wait.
    pub fn new(shelf: SharedShelf, verifier: Arc<Verifier>, grace_delay: Duration) -> Self {
        Self { shelf, verifier, grace_delay }
    }

    /// Assemble the whole pipeline from loaded [`Settings`]: wraps the
    /// locator in a [`Verifier`] with the configured search timeout and
    /// applies the configured grace delay.
    pub fn from_settings(shelf: SharedShelf, locator: LocatorHandle, settings: &Settings) -> Self {
        let verifier = Arc::new(Verifier::new(locator, settings.locate_timeout()));
        Self::new(shelf, verifier, settings.grace_delay())
    }

    /// Accept files dropped onto the shelf.
    pub async fn handle_drop(&self, paths: Vec<PathBuf>) -> Vec<EntryId> {
        self.shelf.write().await.add(paths)
    }

    /// Process one completed drag gesture.
    ///
    /// Returns the decision that was applied, for the caller's logging; all
    /// interesting consequences are side effects on the shelf and, later,
    /// the filesystem.
    #[instrument(skip_all, fields(sources = outcome.sources.len(), effective = outcome.operation_effective, modifier = outcome.modifier_held))]
    pub async fn handle_drag_end(&self, outcome: DragOutcome) -> DragDecision {
        let decision = decide(&outcome);
        match decision {
            DragDecision::Ignore => {},
            DragDecision::RemoveFromShelf => {
                self.shelf.write().await.remove_by_paths(&outcome.sources);
            },
            DragDecision::RemoveAndVerify => {
                self.shelf.write().await.remove_by_paths(&outcome.sources);
                self.schedule_verification(outcome.sources);
            },
        }
        decision
    }

    fn schedule_verification(&self, sources: Vec<PathBuf>) {
        let verifier = Arc::clone(&self.verifier);
        let grace_delay = self.grace_delay;
        tokio::spawn(async move {
            if !grace_delay.is_zero() {
                tokio::time::sleep(grace_delay).await;
            }
            verifier.verify_and_trash(&sources).await;
        });
    }
}
