//! Shelf entry model and the ordered parked-file collection.
//!
//! A [`Shelf`] is the authoritative in-memory set of files a user has parked
//! while moving them between applications: an ordered sequence of
//! [`ShelfEntry`] values (insertion order is user-visible) plus a set of
//! currently-selected entry ids.
//!
//! The collection itself is single-threaded. Concurrent collaborators
//! (thumbnail producers, the drag coordinator) go through a [`SharedShelf`]
//! handle, which serialises every mutation behind one lock so there is no
//! window in which the selection set references a removed entry.

mod collection;
mod entry;
mod kind;

pub use crate::collection::Shelf;
pub use crate::entry::{EntryId, Icon, ShelfEntry, Thumbnail};
pub use crate::kind::FileKind;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle to a shelf shared between async collaborators.
///
/// All mutation re-enters through [`write`](Self::write), making the lock
/// the single logical owner context required by the collection invariants.
#[derive(Clone, Default)]
pub struct SharedShelf(Arc<RwLock<Shelf>>);

impl SharedShelf {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Shelf> {
        self.0.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Shelf> {
        self.0.write().await
    }
}
