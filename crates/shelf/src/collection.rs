//! The ordered collection of parked files.

use crate::entry::{EntryId, ShelfEntry, Thumbnail};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Ordered sequence of [`ShelfEntry`] values plus the selection set.
///
/// Invariants, upheld by every mutator:
/// - the selection set only ever contains ids of entries currently in the
///   sequence (removal clears selection in the same call);
/// - no two entries share a source path;
/// - insertion order is preserved; only [`move_items`](Self::move_items)
///   reorders.
#[derive(Debug, Default)]
pub struct Shelf {
    entries: Vec<ShelfEntry>,
    selection: HashSet<EntryId>,
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park each path not already on the shelf, preserving input order.
    ///
    /// Duplicates — against existing entries and within the same batch —
    /// are silently skipped. Returns the ids of the entries that were
    /// actually created, so the caller can kick off thumbnail generation
    /// for exactly those.
    pub fn add(&mut self, paths: impl IntoIterator<Item = PathBuf>) -> Vec<EntryId> {
        let mut added = Vec::new();
        for path in paths {
            if self.contains_path(&path) {
                continue;
            }
            let entry = ShelfEntry::new(path);
            added.push(entry.id);
            self.entries.push(entry);
        }
        added
    }

    /// Remove one entry by id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: EntryId) {
        self.entries.retain(|entry| entry.id != id);
        self.selection.remove(&id);
    }

    /// Remove a batch of entries by id, dropping them from the selection
    /// set in the same call.
    pub fn remove_many(&mut self, ids: impl IntoIterator<Item = EntryId>) {
        let ids: HashSet<EntryId> = ids.into_iter().collect();
        self.entries.retain(|entry| !ids.contains(&entry.id));
        self.selection.retain(|id| !ids.contains(id));
    }

    /// Remove the currently selected entries.
    pub fn remove_selected(&mut self) {
        let selected: Vec<EntryId> = self.selection.iter().copied().collect();
        self.remove_many(selected);
    }

    /// Remove every entry whose path is in `paths`, returning the removed
    /// ids. Used after a completed drag-out to clear exactly the dragged
    /// entries.
    pub fn remove_by_paths<P: AsRef<Path>>(&mut self, paths: &[P]) -> Vec<EntryId> {
        let paths: HashSet<&Path> = paths.iter().map(AsRef::as_ref).collect();
        let removed: Vec<EntryId> =
            self.entries.iter().filter(|entry| paths.contains(entry.path.as_path())).map(|entry| entry.id).collect();
        self.remove_many(removed.iter().copied());
        removed
    }

    pub fn remove_all(&mut self) {
        self.entries.clear();
        self.selection.clear();
    }

    pub fn select_all(&mut self) {
        self.selection = self.entries.iter().map(|entry| entry.id).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Toggle one id without touching the rest of the selection.
    /// Toggling an id that is not on the shelf is a no-op.
    pub fn toggle_selection(&mut self, id: EntryId) {
        if !self.contains_id(id) {
            return;
        }
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    /// Replace the selection with exactly the one id (if present).
    pub fn select_only(&mut self, id: EntryId) {
        self.selection.clear();
        if self.contains_id(id) {
            self.selection.insert(id);
        }
    }

    /// Reorder: move the entries at the given offsets to `to`.
    ///
    /// Standard list-reorder semantics — `to` is an index into the
    /// *pre-removal* sequence. The sources (which may be scattered) are
    /// removed first, keeping their relative order, then reinserted as one
    /// run at the target adjusted by how many removed offsets preceded it.
    /// Out-of-bounds offsets are ignored; an out-of-bounds target clamps.
    pub fn move_items(&mut self, from: &[usize], to: usize) {
        let mut offsets: Vec<usize> = from.iter().copied().filter(|&i| i < self.entries.len()).collect();
        offsets.sort_unstable();
        offsets.dedup();
        if offsets.is_empty() {
            return;
        }

        let mut moved = Vec::with_capacity(offsets.len());
        for &offset in offsets.iter().rev() {
            moved.push(self.entries.remove(offset));
        }
        moved.reverse();

        let target = to.min(self.entries.len() + moved.len());
        let adjusted = target - offsets.iter().filter(|&&i| i < target).count();
        self.entries.splice(adjusted..adjusted, moved);
    }

    /// Attach (or replace) the preview thumbnail of an entry in place.
    ///
    /// Identity-preserving: the entry keeps its id and position. Returns
    /// `false` when the entry was removed before the thumbnail arrived.
    pub fn attach_thumbnail(&mut self, id: EntryId, thumbnail: Thumbnail) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.thumbnail = Some(thumbnail);
                true
            },
            None => false,
        }
    }

    pub fn entries(&self) -> &[ShelfEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&ShelfEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_path(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry.path == path)
    }

    fn contains_id(&self, id: EntryId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Selected entries, in collection order.
    pub fn selected_entries(&self) -> Vec<&ShelfEntry> {
        self.entries.iter().filter(|entry| self.selection.contains(&entry.id)).collect()
    }

    pub fn selected_ids(&self) -> &HashSet<EntryId> {
        &self.selection
    }

    /// The paths a drag-out carries: the selected entries when anything is
    /// selected, otherwise everything on the shelf.
    pub fn drag_set(&self) -> Vec<PathBuf> {
        let selected = self.selected_entries();
        if selected.is_empty() {
            self.entries.iter().map(|entry| entry.path.clone()).collect()
        } else {
            selected.into_iter().map(|entry| entry.path.clone()).collect()
        }
    }
}
