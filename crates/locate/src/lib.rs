//! Copy locator: finds candidate copies of a file that was dragged out.
//!
//! After a modifier-drag the receiving application copies the file somewhere
//! we cannot observe directly; there is no reliable "copy completed" signal.
//! What we *can* do is search for files sharing the source's name and let the
//! verification engine compare contents. This crate defines the
//! [`CopyLocator`] capability and two implementations:
//!
//! - [`NameIndexLocator`] — the production locator. Sweeps the configured
//!   search roots and keeps re-sweeping on a poll interval, because a copy
//!   that is still being written (or not yet visible) at query time must
//!   still be observed. Hard timeout; resolves exactly once.
//! - [`MockLocator`] (behind the `mock` feature) — deterministic lookup for
//!   tests, no filesystem involved.
//!
//! The contract is deliberately infallible: a locator that finds nothing,
//! times out, or cannot read a directory returns an empty set, which
//! downstream always maps to "keep the source file".

pub mod error;
mod index;
#[cfg(feature = "mock")]
mod mock;

pub use crate::index::NameIndexLocator;
#[cfg(feature = "mock")]
pub use crate::mock::MockLocator;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Capability to search for candidate copies of a source file.
///
/// Implementations must resolve exactly once per call, within `timeout`:
/// either with every path observed to share the source's file name (the
/// source itself may be included — callers filter it), or with an empty
/// `Vec` when nothing qualifying was observed in time.
#[async_trait]
pub trait CopyLocator: Send + Sync {
    async fn find_candidates(&self, source: &Path, timeout: Duration) -> Vec<PathBuf>;
}

pub type LocatorHandle = Arc<dyn CopyLocator>;
