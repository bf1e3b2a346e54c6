//! Deterministic in-memory locator for testing.

use crate::CopyLocator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory locator for tests: candidate sets are preset per file name,
/// no filesystem or index is touched.
///
/// An optional artificial delay makes the timeout path testable; a delay
/// longer than the caller's timeout resolves to an empty set, exactly like
/// the production locator.
///
/// # Examples
///
/// ```
/// use ledge_locate::{CopyLocator, MockLocator};
/// use std::path::Path;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let locator = MockLocator::with_candidates([("a.txt", vec!["/elsewhere/a.txt"])]);
/// let found = locator.find_candidates(Path::new("/shelf/a.txt"), Duration::from_secs(1)).await;
/// assert_eq!(found, [Path::new("/elsewhere/a.txt")]);
/// # }
/// ```
#[derive(Default)]
pub struct MockLocator {
    candidates: HashMap<OsString, Vec<PathBuf>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockLocator {
    /// A locator that never finds anything.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Preset candidate lists, keyed by source file name.
    pub fn with_candidates(
        candidates: impl IntoIterator<Item = (impl Into<OsString>, Vec<impl Into<PathBuf>>)>,
    ) -> Self {
        Self {
            candidates: candidates
                .into_iter()
                .map(|(name, paths)| (name.into(), paths.into_iter().map(Into::into).collect()))
                .collect(),
            ..Self::default()
        }
    }

    /// Delay each lookup, to exercise grace-delay and timeout behaviour.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of lookups performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn lookup(&self, source: &Path) -> Vec<PathBuf> {
        source.file_name().and_then(|name| self.candidates.get(name)).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl CopyLocator for MockLocator {
    async fn find_candidates(&self, source: &Path, timeout: Duration) -> Vec<PathBuf> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let answer = async {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.lookup(source)
        };
        tokio::time::timeout(timeout, answer).await.unwrap_or_default()
    }
}
