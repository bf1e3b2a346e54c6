//! Live name-index locator over the local filesystem.

use crate::CopyLocator;
use crate::error::{ErrorKind, Result};
use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

/// How long to wait between sweeps while nothing but the source has shown up.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Searches the configured roots for files sharing the source's file name.
///
/// The query is *live*: a sweep that turns up only the source itself (or
/// nothing at all) does not conclude the search — the copy may still be in
/// flight — so the locator sleeps for the poll interval and sweeps again.
/// The first sweep containing at least one path other than the source
/// resolves the call with that full set; the timeout resolves it with an
/// empty set. Both teardown and exactly-once completion fall out of the
/// structure: one future, and cancelling it drops the in-flight walk.
///
/// Unreadable directories, broken symlinks and other per-entry failures are
/// skipped silently; an unlucky sweep just finds less.
///
/// # Examples
///
/// ```no_run
/// use ledge_locate::{CopyLocator, NameIndexLocator};
/// use std::path::Path;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let locator = NameIndexLocator::new(["/home/me"])?;
/// let candidates = locator.find_candidates(Path::new("/home/me/shelf/a.txt"), Duration::from_secs(10)).await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NameIndexLocator {
    roots: Vec<PathBuf>,
    poll_interval: Duration,
}

impl NameIndexLocator {
    /// Create a locator sweeping the given roots.
    ///
    /// # Errors
    /// Returns an error when no roots are given or any root is relative.
    pub fn new(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Result<Self> {
        let roots: Vec<PathBuf> = roots.into_iter().map(Into::into).collect();
        if roots.is_empty() {
            exn::bail!(ErrorKind::NoRoots);
        }
        if let Some(relative) = roots.iter().find(|root| !root.is_absolute()) {
            exn::bail!(ErrorKind::RelativeRoot(relative.clone()));
        }
        Ok(Self { roots, poll_interval: DEFAULT_POLL_INTERVAL })
    }

    /// Change how long the locator waits between sweeps.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// One full pass over every root, collecting files whose final path
    /// component equals `file_name`. Per-entry errors are skipped so a
    /// permission-denied subtree costs us its contents, not the sweep.
    async fn sweep(&self, file_name: &OsStr) -> Vec<PathBuf> {
        let mut matches = Vec::new();
        let mut stack: Vec<PathBuf> = self.roots.clone();

        while let Some(current) = stack.pop() {
            let mut entries = match fs::read_dir(&current).await {
                Ok(entries) => entries,
                Err(_) => continue,
            };
            loop {
                let entry = match entries.next_entry().await {
                    Ok(Some(entry)) => entry,
                    Ok(None) => break,
                    Err(_) => break,
                };
                let Ok(file_type) = entry.file_type().await else {
                    continue;
                };
                // file_type() does not follow symlinks, so symlinked
                // directories are neither descended nor reported. Keeps the
                // walk cycle-free.
                if file_type.is_dir() {
                    stack.push(entry.path());
                } else if file_type.is_file() && entry.file_name() == file_name {
                    matches.push(entry.path());
                }
            }
        }
        matches
    }
}

#[async_trait]
impl CopyLocator for NameIndexLocator {
    async fn find_candidates(&self, source: &Path, timeout: Duration) -> Vec<PathBuf> {
        let Some(file_name) = source.file_name().map(OsStr::to_os_string) else {
            return Vec::new();
        };

        let search = async {
            let mut pass = 0u32;
            loop {
                let found = self.sweep(&file_name).await;
                if found.iter().any(|path| path != source) {
                    tracing::trace!(source = %source.display(), pass, hits = found.len(), "sweep found candidates");
                    return found;
                }
                pass += 1;
                tokio::time::sleep(self.poll_interval).await;
            }
        };

        match tokio::time::timeout(timeout, search).await {
            Ok(found) => found,
            // Timed out with nothing but the source in sight. Empty means
            // "nothing found", which downstream maps to keeping the source.
            Err(_) => {
                tracing::debug!(source = %source.display(), ?timeout, "copy search timed out");
                Vec::new()
            },
        }
    }
}
