//! The verify-then-trash engine.

use crate::compare;
use ledge_locate::LocatorHandle;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Why a source file was kept on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepReason {
    /// The locator resolved with an empty set (nothing found, or timeout).
    NoCandidates,
    /// Candidates existed but none carried the source's content.
    NoMatch,
    /// A match was found but the trash operation failed — most commonly the
    /// file was already gone, which is a success in spirit.
    TrashFailed,
}

/// Per-source outcome of a verification pass.
///
/// Informational: callers that care (tests, logs) can inspect it, but the
/// contract is observed through filesystem side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    /// A content-identical copy was confirmed; the source is in the trash.
    Trashed(PathBuf),
    /// No safe match; the source remains untouched.
    Kept(PathBuf, KeepReason),
}

/// Orchestrates copy location, content comparison and conditional trashing.
///
/// Construction wires in the [`CopyLocator`](ledge_locate::CopyLocator)
/// capability and the per-source search timeout; the engine has no other
/// state and no timeout of its own — each source is bounded transitively by
/// the locator's.
pub struct Verifier {
    locator: LocatorHandle,
    timeout: Duration,
}

impl Verifier {
    pub fn new(locator: LocatorHandle, timeout: Duration) -> Self {
        Self { locator, timeout }
    }

    /// Verify each source independently and trash the confirmed ones.
    ///
    /// Sources are processed concurrently; a failure or non-match on one
    /// never affects the others. Completes when every source has resolved.
    #[instrument(skip_all, fields(sources = sources.len()))]
    pub async fn verify_and_trash(&self, sources: &[PathBuf]) -> Vec<VerificationResult> {
        futures::future::join_all(sources.iter().map(|source| self.verify_one(source))).await
    }

    /// Fire-and-forget form: schedules the verification and returns
    /// immediately. Outcomes are observable only as filesystem effects.
    pub fn spawn_verify_and_trash(self: &Arc<Self>, sources: Vec<PathBuf>) {
        let verifier = Arc::clone(self);
        tokio::spawn(async move {
            verifier.verify_and_trash(&sources).await;
        });
    }

    async fn verify_one(&self, source: &Path) -> VerificationResult {
        let candidates = self.locator.find_candidates(source, self.timeout).await;
        if candidates.is_empty() {
            tracing::info!(source = %source.display(), "no copy found; keeping source");
            return VerificationResult::Kept(source.to_path_buf(), KeepReason::NoCandidates);
        }
        for candidate in candidates.iter().filter(|candidate| candidate.as_path() != source) {
            if compare::same_content(source, candidate).await {
                tracing::info!(source = %source.display(), copy = %candidate.display(), "copy confirmed; trashing source");
                return match move_to_trash(source).await {
                    Ok(()) => VerificationResult::Trashed(source.to_path_buf()),
                    Err(()) => VerificationResult::Kept(source.to_path_buf(), KeepReason::TrashFailed),
                };
            }
        }
        tracing::info!(source = %source.display(), candidates = candidates.len(), "no candidate matched; keeping source");
        VerificationResult::Kept(source.to_path_buf(), KeepReason::NoMatch)
    }
}

/// Trash every path unconditionally, for contexts where safety has already
/// been established. Per-file failures are absorbed: a file that is already
/// gone needs no trashing.
pub async fn trash_all<P: AsRef<Path>>(sources: &[P]) {
    for source in sources {
        _ = move_to_trash(source.as_ref()).await;
    }
}

/// Move one file to the recoverable trash. The `trash` API is synchronous,
/// so the call is pushed onto the blocking pool.
async fn move_to_trash(path: &Path) -> Result<(), ()> {
    let owned = path.to_path_buf();
    let result = tokio::task::spawn_blocking(move || trash::delete(&owned)).await;
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(error)) => {
            tracing::debug!(path = %path.display(), %error, "trash failed; leaving file in place");
            Err(())
        },
        Err(join_error) => {
            tracing::debug!(path = %path.display(), %join_error, "trash task failed");
            Err(())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledge_locate::MockLocator;
    use std::path::PathBuf;

    const TIMEOUT: Duration = Duration::from_secs(2);

    fn write(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn verifier_finding(name: &str, candidates: Vec<PathBuf>) -> Verifier {
        Verifier::new(Arc::new(MockLocator::with_candidates([(name, candidates)])), TIMEOUT)
    }

    #[tokio::test]
    async fn test_identical_copy_trashes_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = write(dir.path(), "a.txt", b"hello");
        let copy = write(dir.path(), "a_copy.txt", b"hello");

        let verifier = verifier_finding("a.txt", vec![copy]);
        let results = verifier.verify_and_trash(std::slice::from_ref(&source)).await;

        assert_eq!(results, [VerificationResult::Trashed(source.clone())]);
        assert!(!source.exists());
    }

    #[tokio::test]
    async fn test_same_size_different_bytes_keeps_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = write(dir.path(), "a.txt", b"hello");
        let copy = write(dir.path(), "a_copy.txt", b"HELLO");

        let verifier = verifier_finding("a.txt", vec![copy]);
        let results = verifier.verify_and_trash(std::slice::from_ref(&source)).await;

        assert_eq!(results, [VerificationResult::Kept(source.clone(), KeepReason::NoMatch)]);
        assert!(source.exists());
    }

    #[tokio::test]
    async fn test_different_size_keeps_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = write(dir.path(), "a.txt", b"short");
        let copy = write(dir.path(), "a_copy.txt", b"much longer content");

        let verifier = verifier_finding("a.txt", vec![copy]);
        let results = verifier.verify_and_trash(std::slice::from_ref(&source)).await;

        assert_eq!(results, [VerificationResult::Kept(source.clone(), KeepReason::NoMatch)]);
        assert!(source.exists());
    }

    #[tokio::test]
    async fn test_no_candidates_keeps_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = write(dir.path(), "a.txt", b"hello");

        let verifier = Verifier::new(Arc::new(MockLocator::empty()), TIMEOUT);
        let results = verifier.verify_and_trash(std::slice::from_ref(&source)).await;

        assert_eq!(results, [VerificationResult::Kept(source.clone(), KeepReason::NoCandidates)]);
        assert!(source.exists());
    }

    #[tokio::test]
    async fn test_self_candidate_never_matches() {
        let dir = tempfile::tempdir().unwrap();
        let source = write(dir.path(), "a.txt", b"hello");

        // The index legitimately reports the source itself.
        let verifier = verifier_finding("a.txt", vec![source.clone()]);
        let results = verifier.verify_and_trash(std::slice::from_ref(&source)).await;

        assert_eq!(results, [VerificationResult::Kept(source.clone(), KeepReason::NoMatch)]);
        assert!(source.exists());
    }

    #[tokio::test]
    async fn test_first_match_wins_over_later_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let source = write(dir.path(), "a.txt", b"hello");
        let miss = write(dir.path(), "near.txt", b"HELLO");
        let hit = write(dir.path(), "hit.txt", b"hello");

        let verifier = verifier_finding("a.txt", vec![source.clone(), miss, hit]);
        let results = verifier.verify_and_trash(std::slice::from_ref(&source)).await;

        assert_eq!(results, [VerificationResult::Trashed(source.clone())]);
        assert!(!source.exists());
    }

    #[tokio::test]
    async fn test_sources_resolve_independently() {
        let dir = tempfile::tempdir().unwrap();
        let matched = write(dir.path(), "a.txt", b"hello");
        let matched_copy = write(dir.path(), "copy_of_a.txt", b"hello");
        let unmatched = write(dir.path(), "b.txt", b"world");

        let verifier = Verifier::new(
            Arc::new(MockLocator::with_candidates([("a.txt", vec![matched_copy])])),
            TIMEOUT,
        );
        let results = verifier.verify_and_trash(&[matched.clone(), unmatched.clone()]).await;

        assert_eq!(
            results,
            [
                VerificationResult::Trashed(matched.clone()),
                VerificationResult::Kept(unmatched.clone(), KeepReason::NoCandidates),
            ]
        );
        assert!(!matched.exists());
        assert!(unmatched.exists());
    }

    #[tokio::test]
    async fn test_spawned_verification_runs_in_background() {
        let dir = tempfile::tempdir().unwrap();
        let source = write(dir.path(), "a.txt", b"hello");
        let copy = write(dir.path(), "a_copy.txt", b"hello");

        let verifier = Arc::new(verifier_finding("a.txt", vec![copy]));
        verifier.spawn_verify_and_trash(vec![source.clone()]);

        // Fire-and-forget: observe the side effect, bounded by a deadline.
        for _ in 0..100 {
            if !source.exists() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("source was not trashed within the deadline");
    }

    #[tokio::test]
    async fn test_trash_all_removes_files_and_ignores_missing() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.txt", b"1");
        let b = write(dir.path(), "b.txt", b"2");
        let missing = dir.path().join("gone.txt");

        trash_all(&[a.clone(), missing, b.clone()]).await;

        assert!(!a.exists());
        assert!(!b.exists());
    }

    #[tokio::test]
    async fn test_double_trash_is_a_silent_noop() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.txt", b"1");
        trash_all(std::slice::from_ref(&a)).await;
        trash_all(std::slice::from_ref(&a)).await;
        assert!(!a.exists());
    }
}
