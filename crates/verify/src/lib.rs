//! Verified deletion of dragged-out source files.
//!
//! When the user finishes a modifier-drag out of the shelf, the receiving
//! application performs the copy and tells us nothing about it. Deleting the
//! source on faith loses data whenever the copy was cancelled mid-flight
//! (the user hit "Stop" on a conflict dialog, the target volume filled up,
//! …). This crate closes that gap:
//!
//! 1. a [`CopyLocator`](ledge_locate::CopyLocator) produces candidate paths
//!    sharing the source's file name,
//! 2. [`compare::same_content`] checks a candidate actually carries the
//!    source's bytes (size first, then contents),
//! 3. only then is the source moved to the recoverable trash — never
//!    permanently erased.
//!
//! Every failure mode degrades toward keeping the source. The worst outcome
//! this crate can produce is a file that is still there.

pub mod compare;
mod engine;

pub use crate::engine::{KeepReason, VerificationResult, Verifier, trash_all};
