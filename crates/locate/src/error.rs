//! Locator Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A locator error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for locator construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Only construction can fail; a running search never does — every runtime
/// failure degrades to "no candidates found".
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// Search roots must be absolute paths.
    #[display("search root is not absolute: {}", _0.display())]
    RelativeRoot(#[error(not(source))] PathBuf),
    /// At least one search root is required.
    #[display("no search roots configured")]
    NoRoots,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            _ => false,
        }
    }
}
