//! Configuration Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A configuration error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The layered sources could not be read or deserialized.
    #[display("could not load configuration")]
    Load,
    /// A duration field is negative or not a number.
    #[display("{field} must be a non-negative number of seconds")]
    InvalidDuration {
        #[error(not(source))]
        field: &'static str,
    },
    /// Search roots must be absolute paths.
    #[display("search root is not absolute: {}", _0.display())]
    RelativeRoot(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            _ => false,
        }
    }
}
