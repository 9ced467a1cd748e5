//! Rewrite error types.

use thiserror::Error;

/// Result type for rewrite operations.
pub type RewriteResult<T> = Result<T, RewriteError>;

/// Errors that can occur while rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// The next generation would hold more symbols than allowed.
    ///
    /// `required` is `None` when the length does not fit in a `u64`.
    #[error("further iteration would exceed the size limit of {limit} symbols")]
    SizeLimitExceeded { required: Option<u64>, limit: u64 },
}

impl RewriteError {
    pub fn size_limit_exceeded(required: Option<u64>, limit: u64) -> Self {
        Self::SizeLimitExceeded { required, limit }
    }
}
