//! Cache error types

use thiserror::Error;

/// Errors that can occur during cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    /// The backing store rejected or failed the operation
    #[error("Cache backend error: {0}")]
    BackendError(String),

    /// Cache operation timed out
    #[error("Cache operation timed out: {0}")]
    Timeout(String),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;
