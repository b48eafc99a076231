//! Cache service trait definition

use super::errors::CacheResult;
use std::time::Duration;

/// Trait defining memoization cache operations
///
/// Implemented by concrete providers (in-memory, no-op). All operations are
/// async and return `CacheResult` for error handling; a provider error is a
/// signal for the dispatcher to fail open, never to fail the job.
pub trait ReportCache: Send + Sync {
    /// Get a memoized report descriptor by fingerprint key
    ///
    /// Returns `Ok(Some(value))` on a fresh hit, `Ok(None)` on a miss.
    /// An expired entry is a miss.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = CacheResult<Option<String>>> + Send;

    /// Memoize a report descriptor under a fingerprint key
    fn set(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> impl std::future::Future<Output = CacheResult<()>> + Send;

    /// Check if the cache backend is healthy
    fn health_check(&self) -> impl std::future::Future<Output = CacheResult<bool>> + Send;

    /// Get the name of the cache provider
    fn provider_name(&self) -> &'static str;
}
