//! No-op cache provider.
//!
//! Always returns None/success. Used when memoization is disabled; every
//! dispatch then reaches the report producer.

use crate::cache::errors::CacheResult;
use crate::cache::traits::ReportCache;
use std::time::Duration;

/// No-op report cache that never memoizes anything
///
/// All reads miss, all writes succeed silently.
#[derive(Debug, Clone, Default)]
pub struct NoOpReportCache;

impl NoOpReportCache {
    /// Create a new no-op cache
    pub fn new() -> Self {
        Self
    }
}

impl ReportCache for NoOpReportCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> CacheResult<bool> {
        Ok(true)
    }

    fn provider_name(&self) -> &'static str {
        "noop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_get_returns_none() {
        let cache = NoOpReportCache::new();
        assert_eq!(cache.get("any_key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_noop_set_succeeds() {
        let cache = NoOpReportCache::new();
        cache
            .set("key", "value", Duration::from_secs(60))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_noop_provider_name() {
        let cache = NoOpReportCache::new();
        assert_eq!(cache.provider_name(), "noop");
    }
}
