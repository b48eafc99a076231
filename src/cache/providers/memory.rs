//! In-memory cache provider backed by Moka.
//!
//! In-process, process-lifetime scoped storage with TTL expiry and a
//! max-entry capacity bound; when full, Moka evicts the least recently used
//! entries. This cache is NOT distributed: every process maintains its own
//! memoization state.

use crate::cache::errors::CacheResult;
use crate::cache::traits::ReportCache;
use std::time::Duration;
use tracing::debug;

/// In-memory report cache with TTL support
///
/// All entries share the TTL configured at construction time; the per-call
/// `ttl` argument on [`ReportCache::set`] is accepted for interface parity
/// but the cache-level policy governs expiry.
#[derive(Clone)]
pub struct MemoryReportCache {
    cache: moka::future::Cache<String, String>,
    default_ttl: Duration,
}

impl std::fmt::Debug for MemoryReportCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryReportCache")
            .field("max_capacity", &self.cache.policy().max_capacity())
            .field("entry_count", &self.cache.entry_count())
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}

impl MemoryReportCache {
    /// Create a new in-memory cache bounded by entry count and TTL
    pub fn new(max_capacity: u64, default_ttl: Duration) -> Self {
        let cache = moka::future::Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(default_ttl)
            .build();

        debug!(
            max_capacity,
            ttl_seconds = default_ttl.as_secs(),
            "In-memory report cache created"
        );

        Self { cache, default_ttl }
    }
}

impl ReportCache for MemoryReportCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let result = self.cache.get(key).await;

        if result.is_some() {
            debug!(key = key, "Cache HIT (memory)");
        } else {
            debug!(key = key, "Cache MISS (memory)");
        }

        Ok(result)
    }

    async fn set(&self, key: &str, value: &str, _ttl: Duration) -> CacheResult<()> {
        self.cache.insert(key.to_string(), value.to_string()).await;

        debug!(
            key = key,
            ttl_seconds = self.default_ttl.as_secs(),
            "Cache SET (memory)"
        );
        Ok(())
    }

    async fn health_check(&self) -> CacheResult<bool> {
        Ok(true)
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}
