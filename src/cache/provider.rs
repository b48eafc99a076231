//! Cache provider with enum dispatch.
//!
//! Consumers hold a `CacheProvider` and never name a concrete backend; the
//! dispatcher can be pointed at a different store without touching dispatch
//! logic.

use super::errors::CacheResult;
use super::providers::{MemoryReportCache, NoOpReportCache};
use super::traits::ReportCache;
use crate::config::GatewayConfig;
use std::time::Duration;
use tracing::info;

/// Internal cache backend enum for zero-cost dispatch
#[derive(Debug, Clone)]
enum CacheBackend {
    /// Moka-backed in-memory provider
    Memory(MemoryReportCache),
    /// No-op provider (always miss, always succeed)
    NoOp(NoOpReportCache),
}

/// Unified cache handle injected into the job dispatcher
#[derive(Debug, Clone)]
pub struct CacheProvider {
    backend: CacheBackend,
}

impl CacheProvider {
    /// Select a backend from configuration: in-memory when caching is
    /// enabled, no-op otherwise.
    pub fn from_config(config: &GatewayConfig) -> Self {
        let provider = if config.cache_enabled {
            Self::memory(config.cache_max_entries, config.cache_ttl())
        } else {
            Self::noop()
        };

        info!(
            provider = provider.provider_name(),
            "Report cache provider selected"
        );
        provider
    }

    /// Create an in-memory provider with an explicit capacity and TTL
    pub fn memory(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            backend: CacheBackend::Memory(MemoryReportCache::new(max_capacity, ttl)),
        }
    }

    /// Create a provider that never memoizes
    pub fn noop() -> Self {
        Self {
            backend: CacheBackend::NoOp(NoOpReportCache::new()),
        }
    }

    /// Whether this provider actually stores anything
    pub fn is_enabled(&self) -> bool {
        !matches!(self.backend, CacheBackend::NoOp(_))
    }

    pub fn provider_name(&self) -> &'static str {
        match &self.backend {
            CacheBackend::Memory(c) => c.provider_name(),
            CacheBackend::NoOp(c) => c.provider_name(),
        }
    }

    pub async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        match &self.backend {
            CacheBackend::Memory(c) => c.get(key).await,
            CacheBackend::NoOp(c) => c.get(key).await,
        }
    }

    pub async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        match &self.backend {
            CacheBackend::Memory(c) => c.set(key, value, ttl).await,
            CacheBackend::NoOp(c) => c.set(key, value, ttl).await,
        }
    }

    pub async fn health_check(&self) -> CacheResult<bool> {
        match &self.backend {
            CacheBackend::Memory(c) => c.health_check().await,
            CacheBackend::NoOp(c) => c.health_check().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_from_config_selects_memory_when_enabled() {
        let config = GatewayConfig::default();
        let provider = CacheProvider::from_config(&config);
        assert!(provider.is_enabled());
        assert_eq!(provider.provider_name(), "memory");
    }

    #[tokio::test]
    async fn test_from_config_selects_noop_when_disabled() {
        let config = GatewayConfig {
            cache_enabled: false,
            ..GatewayConfig::default()
        };
        let provider = CacheProvider::from_config(&config);
        assert!(!provider.is_enabled());
        assert_eq!(provider.provider_name(), "noop");
    }

    #[tokio::test]
    async fn test_provider_round_trip() {
        let provider = CacheProvider::memory(10, Duration::from_secs(60));
        provider.set("k", "v", Duration::from_secs(60)).await.unwrap();
        assert_eq!(provider.get("k").await.unwrap(), Some("v".to_string()));
    }
}
