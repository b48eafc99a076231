//! Configuration for the report gateway.
//!
//! Defaults are suitable for development; every knob can be overridden through
//! `ENVIMPACT_`-prefixed environment variables.

use std::time::Duration;
use thiserror::Error;

/// Raised when an environment override cannot be parsed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Invalid value for {variable}: {reason}")]
    InvalidValue { variable: String, reason: String },
}

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Whether completed reports are memoized at all
    pub cache_enabled: bool,
    /// How long a memoized report stays fresh
    pub cache_ttl_secs: u64,
    /// Upper bound on memoized entries; oldest entries are evicted when full
    pub cache_max_entries: u64,
    /// Number of workers draining the job queue
    pub worker_count: usize,
    /// Bound on queued-but-unstarted units of work
    pub queue_capacity: usize,
    /// Upper bound on a single report producer call
    pub producer_timeout_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            cache_ttl_secs: 300,
            cache_max_entries: 1024,
            worker_count: 4,
            queue_capacity: 256,
            producer_timeout_ms: 30_000,
        }
    }
}

impl GatewayConfig {
    /// Build a configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let mut config = Self::default();

        if let Ok(enabled) = std::env::var("ENVIMPACT_CACHE_ENABLED") {
            config.cache_enabled = parse_var("ENVIMPACT_CACHE_ENABLED", &enabled)?;
        }

        if let Ok(ttl) = std::env::var("ENVIMPACT_CACHE_TTL_SECS") {
            config.cache_ttl_secs = parse_var("ENVIMPACT_CACHE_TTL_SECS", &ttl)?;
        }

        if let Ok(max_entries) = std::env::var("ENVIMPACT_CACHE_MAX_ENTRIES") {
            config.cache_max_entries = parse_var("ENVIMPACT_CACHE_MAX_ENTRIES", &max_entries)?;
        }

        if let Ok(workers) = std::env::var("ENVIMPACT_WORKER_COUNT") {
            config.worker_count = parse_var("ENVIMPACT_WORKER_COUNT", &workers)?;
        }

        if let Ok(capacity) = std::env::var("ENVIMPACT_QUEUE_CAPACITY") {
            config.queue_capacity = parse_var("ENVIMPACT_QUEUE_CAPACITY", &capacity)?;
        }

        if let Ok(timeout) = std::env::var("ENVIMPACT_PRODUCER_TIMEOUT_MS") {
            config.producer_timeout_ms = parse_var("ENVIMPACT_PRODUCER_TIMEOUT_MS", &timeout)?;
        }

        Ok(config)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn producer_timeout(&self) -> Duration {
        Duration::from_millis(self.producer_timeout_ms)
    }
}

fn parse_var<T: std::str::FromStr>(variable: &str, raw: &str) -> Result<T, ConfigurationError>
where
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigurationError::InvalidValue {
        variable: variable.to_string(),
        reason: e.to_string(),
    })
}
