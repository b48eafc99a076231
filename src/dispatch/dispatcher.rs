//! # Job Dispatcher
//!
//! Executes one unit of report work: fingerprint the request, short-circuit
//! through the memoization cache, and only on a genuine miss call the report
//! producer and memoize its result.
//!
//! ## Guarantees
//!
//! - A fresh cache hit never reaches the producer.
//! - A genuine miss invokes the producer exactly once, even under concurrent
//!   same-fingerprint dispatches: a per-key in-flight guard serializes them,
//!   and the losers observe the winner's cache write.
//! - Producer failures propagate and are never cached.
//! - A failing cache store degrades to a miss (reads) or a no-op (writes);
//!   it never fails the job.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::cache::CacheProvider;
use crate::config::GatewayConfig;
use crate::fingerprint::build_key;
use crate::models::ReportRequest;
use crate::producer::{ProducerError, ReportProducer};
use thiserror::Error;

/// Terminal failure of one dispatched unit
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Producer(#[from] ProducerError),

    #[error("Report producer timed out after {0:?}")]
    Timeout(Duration),
}

/// Cache-aware executor for report units
pub struct JobDispatcher {
    cache: CacheProvider,
    producer: Arc<dyn ReportProducer>,
    cache_ttl: Duration,
    producer_timeout: Duration,
    // Per-fingerprint in-flight markers; an entry exists only while a
    // dispatch for that key is running.
    inflight: DashMap<String, Arc<Mutex<()>>>,
}

impl JobDispatcher {
    pub fn new(
        cache: CacheProvider,
        producer: Arc<dyn ReportProducer>,
        config: &GatewayConfig,
    ) -> Self {
        Self {
            cache,
            producer,
            cache_ttl: config.cache_ttl(),
            producer_timeout: config.producer_timeout(),
            inflight: DashMap::new(),
        }
    }

    /// Execute one report unit, returning the opaque result descriptor.
    pub async fn dispatch(&self, request: &ReportRequest) -> Result<String, DispatchError> {
        let key = build_key(request);

        debug!(
            report_kind = %request.kind,
            name = %request.name,
            cache_key = %key,
            "Dispatching report unit"
        );

        let gate = {
            let entry = self
                .inflight
                .entry(key.as_str().to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())));
            entry.value().clone()
        };

        let result = {
            let _guard = gate.lock().await;
            self.dispatch_guarded(request, key.as_str()).await
        };

        // Drop the marker unless another dispatch still holds the gate.
        self.inflight
            .remove_if(key.as_str(), |_, gate| Arc::strong_count(gate) <= 2);

        result
    }

    async fn dispatch_guarded(
        &self,
        request: &ReportRequest,
        key: &str,
    ) -> Result<String, DispatchError> {
        match self.cache.get(key).await {
            Ok(Some(cached)) if !cached.is_empty() => {
                info!(cache_key = %key, "Returning memoized report");
                return Ok(cached);
            }
            Ok(_) => {}
            Err(e) => {
                warn!(cache_key = %key, error = %e, "Cache read failed, continuing without memoization");
            }
        }

        let generated = match timeout(self.producer_timeout, self.producer.generate(request)).await
        {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => return Err(DispatchError::Producer(e)),
            Err(_) => return Err(DispatchError::Timeout(self.producer_timeout)),
        };

        if let Err(e) = self.cache.set(key, &generated, self.cache_ttl).await {
            warn!(cache_key = %key, error = %e, "Cache write failed, result not memoized");
        }

        info!(cache_key = %key, "Report generated and memoized");
        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportKind;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProducer {
        calls: AtomicUsize,
        delay: Duration,
        fail: bool,
    }

    impl CountingProducer {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay: Duration::ZERO,
                fail: false,
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                delay,
                ..Self::new()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReportProducer for CountingProducer {
        async fn generate(&self, request: &ReportRequest) -> Result<String, ProducerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if self.fail {
                return Err(ProducerError::Generation("boom".to_string()));
            }
            Ok(format!("reports/{}-{}.csv", request.kind, request.name))
        }
    }

    fn lion_request() -> ReportRequest {
        ReportRequest {
            kind: ReportKind::Species,
            name: "Lion".to_string(),
            region: "Africa".to_string(),
            percentage: Some(10),
        }
    }

    fn dispatcher_with(
        producer: Arc<CountingProducer>,
        cache: CacheProvider,
        config: &GatewayConfig,
    ) -> JobDispatcher {
        JobDispatcher::new(cache, producer, config)
    }

    #[tokio::test]
    async fn test_miss_invokes_producer_once_and_memoizes() {
        let producer = Arc::new(CountingProducer::new());
        let cache = CacheProvider::memory(100, Duration::from_secs(60));
        let dispatcher =
            dispatcher_with(Arc::clone(&producer), cache.clone(), &GatewayConfig::default());

        let result = dispatcher.dispatch(&lion_request()).await.unwrap();

        assert_eq!(producer.calls(), 1);
        assert_eq!(
            cache.get("SpeciesLionAfrica10").await.unwrap(),
            Some(result)
        );
    }

    #[tokio::test]
    async fn test_hit_returns_cached_value_without_producer_call() {
        let producer = Arc::new(CountingProducer::new());
        let cache = CacheProvider::memory(100, Duration::from_secs(60));
        cache
            .set("SpeciesLionAfrica10", "reports/cached.csv", Duration::from_secs(60))
            .await
            .unwrap();

        let dispatcher =
            dispatcher_with(Arc::clone(&producer), cache, &GatewayConfig::default());

        let result = dispatcher.dispatch(&lion_request()).await.unwrap();

        assert_eq!(result, "reports/cached.csv");
        assert_eq!(producer.calls(), 0);
    }

    #[tokio::test]
    async fn test_producer_failure_propagates_and_is_not_cached() {
        let producer = Arc::new(CountingProducer::failing());
        let cache = CacheProvider::memory(100, Duration::from_secs(60));
        let dispatcher =
            dispatcher_with(Arc::clone(&producer), cache.clone(), &GatewayConfig::default());

        let result = dispatcher.dispatch(&lion_request()).await;

        assert!(matches!(result, Err(DispatchError::Producer(_))));
        assert_eq!(cache.get("SpeciesLionAfrica10").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_concurrent_same_key_dispatches_share_one_producer_call() {
        let producer = Arc::new(CountingProducer::slow(Duration::from_millis(50)));
        let cache = CacheProvider::memory(100, Duration::from_secs(60));
        let dispatcher = Arc::new(dispatcher_with(
            Arc::clone(&producer),
            cache,
            &GatewayConfig::default(),
        ));

        let request = lion_request();
        let (first, second) = tokio::join!(
            dispatcher.dispatch(&request),
            dispatcher.dispatch(&request)
        );

        assert_eq!(first.unwrap(), second.unwrap());
        assert_eq!(producer.calls(), 1);
    }

    #[tokio::test]
    async fn test_distinct_keys_each_reach_the_producer() {
        let producer = Arc::new(CountingProducer::new());
        let cache = CacheProvider::memory(100, Duration::from_secs(60));
        let dispatcher =
            dispatcher_with(Arc::clone(&producer), cache, &GatewayConfig::default());

        let lion = lion_request();
        let tiger = ReportRequest {
            name: "Tiger".to_string(),
            ..lion.clone()
        };

        dispatcher.dispatch(&lion).await.unwrap();
        dispatcher.dispatch(&tiger).await.unwrap();

        assert_eq!(producer.calls(), 2);
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_regeneration() {
        let producer = Arc::new(CountingProducer::new());
        let cache = CacheProvider::memory(100, Duration::from_millis(50));
        let dispatcher =
            dispatcher_with(Arc::clone(&producer), cache, &GatewayConfig::default());

        let request = lion_request();
        dispatcher.dispatch(&request).await.unwrap();
        tokio::time::sleep(Duration::from_millis(120)).await;
        dispatcher.dispatch(&request).await.unwrap();

        assert_eq!(producer.calls(), 2);
    }

    #[tokio::test]
    async fn test_slow_producer_times_out() {
        let producer = Arc::new(CountingProducer::slow(Duration::from_millis(200)));
        let cache = CacheProvider::memory(100, Duration::from_secs(60));
        let config = GatewayConfig {
            producer_timeout_ms: 50,
            ..GatewayConfig::default()
        };
        let dispatcher = dispatcher_with(Arc::clone(&producer), cache, &config);

        let result = dispatcher.dispatch(&lion_request()).await;

        assert!(matches!(result, Err(DispatchError::Timeout(_))));
    }
}
