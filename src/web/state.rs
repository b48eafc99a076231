//! # Web Application State
//!
//! Shared state for the HTTP surface plus the wiring that assembles the
//! gateway stack from configuration and a producer collaborator.

use std::sync::Arc;

use tracing::info;

use crate::cache::CacheProvider;
use crate::config::GatewayConfig;
use crate::dispatch::JobDispatcher;
use crate::orchestration::{JobScheduler, ReportGateway};
use crate::producer::ReportProducer;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ReportGateway>,
}

impl AppState {
    /// Assemble the full stack: cache provider, dispatcher, scheduler,
    /// gateway.
    pub fn new(config: &GatewayConfig, producer: Arc<dyn ReportProducer>) -> Self {
        let cache = CacheProvider::from_config(config);
        let dispatcher = Arc::new(JobDispatcher::new(cache, producer, config));
        let scheduler = Arc::new(JobScheduler::start(config, dispatcher));
        let gateway = Arc::new(ReportGateway::new(scheduler));

        info!(
            worker_count = config.worker_count,
            cache_enabled = config.cache_enabled,
            "Report gateway state assembled"
        );

        Self { gateway }
    }

    /// Wrap an already-wired gateway (used when the host owns the parts).
    pub fn from_gateway(gateway: Arc<ReportGateway>) -> Self {
        Self { gateway }
    }
}
