//! # Job Scheduler
//!
//! The asynchronous execution layer behind the gateway: a bounded queue
//! drained by a worker pool, with completion state stored per handle.
//! `submit` registers a unit and returns immediately; the unit's dispatcher
//! run happens exactly once on a worker, and its outcome is observable
//! out-of-band through [`JobScheduler::status`].

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::config::GatewayConfig;
use crate::dispatch::JobDispatcher;
use crate::models::ReportRequest;

use super::types::{JobHandle, JobState, JobStatusSnapshot, SchedulerError};

struct ScheduledUnit {
    handle: JobHandle,
    request: ReportRequest,
}

struct JobRecord {
    state: JobState,
    submitted_at: chrono::DateTime<Utc>,
    finished_at: Option<chrono::DateTime<Utc>>,
}

/// Worker-pool scheduler with a handle-keyed status store
pub struct JobScheduler {
    // Taken on shutdown so the queue closes and workers drain out.
    sender: Mutex<Option<mpsc::Sender<ScheduledUnit>>>,
    statuses: Arc<DashMap<JobHandle, JobRecord>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl JobScheduler {
    /// Start the scheduler and its worker pool.
    pub fn start(config: &GatewayConfig, dispatcher: Arc<JobDispatcher>) -> Self {
        let (sender, receiver) = mpsc::channel::<ScheduledUnit>(config.queue_capacity);
        let receiver = Arc::new(tokio::sync::Mutex::new(receiver));
        let statuses: Arc<DashMap<JobHandle, JobRecord>> = Arc::new(DashMap::new());

        let mut workers = Vec::with_capacity(config.worker_count);
        for worker_id in 0..config.worker_count {
            let receiver = Arc::clone(&receiver);
            let statuses = Arc::clone(&statuses);
            let dispatcher = Arc::clone(&dispatcher);

            workers.push(tokio::spawn(async move {
                loop {
                    let unit = { receiver.lock().await.recv().await };
                    let Some(unit) = unit else {
                        debug!(worker_id, "Job queue closed, worker stopping");
                        break;
                    };

                    run_unit(worker_id, unit, &statuses, &dispatcher).await;
                }
            }));
        }

        info!(
            worker_count = config.worker_count,
            queue_capacity = config.queue_capacity,
            "Job scheduler started"
        );

        Self {
            sender: Mutex::new(Some(sender)),
            statuses,
            workers: Mutex::new(workers),
        }
    }

    /// Register a unit of work and return its handle immediately.
    ///
    /// A full queue or a stopped scheduler is reported as an error, never a
    /// silent drop.
    pub fn submit(&self, request: ReportRequest) -> Result<JobHandle, SchedulerError> {
        let sender = self
            .sender
            .lock()
            .clone()
            .ok_or(SchedulerError::Stopped)?;

        let handle = JobHandle::new();
        self.statuses.insert(
            handle,
            JobRecord {
                state: JobState::Pending,
                submitted_at: Utc::now(),
                finished_at: None,
            },
        );

        match sender.try_send(ScheduledUnit { handle, request }) {
            Ok(()) => {
                debug!(handle = %handle, "Unit of work queued");
                Ok(handle)
            }
            Err(mpsc::error::TrySendError::Full(_)) => {
                self.statuses.remove(&handle);
                Err(SchedulerError::QueueFull)
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.statuses.remove(&handle);
                Err(SchedulerError::Stopped)
            }
        }
    }

    /// Current progress of a unit, or `None` for an unknown handle.
    pub fn status(&self, handle: &JobHandle) -> Option<JobStatusSnapshot> {
        self.statuses.get(handle).map(|record| JobStatusSnapshot {
            handle: *handle,
            state: record.state.clone(),
            submitted_at: record.submitted_at,
            finished_at: record.finished_at,
        })
    }

    /// Close the queue, let in-flight units finish, and join the workers.
    pub async fn shutdown(&self) {
        if let Some(sender) = self.sender.lock().take() {
            drop(sender);
        }

        let workers: Vec<JoinHandle<()>> = self.workers.lock().drain(..).collect();
        for worker in workers {
            if let Err(e) = worker.await {
                error!(error = %e, "Worker task panicked during shutdown");
            }
        }

        info!("Job scheduler stopped");
    }
}

async fn run_unit(
    worker_id: usize,
    unit: ScheduledUnit,
    statuses: &DashMap<JobHandle, JobRecord>,
    dispatcher: &JobDispatcher,
) {
    if let Some(mut record) = statuses.get_mut(&unit.handle) {
        record.state = JobState::Running;
    }

    debug!(worker_id, handle = %unit.handle, "Running report unit");

    let outcome = dispatcher.dispatch(&unit.request).await;

    if let Some(mut record) = statuses.get_mut(&unit.handle) {
        record.finished_at = Some(Utc::now());
        match outcome {
            Ok(result) => {
                info!(handle = %unit.handle, "Report unit completed");
                record.state = JobState::Completed(result);
            }
            Err(e) => {
                error!(handle = %unit.handle, error = %e, "Report unit failed");
                record.state = JobState::Failed(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheProvider;
    use crate::models::ReportKind;
    use crate::producer::{ProducerError, ReportProducer};
    use async_trait::async_trait;
    use std::time::Duration;

    struct StubProducer {
        fail: bool,
    }

    #[async_trait]
    impl ReportProducer for StubProducer {
        async fn generate(&self, request: &ReportRequest) -> Result<String, ProducerError> {
            if self.fail {
                return Err(ProducerError::Generation("no data".to_string()));
            }
            Ok(format!("reports/{}.csv", request.name))
        }
    }

    fn scheduler(fail: bool) -> JobScheduler {
        let config = GatewayConfig::default();
        let dispatcher = Arc::new(JobDispatcher::new(
            CacheProvider::memory(100, Duration::from_secs(60)),
            Arc::new(StubProducer { fail }),
            &config,
        ));
        JobScheduler::start(&config, dispatcher)
    }

    fn request(name: &str) -> ReportRequest {
        ReportRequest {
            kind: ReportKind::Species,
            name: name.to_string(),
            region: String::new(),
            percentage: None,
        }
    }

    async fn wait_for_terminal(scheduler: &JobScheduler, handle: JobHandle) -> JobState {
        for _ in 0..100 {
            if let Some(snapshot) = scheduler.status(&handle) {
                if snapshot.state.is_terminal() {
                    return snapshot.state;
                }
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("unit never reached a terminal state");
    }

    #[tokio::test]
    async fn test_submitted_unit_completes() {
        let scheduler = scheduler(false);
        let handle = scheduler.submit(request("Lion")).unwrap();

        let state = wait_for_terminal(&scheduler, handle).await;
        assert_eq!(state, JobState::Completed("reports/Lion.csv".to_string()));
    }

    #[tokio::test]
    async fn test_producer_failure_surfaces_through_handle() {
        let scheduler = scheduler(true);
        let handle = scheduler.submit(request("Lion")).unwrap();

        let state = wait_for_terminal(&scheduler, handle).await;
        assert!(matches!(state, JobState::Failed(_)));
    }

    #[tokio::test]
    async fn test_unknown_handle_has_no_status() {
        let scheduler = scheduler(false);
        assert!(scheduler.status(&JobHandle::new()).is_none());
    }

    #[tokio::test]
    async fn test_each_submit_returns_a_fresh_handle() {
        let scheduler = scheduler(false);
        let first = scheduler.submit(request("Lion")).unwrap();
        let second = scheduler.submit(request("Lion")).unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_submit_after_shutdown_is_rejected() {
        let scheduler = scheduler(false);
        scheduler.shutdown().await;

        let result = scheduler.submit(request("Lion"));
        assert_eq!(result.unwrap_err(), SchedulerError::Stopped);
    }
}
