//! # Report Gateway
//!
//! Boundary between inbound report requests and the scheduler. Each request
//! moves through a short state machine: received, then either rejected with
//! ordered field errors (terminal) or scheduled and immediately accepted
//! with a handle. The gateway never waits for completion.
//!
//! Both request kinds share this one parameterized flow; only the
//! [`ReportKind`] tag differs.

use std::sync::Arc;

use tracing::{info, warn};

use crate::models::{RawReportQuery, ReportKind, ReportRequest};
use crate::validation::FieldError;

use super::scheduler::JobScheduler;
use super::types::{JobHandle, JobStatusSnapshot, SchedulerError};

/// Terminal gateway outcome for one inbound request
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The request was scheduled; completion is observable via the handle
    Accepted { handle: JobHandle },
    /// Validation failed; nothing was scheduled
    Rejected { errors: Vec<FieldError> },
}

/// Validates inbound requests and schedules accepted ones
pub struct ReportGateway {
    scheduler: Arc<JobScheduler>,
}

impl ReportGateway {
    pub fn new(scheduler: Arc<JobScheduler>) -> Self {
        Self { scheduler }
    }

    /// Validate and schedule one report request.
    ///
    /// A validation failure is a normal outcome, not an error; the `Err`
    /// arm is reserved for the scheduler itself being unable to accept
    /// work.
    pub fn submit(
        &self,
        kind: ReportKind,
        raw: &RawReportQuery,
    ) -> Result<SubmitOutcome, SchedulerError> {
        let request = match ReportRequest::from_query(kind, raw) {
            Ok(request) => request,
            Err(report) => {
                warn!(
                    report_kind = %kind,
                    error_count = report.errors.len(),
                    "Report request rejected by validation"
                );
                return Ok(SubmitOutcome::Rejected {
                    errors: report.errors,
                });
            }
        };

        let handle = self.scheduler.submit(request)?;

        info!(report_kind = %kind, handle = %handle, "Report request accepted");
        Ok(SubmitOutcome::Accepted { handle })
    }

    /// Surface a unit's progress through its handle.
    pub fn status(&self, handle: &JobHandle) -> Option<JobStatusSnapshot> {
        self.scheduler.status(handle)
    }
}
