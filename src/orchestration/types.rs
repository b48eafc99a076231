//! Job handle and status types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Opaque identifier for one scheduled unit of work.
///
/// Every accepted request gets a fresh handle, including repeats of an
/// already-memoized request; the handle identifies the unit, not the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobHandle(Uuid);

impl JobHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(raw)?))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for JobHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle of one unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    /// Queued, not yet picked up by a worker
    Pending,
    /// A worker is executing the dispatch
    Running,
    /// Terminal: the opaque result descriptor
    Completed(String),
    /// Terminal: the failure message
    Failed(String),
}

impl JobState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed(_) | JobState::Failed(_))
    }

    pub fn status_label(&self) -> &'static str {
        match self {
            JobState::Pending => "pending",
            JobState::Running => "running",
            JobState::Completed(_) => "completed",
            JobState::Failed(_) => "failed",
        }
    }
}

/// Point-in-time view of a unit's progress, surfaced through the handle
#[derive(Debug, Clone, PartialEq)]
pub struct JobStatusSnapshot {
    pub handle: JobHandle,
    pub state: JobState,
    pub submitted_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

/// Failure to accept a unit of work
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulerError {
    #[error("Job queue is full")]
    QueueFull,

    #[error("Scheduler is stopped")]
    Stopped,
}
