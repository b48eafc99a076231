//! # Orchestration Module
//!
//! Accepts inbound report requests, validates them, and tracks each accepted
//! request as an independent asynchronous unit of work.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────┐  submit   ┌───────────────────────────────┐
//! │ ReportGateway  │──────────▶│ JobScheduler                  │
//! │ (validation)   │  handle   │  bounded queue → worker pool  │
//! └────────────────┘◀──────────│  status store (handle-keyed)  │
//!                              └───────────────┬───────────────┘
//!                                              │ exactly once per unit
//!                                      ┌───────▼────────┐
//!                                      │ JobDispatcher  │
//!                                      └────────────────┘
//! ```
//!
//! No ordering is promised between concurrently scheduled units; each is
//! independent and results for distinct fingerprints never interfere.

pub mod gateway;
pub mod scheduler;
pub mod types;

pub use gateway::{ReportGateway, SubmitOutcome};
pub use scheduler::JobScheduler;
pub use types::{JobHandle, JobState, JobStatusSnapshot, SchedulerError};
