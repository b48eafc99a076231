#![allow(clippy::doc_markdown)] // Allow technical terms like DashMap, Moka in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # EnvImpact Core
//!
//! Asynchronous dispatch and memoization gateway for environmental impact
//! report generation.
//!
//! ## Overview
//!
//! Report generation is slow and externally governed, so the gateway never
//! computes a report inline. An inbound request is validated, scheduled as an
//! independent unit of work, and answered immediately with an opaque job
//! handle. A worker pool drains the queue and runs each unit through the job
//! dispatcher, which memoizes completed results by request fingerprint so that
//! repeated requests never recompute the same report while the cached entry is
//! fresh.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐   ┌───────────────┐
//! │ Web Surface  │──▶│ Report Gateway    │──▶│ Job Scheduler │
//! │ (axum)       │   │ (validate/accept) │   │ (worker pool) │
//! └──────────────┘   └──────────────────┘   └───────┬───────┘
//!                                                    │
//!                                            ┌───────▼────────┐
//!                                            │ Job Dispatcher │
//!                                            │ (single-flight)│
//!                                            └───┬────────┬───┘
//!                                     cache hit  │        │  cache miss
//!                                   ┌────────────▼──┐  ┌──▼──────────────┐
//!                                   │ Report Cache  │  │ Report Producer │
//!                                   │ (fingerprint) │  │ (collaborator)  │
//!                                   └───────────────┘  └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`] - Report request types and the raw query parse step
//! - [`validation`] - Field-level request validation
//! - [`fingerprint`] - Deterministic cache key derivation
//! - [`cache`] - Memoization cache providers (in-memory, no-op)
//! - [`producer`] - Report producer collaborator contract
//! - [`dispatch`] - Cache-aware job dispatcher
//! - [`orchestration`] - Gateway, scheduler, and job handles
//! - [`web`] - Thin axum HTTP surface
//! - [`config`] - Environment-driven configuration
//! - [`logging`] - Structured logging initialization

pub mod cache;
pub mod config;
pub mod dispatch;
pub mod fingerprint;
pub mod logging;
pub mod models;
pub mod orchestration;
pub mod producer;
pub mod validation;
pub mod web;

pub use cache::CacheProvider;
pub use config::{ConfigurationError, GatewayConfig};
pub use dispatch::{DispatchError, JobDispatcher};
pub use fingerprint::{build_key, Fingerprint};
pub use models::{RawReportQuery, ReportKind, ReportRequest};
pub use orchestration::{
    JobHandle, JobScheduler, JobState, JobStatusSnapshot, ReportGateway, SchedulerError,
    SubmitOutcome,
};
pub use producer::{ProducerError, ReportProducer};
pub use validation::{FieldError, ValidationReport};
