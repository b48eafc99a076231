//! # Report Producer Contract
//!
//! The external collaborator that performs the actual (expensive) report
//! computation. The gateway treats it as a black box: latency is externally
//! governed and every call is assumed fallible. Hosts implement this trait
//! over whatever transport reaches their report engine.

use async_trait::async_trait;

use crate::models::ReportRequest;
use thiserror::Error;

/// Failure reported by the producer collaborator
///
/// Producer failures are never cached; resubmitting the same request is
/// always safe.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProducerError {
    /// The producer ran but could not generate the report
    #[error("Report generation failed: {0}")]
    Generation(String),

    /// The producer could not be reached at all
    #[error("Report producer unavailable: {0}")]
    Unavailable(String),
}

/// Collaborator that computes a report for a validated request.
///
/// Returns an opaque result descriptor (typically a generated file
/// identifier or path); the gateway never inspects it.
#[async_trait]
pub trait ReportProducer: Send + Sync {
    async fn generate(&self, request: &ReportRequest) -> Result<String, ProducerError>;
}
