//! # Web API Response and Error Types
//!
//! Response payloads plus the web-facing error type and its HTTP mapping.
//! Leverages thiserror for structured error handling and Axum's
//! IntoResponse for HTTP conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::orchestration::{JobHandle, JobState, JobStatusSnapshot, SchedulerError};
use crate::validation::FieldError;

/// Payload for an accepted report request
#[derive(Debug, Serialize)]
pub struct ReportAcceptedResponse {
    pub handle: JobHandle,
    pub status: String,
    /// Where to poll for progress and the eventual result
    pub status_query_uri: String,
}

impl ReportAcceptedResponse {
    pub fn new(handle: JobHandle) -> Self {
        Self {
            handle,
            status: "accepted".to_string(),
            status_query_uri: format!("/reports/{handle}"),
        }
    }
}

/// Point-in-time job status payload
#[derive(Debug, Serialize)]
pub struct ReportStatusResponse {
    pub handle: JobHandle,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl From<JobStatusSnapshot> for ReportStatusResponse {
    fn from(snapshot: JobStatusSnapshot) -> Self {
        let (result, error) = match &snapshot.state {
            JobState::Completed(result) => (Some(result.clone()), None),
            JobState::Failed(message) => (None, Some(message.clone())),
            _ => (None, None),
        };

        Self {
            handle: snapshot.handle,
            status: snapshot.state.status_label().to_string(),
            result,
            error,
            submitted_at: snapshot.submitted_at,
            finished_at: snapshot.finished_at,
        }
    }
}

/// Web API specific errors with HTTP status code mappings
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request validation failed")]
    ValidationFailed { errors: Vec<FieldError> },

    #[error("Unknown job handle")]
    HandleNotFound,

    #[error("Invalid job handle: {handle}")]
    InvalidHandle { handle: String },

    #[error("Service temporarily unavailable")]
    ServiceUnavailable,
}

impl From<SchedulerError> for ApiError {
    fn from(_: SchedulerError) -> Self {
        ApiError::ServiceUnavailable
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ValidationFailed { errors } => {
                let body = json!({
                    "error": {
                        "code": "VALIDATION_FAILED",
                        "message": "Request validation failed"
                    },
                    "errors": errors,
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }

            ApiError::HandleNotFound => error_response(
                StatusCode::NOT_FOUND,
                "HANDLE_NOT_FOUND",
                "Unknown job handle",
            ),

            ApiError::InvalidHandle { handle } => error_response(
                StatusCode::BAD_REQUEST,
                "INVALID_HANDLE",
                &format!("Invalid job handle: {handle}"),
            ),

            ApiError::ServiceUnavailable => error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                "Service temporarily unavailable",
            ),
        }
    }
}

fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    let body = json!({
        "error": {
            "code": code,
            "message": message
        }
    });
    (status, Json(body)).into_response()
}

/// Result type alias for web API operations
pub type ApiResult<T> = Result<T, ApiError>;
