//! # Report Request Handlers
//!
//! The two report endpoints share one flow; the route only fixes the
//! [`ReportKind`] tag. Query fields arrive as a loose dictionary and go
//! through the explicit typed parse step before validation.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use crate::models::{RawReportQuery, ReportKind};
use crate::orchestration::{JobHandle, SubmitOutcome};
use crate::web::response_types::{
    ApiError, ApiResult, ReportAcceptedResponse, ReportStatusResponse,
};
use crate::web::state::AppState;

/// Trigger a species impact report: GET /species
pub async fn get_species_report(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<(StatusCode, Json<ReportAcceptedResponse>)> {
    submit_report(&state, ReportKind::Species, &query).await
}

/// Trigger a resources impact report: GET /resources
pub async fn get_resources_report(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<(StatusCode, Json<ReportAcceptedResponse>)> {
    submit_report(&state, ReportKind::Resources, &query).await
}

async fn submit_report(
    state: &AppState,
    kind: ReportKind,
    query: &HashMap<String, String>,
) -> ApiResult<(StatusCode, Json<ReportAcceptedResponse>)> {
    debug!(report_kind = %kind, query_keys = query.len(), "Inbound report request");

    let raw = RawReportQuery::from_query_map(query);

    match state.gateway.submit(kind, &raw)? {
        SubmitOutcome::Accepted { handle } => Ok((
            StatusCode::ACCEPTED,
            Json(ReportAcceptedResponse::new(handle)),
        )),
        SubmitOutcome::Rejected { errors } => Err(ApiError::ValidationFailed { errors }),
    }
}

/// Poll a job handle: GET /reports/:handle
pub async fn get_report_status(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> ApiResult<Json<ReportStatusResponse>> {
    let handle = JobHandle::parse(&handle)
        .map_err(|_| ApiError::InvalidHandle { handle })?;

    let snapshot = state
        .gateway
        .status(&handle)
        .ok_or(ApiError::HandleNotFound)?;

    Ok(Json(ReportStatusResponse::from(snapshot)))
}
