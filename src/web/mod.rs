//! # Web Surface
//!
//! Thin axum layer over the report gateway. Hosts mount [`report_routes`]
//! into their own server; nothing here owns a listener.

pub mod handlers;
pub mod response_types;
pub mod state;

use axum::routing::get;
use axum::Router;

pub use response_types::{ApiError, ApiResult, ReportAcceptedResponse, ReportStatusResponse};
pub use state::AppState;

/// Build the report gateway router.
pub fn report_routes(state: AppState) -> Router {
    Router::new()
        .route("/species", get(handlers::reports::get_species_report))
        .route("/resources", get(handlers::reports::get_resources_report))
        .route("/reports/:handle", get(handlers::reports::get_report_status))
        .route("/health", get(handlers::health::health))
        .with_state(state)
}
