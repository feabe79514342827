//! HTTP trigger for the aggregation pipeline

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::error;

use crate::pipeline::{self, PipelineOutcome};
use crate::sink::SummarySink;
use crate::sources::SourceClient;

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn SourceClient>,
    pub sink: Arc<dyn SummarySink>,
}

/// Build the application router
///
/// The trigger accepts GET and POST with no body or query parameters and is
/// unauthenticated at the application layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/summary", get(run_summary).post(run_summary))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the pipeline and map its outcome onto an HTTP response
async fn run_summary(State(state): State<AppState>) -> Response {
    match pipeline::run(state.source.as_ref(), state.sink.as_ref()).await {
        Ok(PipelineOutcome::Summaries(summaries)) => {
            (StatusCode::OK, Json(summaries)).into_response()
        }
        Ok(PipelineOutcome::CompaniesOnly(companies)) => {
            (StatusCode::OK, Json(companies)).into_response()
        }
        Ok(PipelineOutcome::NoCompanies) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            error!("pipeline failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Liveness probe
async fn health_check() -> &'static str {
    "ok"
}
