//! JSON API: extraction without the dashboard, report lookup, health.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adrlit_common::{AdrlitError, AnalysisReport, ApiError, DocumentSource};

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
    #[serde(default)]
    pub humanize: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub cached_reports: usize,
}

/// POST /api/extract
pub async fn api_extract(
    State(state): State<SharedState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    if req.text.trim().is_empty() {
        return Err(AdrlitError::EmptyInput("request text is blank".into()).into());
    }
    Ok(Json(state.analyze(&req.text, DocumentSource::Pasted, req.humanize)))
}

/// GET /api/reports/{id}
pub async fn api_report(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisReport>, ApiError> {
    state
        .report(id)
        .map(Json)
        .ok_or_else(|| AdrlitError::ReportNotFound(id.to_string()).into())
}

/// GET /api/health
pub async fn api_health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        cached_reports: state.cached_reports(),
    })
}
