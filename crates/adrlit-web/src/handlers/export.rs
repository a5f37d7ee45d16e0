//! Attachment downloads for cached reports.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use adrlit_common::{AdrlitError, ApiError};

use crate::analysis::ExportFormat;
use crate::state::SharedState;

/// GET /export/{id}/json
pub async fn export_json(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    download(&state, id, ExportFormat::Json)
}

/// GET /export/{id}/csv — only offered when the report has ADRs
pub async fn export_csv(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    download(&state, id, ExportFormat::Csv)
}

fn download(state: &SharedState, id: Uuid, format: ExportFormat) -> Result<Response, ApiError> {
    let report = state
        .report(id)
        .ok_or_else(|| AdrlitError::ReportNotFound(id.to_string()))?;

    if format == ExportFormat::Csv && !report.insights.has_adrs() {
        return Err(ApiError::not_found(format!("report {id} has no ADRs to export")));
    }

    let body = format.render(&report.insights)?;
    let disposition = format!("attachment; filename=\"{}\"", format.file_name());

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
