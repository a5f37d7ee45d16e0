//! Dashboard handler — upload / paste form and the rendered extraction result.

use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, warn};

use adrlit_common::{AdrlitError, DocumentSource, Result};
use adrlit_ingestion::{load_document, DocumentFormat};

use crate::render::{DashboardView, ResultView, NOTICE_NO_INPUT};
use crate::state::{AppState, SharedState};

// ── Form input ────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct AnalyzeForm {
    upload: Option<Upload>,
    text: String,
    humanize: bool,
}

#[derive(Debug)]
struct Upload {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Bytes,
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET / — empty form with the getting-started prompt
pub async fn dashboard_page(State(state): State<SharedState>) -> Response {
    let mut view = DashboardView::new(state.config.server.max_upload_bytes);
    view.notice = Some(NOTICE_NO_INPUT.to_string());
    render(&state, view, StatusCode::OK)
}

/// POST /analyze — an uploaded file wins over pasted text
pub async fn analyze_submit(State(state): State<SharedState>, multipart: Multipart) -> Response {
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected analysis form");
            return rejection.into_response();
        }
    };

    let mut view = DashboardView::new(state.config.server.max_upload_bytes);
    view.text = form.text.clone();
    view.humanize = form.humanize;
    let humanize = form.humanize;

    match resolve_input(form).await {
        Ok(Some((text, source))) => {
            let report = state.analyze(&text, source, humanize);
            view.result = Some(ResultView::from(&report));
            render(&state, view, StatusCode::OK)
        }
        Ok(None) => {
            view.notice = Some(NOTICE_NO_INPUT.to_string());
            render(&state, view, StatusCode::OK)
        }
        Err(err) => {
            warn!(error = %err, "Could not analyse submission");
            let status = err.status_code();
            view.error = Some(err.to_string());
            render(&state, view, status)
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

async fn read_form(mut multipart: Multipart) -> std::result::Result<AnalyzeForm, MultipartError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("document") => {
                let file_name = field.file_name().map(str::to_string).filter(|n| !n.is_empty());
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                // Browsers send an empty, nameless part when no file was chosen
                if !bytes.is_empty() || file_name.is_some() {
                    form.upload = Some(Upload { file_name, content_type, bytes });
                }
            }
            Some("text") => form.text = field.text().await?,
            Some("humanize") => {
                form.humanize = matches!(field.text().await?.trim(), "on" | "true" | "1");
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Turn the form into the text to analyse, or `None` when nothing was given.
async fn resolve_input(form: AnalyzeForm) -> Result<Option<(String, DocumentSource)>> {
    if let Some(upload) = form.upload {
        let file_name = upload.file_name.unwrap_or_else(|| "upload".to_string());
        let format = DocumentFormat::detect(upload.content_type.as_deref(), Some(&file_name))
            .ok_or_else(|| {
                AdrlitError::UnsupportedFormat(format!(
                    "{file_name} ({}); upload a PDF or DOCX file",
                    upload.content_type.as_deref().unwrap_or("unknown type")
                ))
            })?;

        let bytes = upload.bytes;
        let doc = tokio::task::spawn_blocking(move || load_document(format, &bytes))
            .await
            .map_err(|e| AdrlitError::Other(anyhow::anyhow!("document reader task failed: {e}")))??;

        if doc.is_blank() {
            return Err(AdrlitError::EmptyInput(format!("no extractable text in {file_name}")));
        }

        let source = DocumentSource::Upload { file_name, format: format.as_str().to_string() };
        return Ok(Some((doc.text, source)));
    }

    if form.text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some((form.text, DocumentSource::Pasted)))
}

fn render(state: &AppState, view: DashboardView, status: StatusCode) -> Response {
    match state.templates.dashboard(&view) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!(error = %err, "Failed to render dashboard");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}
