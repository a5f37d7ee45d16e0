use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdrlitError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("No text to analyse: {0}")]
    EmptyInput(String),

    #[error("Report not found: {0}")]
    ReportNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AdrlitError {
    /// HTTP status this error maps to when it reaches a handler boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdrlitError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AdrlitError::Document(_)          => StatusCode::UNPROCESSABLE_ENTITY,
            AdrlitError::EmptyInput(_)        => StatusCode::UNPROCESSABLE_ENTITY,
            AdrlitError::ReportNotFound(_)    => StatusCode::NOT_FOUND,
            _                                 => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdrlitError>;

/// Error body returned by the JSON API: `{ "error": "..." }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl From<AdrlitError> for ApiError {
    fn from(err: AdrlitError) -> Self {
        let status = err.status_code();
        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
        }
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
