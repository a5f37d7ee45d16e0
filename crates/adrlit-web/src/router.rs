//! Axum router — maps all URL paths to handlers.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    api::{api_extract, api_health, api_report},
    dashboard::{analyze_submit, dashboard_page},
    export::{export_csv, export_json},
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_upload_bytes;
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",        get(dashboard_page))
        .route("/analyze", post(analyze_submit))

        // Downloads
        .route("/export/{id}/json", get(export_json))
        .route("/export/{id}/csv",  get(export_csv))

        // API endpoints
        .route("/api/extract",      post(api_extract))
        .route("/api/reports/{id}", get(api_report))
        .route("/api/health",       get(api_health))

        // Middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
