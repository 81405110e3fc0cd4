//! HTTP surface for the nutriscan food detection service.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Builds the application router. CORS and request tracing are layered on
/// by the binary so tests can drive the routes directly.
pub fn router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/detect", post(handlers::detect::detect))
        .route("/detect-multiple", post(handlers::detect::detect_multiple))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
