//! HTTP route handlers for the detection service.

pub mod detect;

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// Health check endpoint. Always succeeds.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model: state.detector.model_name().to_string(),
        loaded: state.detector.is_loaded(),
    })
}
