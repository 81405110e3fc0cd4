//! Food detection HTTP handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use tracing::info;

use crate::dto::{DetectMultipleResponse, DetectResponse};
use crate::error::ApiError;
use crate::services::detect as detect_service;
use crate::state::AppState;

/// Threshold for the single best-match query.
const DETECT_CONFIDENCE: f32 = 0.25;
/// Looser threshold for the multi-detection query.
const DETECT_MULTIPLE_CONFIDENCE: f32 = 0.30;

/// Returns the highest-confidence detection plus the full list.
pub async fn detect(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<DetectResponse>, ApiError> {
    let image = read_image_field(multipart).await?;

    let detections =
        detect_service::run_detection(state.detector.as_ref(), &image, DETECT_CONFIDENCE)?;

    info!("Detected {} food items", detections.len());

    match detect_service::best_match(&detections).cloned() {
        Some(best) => Ok(Json(DetectResponse::found(best, detections))),
        None => Ok(Json(DetectResponse::no_detection())),
    }
}

/// Returns every detection above the looser threshold with a count.
pub async fn detect_multiple(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<DetectMultipleResponse>, ApiError> {
    let image = read_image_field(multipart).await?;

    let detections = detect_service::run_detection(
        state.detector.as_ref(),
        &image,
        DETECT_MULTIPLE_CONFIDENCE,
    )?;

    info!("Detected {} food items", detections.len());

    Ok(Json(DetectMultipleResponse::new(detections)))
}

/// Pulls the `image` field out of the multipart form. A request without
/// one is a client error.
async fn read_image_field(mut multipart: Multipart) -> Result<Bytes, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("image") {
            return field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(e.to_string()));
        }
    }

    Err(ApiError::BadRequest("No image provided".to_string()))
}
