use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Failed to load model: {0}")]
    ModelLoad(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// Rectangular pixel region localizing a detection within the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

/// One model-reported instance of a recognized object, before enrichment.
///
/// `score` is the raw model confidence in `[0, 1]`; the box is already in
/// source-image pixel space.
#[derive(Debug, Clone)]
pub struct RawDetection {
    pub label: String,
    pub score: f32,
    pub bbox: BoundingBox,
}

/// Macro-nutrient data for a food category, per 100g portion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionRecord {
    pub const ZERO: NutritionRecord = NutritionRecord {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };
}

/// A detection enriched for the API: display name, percentage confidence,
/// nutrition join, fixed portion size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodDetection {
    pub food_name: String,
    pub confidence: f64,
    pub bounding_box: BoundingBox,
    pub nutrition: NutritionRecord,
    pub portion: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Detector Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Object detection backend.
///
/// Implemented by the ONNX-backed detector and by test mocks, so request
/// handlers only see an injected read-only handle.
pub trait Detector: Send + Sync {
    /// Runs inference on encoded image bytes, keeping detections with a
    /// score of at least `confidence_threshold`.
    fn detect(
        &self,
        image_bytes: &[u8],
        confidence_threshold: f32,
    ) -> Result<Vec<RawDetection>, DetectError>;

    /// Identifier of the loaded model, reported by the health endpoint.
    fn model_name(&self) -> &str;

    /// Whether the model weights are resident.
    fn is_loaded(&self) -> bool {
        true
    }
}
