use nutriscan_core::FoodDetection;
use serde::Serialize;

// === HTTP DTOs ===

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
    pub loaded: bool,
}

/// Response for `/detect`: either the best match with the full list, or a
/// structured "nothing found" body. Both are HTTP 200.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DetectResponse {
    Found {
        success: bool,
        detection: FoodDetection,
        all_detections: Vec<FoodDetection>,
    },
    NoDetection {
        success: bool,
        message: String,
    },
}

impl DetectResponse {
    pub fn found(detection: FoodDetection, all_detections: Vec<FoodDetection>) -> Self {
        Self::Found {
            success: true,
            detection,
            all_detections,
        }
    }

    pub fn no_detection() -> Self {
        Self::NoDetection {
            success: false,
            message: "No food detected".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DetectMultipleResponse {
    pub success: bool,
    pub count: usize,
    pub detections: Vec<FoodDetection>,
}

impl DetectMultipleResponse {
    pub fn new(detections: Vec<FoodDetection>) -> Self {
        Self {
            success: true,
            count: detections.len(),
            detections,
        }
    }
}
