//! Detection pipeline: inference, enrichment, best-match selection.

use nutriscan_core::{Detector, FoodDetection};

use crate::error::ApiError;

/// Runs the detector on encoded image bytes and enriches every retained
/// detection with its nutrition record.
pub fn run_detection(
    detector: &dyn Detector,
    image_bytes: &[u8],
    confidence_threshold: f32,
) -> Result<Vec<FoodDetection>, ApiError> {
    let raw = detector.detect(image_bytes, confidence_threshold).map_err(|e| {
        tracing::error!("Detection failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(raw.iter().map(nutriscan_nutrition::enrich).collect())
}

/// The highest-confidence detection. Ties keep the first in detector
/// output order.
pub fn best_match(detections: &[FoodDetection]) -> Option<&FoodDetection> {
    detections.iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.confidence > current.confidence => Some(candidate),
        None => Some(candidate),
        _ => best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriscan_core::{BoundingBox, NutritionRecord};

    fn detection(name: &str, confidence: f64) -> FoodDetection {
        FoodDetection {
            food_name: name.to_string(),
            confidence,
            bounding_box: BoundingBox { x1: 0, y1: 0, x2: 10, y2: 10 },
            nutrition: NutritionRecord::ZERO,
            portion: "100g".to_string(),
        }
    }

    #[test]
    fn test_best_match_picks_maximum_confidence() {
        let detections = vec![
            detection("Sushi", 42.0),
            detection("Pizza", 91.5),
            detection("Ramen", 67.3),
        ];

        let best = best_match(&detections).unwrap();
        assert_eq!(best.food_name, "Pizza");
    }

    #[test]
    fn test_best_match_tie_keeps_first() {
        let detections = vec![
            detection("Sushi", 91.5),
            detection("Pizza", 91.5),
        ];

        let best = best_match(&detections).unwrap();
        assert_eq!(best.food_name, "Sushi");
    }

    #[test]
    fn test_best_match_empty_is_none() {
        assert!(best_match(&[]).is_none());
    }
}
