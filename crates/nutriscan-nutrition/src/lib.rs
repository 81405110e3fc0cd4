//! Static nutrition data for Food-101 categories and detection enrichment.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use nutriscan_core::{FoodDetection, NutritionRecord, RawDetection};

mod table;

pub use table::FOOD_CATEGORIES;

static TABLE: Lazy<HashMap<&'static str, &'static NutritionRecord>> =
    Lazy::new(|| FOOD_CATEGORIES.iter().map(|(name, rec)| (*name, rec)).collect());

/// Normalizes a model label into a table key: lowercase, spaces to
/// underscores.
pub fn normalize_label(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

/// Turns a table key back into a human-readable name: underscores to
/// spaces, each word title-cased.
pub fn display_name(label: &str) -> String {
    label
        .split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Looks up the nutrition record for a (possibly un-normalized) label.
///
/// Labels absent from the table resolve to the all-zero record; that is a
/// defined default, not a failure.
pub fn lookup_nutrition(raw_label: &str) -> NutritionRecord {
    TABLE
        .get(normalize_label(raw_label).as_str())
        .map(|rec| **rec)
        .unwrap_or(NutritionRecord::ZERO)
}

/// Joins a raw detection with its nutrition record and formats it for the
/// API: display name, two-decimal percentage confidence, fixed 100g portion.
pub fn enrich(raw: &RawDetection) -> FoodDetection {
    FoodDetection {
        food_name: display_name(&raw.label),
        confidence: round2(f64::from(raw.score) * 100.0),
        bounding_box: raw.bbox,
        nutrition: lookup_nutrition(&raw.label),
        portion: "100g".to_string(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriscan_core::BoundingBox;

    #[test]
    fn test_known_label_returns_stored_record() {
        let rec = lookup_nutrition("pizza");
        assert_eq!(rec.calories, 266.0);
        assert_eq!(rec.protein, 11.0);
        assert_eq!(rec.carbs, 33.0);
        assert_eq!(rec.fat, 10.0);
    }

    #[test]
    fn test_every_table_entry_is_reachable() {
        for (name, rec) in FOOD_CATEGORIES {
            assert_eq!(lookup_nutrition(name), *rec, "lookup mismatch for {name}");
        }
    }

    #[test]
    fn test_lookup_normalizes_before_matching() {
        assert_eq!(lookup_nutrition("Hot Dog"), lookup_nutrition("hot_dog"));
        assert_eq!(lookup_nutrition("FRENCH FRIES").calories, 312.0);
    }

    #[test]
    fn test_unknown_label_returns_zero_record() {
        assert_eq!(lookup_nutrition("flux_capacitor"), NutritionRecord::ZERO);
        assert_eq!(lookup_nutrition(""), NutritionRecord::ZERO);
    }

    #[test]
    fn test_display_name_round_trip() {
        assert_eq!(display_name("hot_dog"), "Hot Dog");
        assert_eq!(normalize_label(&display_name("hot_dog")), "hot_dog");
        assert_eq!(display_name("macaroni_and_cheese"), "Macaroni And Cheese");
    }

    #[test]
    fn test_enrich_rounds_confidence_and_joins_nutrition() {
        let raw = RawDetection {
            label: "pizza".to_string(),
            score: 0.87654,
            bbox: BoundingBox { x1: 10, y1: 20, x2: 110, y2: 220 },
        };

        let det = enrich(&raw);
        assert_eq!(det.food_name, "Pizza");
        assert_eq!(det.confidence, 87.65);
        assert_eq!(det.bounding_box, raw.bbox);
        assert_eq!(det.nutrition.calories, 266.0);
        assert_eq!(det.portion, "100g");
    }

    #[test]
    fn test_enrich_unknown_label_gets_zero_nutrition() {
        let raw = RawDetection {
            label: "submarine".to_string(),
            score: 0.5,
            bbox: BoundingBox { x1: 0, y1: 0, x2: 1, y2: 1 },
        };

        let det = enrich(&raw);
        assert_eq!(det.food_name, "Submarine");
        assert_eq!(det.confidence, 50.0);
        assert_eq!(det.nutrition, NutritionRecord::ZERO);
    }
}
