//! YOLO object detection on a tract ONNX plan.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::RgbImage;
use tract_onnx::prelude::*;
use tracing::{debug, info};

use nutriscan_core::{BoundingBox, DetectError, Detector, RawDetection};

use crate::classes::FOOD101_CLASSES;

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Detector configuration.
///
/// `input_size` must match the square input the model was exported with.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    pub model_path: PathBuf,
    pub input_size: u32,
    pub iou_threshold: f32,
    pub labels_path: Option<PathBuf>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("yolov8n.onnx"),
            input_size: 640,
            iou_threshold: 0.45,
            labels_path: None,
        }
    }
}

/// Candidate box in original-image pixel space, before suppression.
#[derive(Debug, Clone)]
struct Candidate {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    score: f32,
    class_id: usize,
}

impl Candidate {
    fn area(&self) -> f32 {
        (self.x2 - self.x1) * (self.y2 - self.y1)
    }

    fn iou(&self, other: &Candidate) -> f32 {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2);
        let y2 = self.y2.min(other.y2);

        let intersection = (x2 - x1).max(0.0) * (y2 - y1).max(0.0);
        let union = self.area() + other.area() - intersection;

        if union > 0.0 {
            intersection / union
        } else {
            0.0
        }
    }
}

/// YOLO detector over an optimized tract plan.
///
/// The plan is immutable after loading; `run` borrows it, so a single
/// instance serves concurrent requests without locking.
pub struct YoloDetector {
    plan: OnnxPlan,
    model_name: String,
    labels: Vec<String>,
    input_size: u32,
    iou_threshold: f32,
}

impl YoloDetector {
    /// Loads and optimizes the ONNX model.
    ///
    /// Fails if the model file is missing or malformed, or if the labels
    /// file cannot be read. Startup treats this as fatal.
    pub fn load(config: &DetectorConfig) -> Result<Self, DetectError> {
        let labels = match &config.labels_path {
            Some(path) => read_labels(path)
                .map_err(|e| DetectError::ModelLoad(format!("labels file {}: {e}", path.display())))?,
            None => FOOD101_CLASSES.iter().map(|s| (*s).to_string()).collect(),
        };

        let size = config.input_size as usize;
        let plan = tract_onnx::onnx()
            .model_for_path(&config.model_path)
            .map_err(|e| DetectError::ModelLoad(e.to_string()))?
            .with_input_fact(0, InferenceFact::dt_shape(f32::datum_type(), tvec!(1, 3, size, size)))
            .map_err(|e| DetectError::ModelLoad(e.to_string()))?
            .into_optimized()
            .map_err(|e| DetectError::ModelLoad(e.to_string()))?
            .into_runnable()
            .map_err(|e| DetectError::ModelLoad(e.to_string()))?;

        info!("Loaded model from {}", config.model_path.display());

        Ok(Self {
            plan,
            model_name: config.model_path.display().to_string(),
            labels,
            input_size: config.input_size,
            iou_threshold: config.iou_threshold,
        })
    }

    fn preprocess(&self, image: &RgbImage) -> tract_ndarray::Array4<f32> {
        let size = self.input_size;
        let resized = image::imageops::resize(image, size, size, FilterType::Triangle);

        tract_ndarray::Array4::from_shape_fn(
            (1, 3, size as usize, size as usize),
            |(_, channel, y, x)| f32::from(resized[(x as u32, y as u32)][channel]) / 255.0,
        )
    }

    fn to_raw(&self, candidate: Candidate) -> RawDetection {
        RawDetection {
            label: self
                .labels
                .get(candidate.class_id)
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
            score: candidate.score,
            bbox: BoundingBox {
                x1: candidate.x1 as i64,
                y1: candidate.y1 as i64,
                x2: candidate.x2 as i64,
                y2: candidate.y2 as i64,
            },
        }
    }
}

impl Detector for YoloDetector {
    fn detect(
        &self,
        image_bytes: &[u8],
        confidence_threshold: f32,
    ) -> Result<Vec<RawDetection>, DetectError> {
        let image = image::load_from_memory(image_bytes)
            .map_err(|e| DetectError::Decode(e.to_string()))?
            .to_rgb8();
        let (orig_width, orig_height) = image.dimensions();

        debug!("Running object detection on {}x{} image", orig_width, orig_height);

        let input = self.preprocess(&image);
        let result = self
            .plan
            .run(tvec!(input.into_tensor().into()))
            .map_err(|e| DetectError::Inference(e.to_string()))?;

        let output = result[0]
            .to_array_view::<f32>()
            .map_err(|e| DetectError::Inference(e.to_string()))?;
        let output = output
            .into_dimensionality::<tract_ndarray::Ix3>()
            .map_err(|e| DetectError::Inference(format!("unexpected output shape: {e}")))?;

        let candidates = decode_output(
            &output,
            self.labels.len(),
            confidence_threshold,
            self.input_size,
            orig_width,
            orig_height,
        );
        let kept = nms(candidates, self.iou_threshold);

        debug!("Detected {} objects", kept.len());

        Ok(kept.into_iter().map(|c| self.to_raw(c)).collect())
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Decodes a YOLOv8-layout output tensor `[1, 4 + num_classes, anchors]`
/// into candidate boxes in original-image pixel space.
///
/// Per anchor: rows 0-3 are center x/y and width/height in model-input
/// pixels, remaining rows are per-class scores. The best class is kept when
/// its score clears the threshold; boxes are rescaled to the source image
/// and clamped to its bounds.
fn decode_output(
    output: &tract_ndarray::ArrayView3<'_, f32>,
    num_labels: usize,
    confidence_threshold: f32,
    input_size: u32,
    orig_width: u32,
    orig_height: u32,
) -> Vec<Candidate> {
    let (_, rows, anchors) = output.dim();
    let num_classes = rows.saturating_sub(4).min(num_labels);

    let scale_x = orig_width as f32 / input_size as f32;
    let scale_y = orig_height as f32 / input_size as f32;

    let mut candidates = Vec::new();

    for anchor in 0..anchors {
        let mut best_id = 0usize;
        let mut best_score = 0.0f32;
        for class_id in 0..num_classes {
            let score = output[[0, 4 + class_id, anchor]];
            if score > best_score {
                best_score = score;
                best_id = class_id;
            }
        }

        if best_score < confidence_threshold {
            continue;
        }

        let cx = output[[0, 0, anchor]];
        let cy = output[[0, 1, anchor]];
        let w = output[[0, 2, anchor]];
        let h = output[[0, 3, anchor]];

        candidates.push(Candidate {
            x1: ((cx - w / 2.0) * scale_x).clamp(0.0, orig_width as f32),
            y1: ((cy - h / 2.0) * scale_y).clamp(0.0, orig_height as f32),
            x2: ((cx + w / 2.0) * scale_x).clamp(0.0, orig_width as f32),
            y2: ((cy + h / 2.0) * scale_y).clamp(0.0, orig_height as f32),
            score: best_score,
            class_id: best_id,
        });
    }

    candidates
}

/// Greedy per-class non-max suppression, highest confidence first.
fn nms(mut candidates: Vec<Candidate>, iou_threshold: f32) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut result = Vec::new();

    while !candidates.is_empty() {
        let best = candidates.remove(0);
        candidates.retain(|c| c.class_id != best.class_id || best.iou(c) < iou_threshold);
        result.push(best);
    }

    result
}

fn read_labels(path: &Path) -> std::io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builds a [1, 4 + num_classes, anchors] tensor from (cx, cy, w, h,
    // class scores) rows.
    fn output_tensor(
        num_classes: usize,
        anchors: &[(f32, f32, f32, f32, Vec<f32>)],
    ) -> tract_ndarray::Array3<f32> {
        let mut out = tract_ndarray::Array3::zeros((1, 4 + num_classes, anchors.len()));
        for (i, (cx, cy, w, h, scores)) in anchors.iter().enumerate() {
            out[[0, 0, i]] = *cx;
            out[[0, 1, i]] = *cy;
            out[[0, 2, i]] = *w;
            out[[0, 3, i]] = *h;
            for (c, score) in scores.iter().enumerate() {
                out[[0, 4 + c, i]] = *score;
            }
        }
        out
    }

    #[test]
    fn test_decode_scales_to_original_image() {
        let out = output_tensor(2, &[(50.0, 50.0, 20.0, 20.0, vec![0.9, 0.1])]);
        // 100px model input, 200x100 source: x doubles, y unchanged.
        let candidates = decode_output(&out.view(), 2, 0.25, 100, 200, 100);

        assert_eq!(candidates.len(), 1);
        let c = &candidates[0];
        assert_eq!(c.class_id, 0);
        assert_eq!(c.score, 0.9);
        assert_eq!((c.x1, c.y1, c.x2, c.y2), (80.0, 40.0, 120.0, 60.0));
    }

    #[test]
    fn test_decode_filters_below_threshold() {
        let out = output_tensor(
            2,
            &[
                (50.0, 50.0, 20.0, 20.0, vec![0.2, 0.1]),
                (30.0, 30.0, 10.0, 10.0, vec![0.0, 0.6]),
            ],
        );
        let candidates = decode_output(&out.view(), 2, 0.25, 100, 100, 100);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].class_id, 1);
    }

    #[test]
    fn test_decode_clamps_to_image_bounds() {
        // Box extends past the left and top edges.
        let out = output_tensor(1, &[(5.0, 5.0, 20.0, 20.0, vec![0.8])]);
        let candidates = decode_output(&out.view(), 1, 0.25, 100, 100, 100);

        let c = &candidates[0];
        assert_eq!((c.x1, c.y1), (0.0, 0.0));
        assert_eq!((c.x2, c.y2), (15.0, 15.0));
    }

    #[test]
    fn test_nms_suppresses_overlapping_same_class() {
        let a = Candidate { x1: 0.0, y1: 0.0, x2: 100.0, y2: 100.0, score: 0.9, class_id: 0 };
        let b = Candidate { x1: 5.0, y1: 5.0, x2: 105.0, y2: 105.0, score: 0.7, class_id: 0 };

        let kept = nms(vec![b.clone(), a.clone()], 0.45);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].score, 0.9);
    }

    #[test]
    fn test_nms_keeps_overlapping_different_classes() {
        let a = Candidate { x1: 0.0, y1: 0.0, x2: 100.0, y2: 100.0, score: 0.9, class_id: 0 };
        let b = Candidate { x1: 5.0, y1: 5.0, x2: 105.0, y2: 105.0, score: 0.7, class_id: 1 };

        let kept = nms(vec![a, b], 0.45);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_nms_keeps_disjoint_same_class() {
        let a = Candidate { x1: 0.0, y1: 0.0, x2: 10.0, y2: 10.0, score: 0.9, class_id: 0 };
        let b = Candidate { x1: 50.0, y1: 50.0, x2: 60.0, y2: 60.0, score: 0.7, class_id: 0 };

        let kept = nms(vec![a, b], 0.45);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_iou_of_identical_boxes_is_one() {
        let a = Candidate { x1: 0.0, y1: 0.0, x2: 10.0, y2: 10.0, score: 0.5, class_id: 0 };
        assert!((a.iou(&a.clone()) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_default_config_uses_food101_labels() {
        let config = DetectorConfig::default();
        assert_eq!(config.input_size, 640);
        assert!(config.labels_path.is_none());
        assert_eq!(FOOD101_CLASSES.len(), 101);
    }
}
