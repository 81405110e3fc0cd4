//! YOLO ONNX inference backend.

mod classes;
mod yolo;

pub use classes::FOOD101_CLASSES;
pub use yolo::{DetectorConfig, YoloDetector};
