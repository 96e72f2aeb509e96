//! Object detection.
//!
//! The GUI treats detection as a black box behind the [`Detector`]
//! trait: one BGR frame and a confidence threshold in, an annotated
//! copy plus structured results and an FPS reading out. The shipped
//! implementation is [`YoloDetector`] (YOLOv8 over ONNX Runtime).

mod annotate;
mod bounding_box;
mod fps;
mod labels;
mod threshold;
mod yolo;

pub use bounding_box::BoundingBox;
pub use fps::FpsMeter;
pub use threshold::ConfidenceThreshold;
pub use yolo::YoloDetector;

use crate::error::Result;
use opencv::core::Mat;
use std::fmt;

/// One detected object.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Human-readable class name, e.g. "person".
    pub label: String,
    /// Detection score in [0, 1].
    pub confidence: f32,
    /// Box in source-image pixel coordinates.
    pub bbox: BoundingBox,
    /// Model class index; drives the annotation color cycle.
    pub class_id: usize,
}

/// Result of running one frame through a detector.
pub struct DetectionOutput {
    /// BGR copy of the input with boxes, labels and FPS overlay drawn.
    pub annotated: Mat,
    /// Detections above the requested confidence threshold.
    pub detections: Vec<Detection>,
    /// Smoothed frames-per-second estimate.
    pub fps: f64,
}

/// Detection black box: frame in, annotated frame + results out.
pub trait Detector: Send {
    /// Runs inference on a single BGR frame. Only detections scoring
    /// at least `confidence_threshold` are reported.
    fn detect(&mut self, frame: &Mat, confidence_threshold: f32) -> Result<DetectionOutput>;
}

/// The YOLOv8 size variants offered in the model selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelVariant {
    Nano,
    Small,
    Medium,
    Large,
    XLarge,
}

impl ModelVariant {
    /// All variants, ordered fastest to most accurate.
    pub const ALL: [ModelVariant; 5] = [
        ModelVariant::Nano,
        ModelVariant::Small,
        ModelVariant::Medium,
        ModelVariant::Large,
        ModelVariant::XLarge,
    ];

    /// The model identifier, e.g. "yolov8n".
    pub fn identifier(&self) -> &'static str {
        match self {
            ModelVariant::Nano => "yolov8n",
            ModelVariant::Small => "yolov8s",
            ModelVariant::Medium => "yolov8m",
            ModelVariant::Large => "yolov8l",
            ModelVariant::XLarge => "yolov8x",
        }
    }

    /// File name of the exported ONNX weights.
    pub fn onnx_file_name(&self) -> String {
        format!("{}.onnx", self.identifier())
    }

    /// Looks a variant up by its identifier.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.identifier() == identifier)
    }
}

impl Default for ModelVariant {
    fn default() -> Self {
        ModelVariant::Nano
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
