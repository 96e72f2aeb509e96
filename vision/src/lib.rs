//! Camera capture and object detection library.
//!
//! Owns the three pieces the GUI binary builds on:
//! - `camera`: OpenCV video capture with validated configuration
//! - `detector`: YOLOv8 ONNX inference, annotation, and the shared
//!   confidence threshold
//! - `channel`: the bounded drop-oldest frame queue connecting the
//!   capture thread to the GUI thread

pub mod camera;
pub mod channel;
pub mod convert;
pub mod detector;
pub mod error;
pub mod frame;

pub use camera::{Camera, CameraConfig, FrameSource};
pub use channel::{DISPLAY_QUEUE_DEPTH, FrameChannel};
pub use detector::{
    ConfidenceThreshold, Detection, DetectionOutput, Detector, ModelVariant, YoloDetector,
};
pub use error::{Result, VisionError};
pub use frame::FramePacket;

// Re-exported so the GUI crate can hold frames without depending on
// opencv directly.
pub use opencv::core::Mat;
