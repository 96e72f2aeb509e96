//! Error types for capture and detection operations.

use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, VisionError>;

/// Error type for camera and detector operations
#[derive(Debug)]
pub enum VisionError {
    /// Invalid configuration value
    Config(String),
    /// I/O error
    Io(io::Error),
    /// Camera device error
    Camera(String),
    /// Model file could not be resolved or loaded
    Model(String),
    /// Inference run failed
    Inference(String),
    /// Image encoding or conversion error
    Image(String),
    /// OpenCV error
    OpenCv(opencv::Error),
}

impl fmt::Display for VisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisionError::Config(msg) => write!(f, "Config error: {}", msg),
            VisionError::Io(err) => write!(f, "I/O error: {}", err),
            VisionError::Camera(msg) => write!(f, "Camera error: {}", msg),
            VisionError::Model(msg) => write!(f, "Model error: {}", msg),
            VisionError::Inference(msg) => write!(f, "Inference error: {}", msg),
            VisionError::Image(msg) => write!(f, "Image error: {}", msg),
            VisionError::OpenCv(err) => write!(f, "OpenCV error: {}", err),
        }
    }
}

impl std::error::Error for VisionError {}

impl From<io::Error> for VisionError {
    fn from(err: io::Error) -> Self {
        VisionError::Io(err)
    }
}

impl From<opencv::Error> for VisionError {
    fn from(err: opencv::Error) -> Self {
        VisionError::OpenCv(err)
    }
}

impl From<ort::OrtError> for VisionError {
    fn from(err: ort::OrtError) -> Self {
        VisionError::Inference(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_config() {
        let err = VisionError::Config("bad resolution".to_string());
        assert_eq!(err.to_string(), "Config error: bad resolution");
    }

    #[test]
    fn test_display_model() {
        let err = VisionError::Model("yolov8n.onnx not found".to_string());
        assert_eq!(err.to_string(), "Model error: yolov8n.onnx not found");
    }

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: VisionError = io_err.into();
        match err {
            VisionError::Io(_) => {}
            _ => panic!("expected VisionError::Io"),
        }
    }

    #[test]
    fn test_is_error_trait() {
        let err = VisionError::Camera("busy".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
