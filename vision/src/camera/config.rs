//! Camera configuration.

use crate::error::{Result, VisionError};

/// Camera capture configuration
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Camera device index (0 for the default webcam)
    pub device_id: i32,
    /// Requested frame width in pixels
    pub width: u32,
    /// Requested frame height in pixels
    pub height: u32,
}

impl CameraConfig {
    /// Minimum valid resolution dimension
    const MIN_DIMENSION: u32 = 1;
    /// Maximum valid resolution dimension (8K)
    const MAX_DIMENSION: u32 = 7680;

    /// Creates a configuration with a validated resolution.
    ///
    /// The resolution is a request only; drivers may negotiate a
    /// different one, which `Camera` logs after opening.
    ///
    /// # Errors
    /// `VisionError::Config` if either dimension is 0 or above 7680.
    pub fn new(device_id: i32, width: u32, height: u32) -> Result<Self> {
        for (name, value) in [("width", width), ("height", height)] {
            if !(Self::MIN_DIMENSION..=Self::MAX_DIMENSION).contains(&value) {
                return Err(VisionError::Config(format!(
                    "{} must be between {} and {}, got {}",
                    name,
                    Self::MIN_DIMENSION,
                    Self::MAX_DIMENSION,
                    value
                )));
            }
        }

        Ok(Self {
            device_id,
            width,
            height,
        })
    }
}

/// Default configuration: device 0 at 800x600 (the display panel size)
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device_id: 0,
            width: 800,
            height: 600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CameraConfig::default();
        assert_eq!(config.device_id, 0);
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
    }

    #[test]
    fn test_valid_resolution() {
        let config = CameraConfig::new(1, 1920, 1080).unwrap();
        assert_eq!(config.device_id, 1);
        assert_eq!(config.width, 1920);
        assert_eq!(config.height, 1080);
    }

    #[test]
    fn test_zero_width_rejected() {
        let result = CameraConfig::new(0, 0, 600);
        assert!(matches!(result.unwrap_err(), VisionError::Config(_)));
    }

    #[test]
    fn test_oversized_height_rejected() {
        let result = CameraConfig::new(0, 800, 10_000);
        assert!(matches!(result.unwrap_err(), VisionError::Config(_)));
    }

    #[test]
    fn test_edge_dimensions_accepted() {
        assert!(CameraConfig::new(0, 1, 1).is_ok());
        assert!(CameraConfig::new(0, 7680, 7680).is_ok());
    }
}
