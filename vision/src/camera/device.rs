//! Camera device access.
//!
//! Wraps an OpenCV `VideoCapture`: opens the device, requests the
//! configured resolution and a minimal driver buffer, and reads BGR
//! frames. The handle is released when the `Camera` is dropped, which
//! happens exactly once when the capture loop ends.

use crate::camera::config::CameraConfig;
use crate::camera::source::FrameSource;
use crate::error::{Result, VisionError};
use logging::Logger;
use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{
    CAP_ANY, CAP_PROP_BUFFERSIZE, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH, VideoCapture,
};

/// Log a progress line every this many captured frames.
const CAPTURE_LOG_INTERVAL: u64 = 300;

/// Video capture device
pub struct Camera {
    capture: VideoCapture,
    logger: Logger,
    frame_count: u64,
    actual_width: u32,
    actual_height: u32,
}

impl Camera {
    /// Opens and configures the camera.
    ///
    /// Requests the configured resolution and a single-frame driver
    /// buffer so stale frames are flushed quickly. Both are
    /// best-effort: drivers may ignore them, so the actual negotiated
    /// values are read back and logged (with a warning on mismatch).
    ///
    /// # Errors
    /// `VisionError::Camera` if the device cannot be opened.
    pub fn open(config: &CameraConfig, logger: Logger) -> Result<Self> {
        logger.info(&format!(
            "Opening camera device {} at {}x{}",
            config.device_id, config.width, config.height
        ));

        let mut capture = VideoCapture::new(config.device_id, CAP_ANY)
            .map_err(|e| VisionError::Camera(format!("failed to open device: {}", e)))?;

        let opened = capture
            .is_opened()
            .map_err(|e| VisionError::Camera(format!("failed to query device: {}", e)))?;
        if !opened {
            return Err(VisionError::Camera(format!(
                "cannot open webcam (device index {}); it may be in use by another application",
                config.device_id
            )));
        }

        let _ = capture.set(CAP_PROP_FRAME_WIDTH, f64::from(config.width));
        let _ = capture.set(CAP_PROP_FRAME_HEIGHT, f64::from(config.height));
        // Keep the driver queue minimal so frames reach us fresh
        let _ = capture.set(CAP_PROP_BUFFERSIZE, 1.0);

        let actual_width = capture.get(CAP_PROP_FRAME_WIDTH)? as u32;
        let actual_height = capture.get(CAP_PROP_FRAME_HEIGHT)? as u32;

        logger.info(&format!(
            "Camera ready at {}x{}",
            actual_width, actual_height
        ));
        if actual_width != config.width || actual_height != config.height {
            logger.warn(&format!(
                "Resolution mismatch (requested {}x{}, got {}x{})",
                config.width, config.height, actual_width, actual_height
            ));
        }

        Ok(Camera {
            capture,
            logger,
            frame_count: 0,
            actual_width,
            actual_height,
        })
    }

    /// Total frames read so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The resolution the driver actually negotiated.
    pub fn actual_resolution(&self) -> (u32, u32) {
        (self.actual_width, self.actual_height)
    }
}

impl FrameSource for Camera {
    /// Reads one BGR frame. Any failure or empty frame is reported as
    /// end of stream so the capture loop terminates quietly.
    fn read_frame(&mut self) -> Option<Mat> {
        let mut mat = Mat::default();

        match self.capture.read(&mut mat) {
            Ok(true) if !mat.empty() => {
                self.frame_count += 1;
                if self.frame_count.is_multiple_of(CAPTURE_LOG_INTERVAL) {
                    self.logger
                        .debug(&format!("Frames captured: {}", self.frame_count));
                }
                Some(mat)
            }
            Ok(_) => {
                self.logger.info("Camera stream ended");
                None
            }
            Err(e) => {
                self.logger.warn(&format!("Camera read failed: {}", e));
                None
            }
        }
    }
}

impl Drop for Camera {
    fn drop(&mut self) {
        if let Err(e) = self.capture.release() {
            self.logger.warn(&format!("Camera release failed: {}", e));
        } else {
            self.logger.info("Camera released");
        }
    }
}
