//! Frame packet moving from the capture thread to the GUI.

use crate::convert::bgr_mat_to_rgb;
use crate::detector::Detection;
use crate::error::{Result, VisionError};
use opencv::core::{Mat, Vector};
use opencv::imgcodecs;
use std::path::Path;

/// One annotated camera frame with its detection results and an FPS
/// snapshot.
///
/// Produced once by the capture thread, then owned by the channel and
/// finally by the GUI thread; never mutated after construction. The
/// BGR `image` is kept alongside the display pixels so screenshots can
/// be written without a second conversion.
pub struct FramePacket {
    image: Mat,
    rgb: Vec<u8>,
    width: usize,
    height: usize,
    pub detections: Vec<Detection>,
    pub fps: f64,
    pub seq: u64,
}

impl FramePacket {
    /// Builds a packet from an annotated BGR frame.
    pub fn new(image: Mat, detections: Vec<Detection>, fps: f64, seq: u64) -> Result<Self> {
        let (width, height, rgb) = bgr_mat_to_rgb(&image)?;
        Ok(Self {
            image,
            rgb,
            width,
            height,
            detections,
            fps,
            seq,
        })
    }

    /// Display width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Display height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// RGB pixel data for texture upload.
    pub fn rgb_pixels(&self) -> &[u8] {
        self.rgb.as_slice()
    }

    /// Writes the annotated BGR frame to `path` (format from the
    /// file extension).
    pub fn save(&self, path: &Path) -> Result<()> {
        let path_str = path
            .to_str()
            .ok_or_else(|| VisionError::Image(format!("non-UTF8 path: {}", path.display())))?;

        let written = imgcodecs::imwrite(path_str, &self.image, &Vector::new())?;
        if !written {
            return Err(VisionError::Image(format!(
                "encoder refused to write {}",
                path_str
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::prelude::MatTraitConst;

    #[test]
    fn test_packet_from_empty_mat() {
        let packet = FramePacket::new(Mat::default(), Vec::new(), 0.0, 7).unwrap();
        assert_eq!(packet.width(), 0);
        assert_eq!(packet.height(), 0);
        assert!(packet.rgb_pixels().is_empty());
        assert_eq!(packet.seq, 7);
    }

    #[test]
    fn test_packet_carries_dimensions() {
        let flat = Mat::from_slice(&[0u8; 4 * 3 * 3]).unwrap();
        let bgr = flat.reshape(3, 3).unwrap().try_clone().unwrap();

        let packet = FramePacket::new(bgr, Vec::new(), 12.5, 1).unwrap();
        assert_eq!(packet.width(), 4);
        assert_eq!(packet.height(), 3);
        assert_eq!(packet.rgb_pixels().len(), 4 * 3 * 3);
        assert_eq!(packet.fps, 12.5);
    }
}
