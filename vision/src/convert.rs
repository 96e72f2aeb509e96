//! BGR to RGB conversion for display.
//!
//! OpenCV delivers BGR; egui textures want RGB.

use crate::error::{Result, VisionError};
use opencv::core::Mat;
use opencv::prelude::*;

/// Converts a BGR `Mat` to RGB pixel data.
///
/// Returns `(width, height, rgb_pixels)`. An empty matrix converts to
/// an empty pixel buffer rather than an error so callers can pass
/// frames through uniformly.
pub fn bgr_mat_to_rgb(mat: &Mat) -> Result<(usize, usize, Vec<u8>)> {
    if mat.empty() {
        return Ok((0, 0, Vec::new()));
    }

    let width = mat.cols() as usize;
    let height = mat.rows() as usize;

    let bgr = mat
        .data_bytes()
        .map_err(|e| VisionError::Image(format!("cannot access frame data: {}", e)))?;

    let mut rgb = vec![0u8; bgr.len()];
    for (src, dst) in bgr.chunks_exact(3).zip(rgb.chunks_exact_mut(3)) {
        dst[0] = src[2];
        dst[1] = src[1];
        dst[2] = src[0];
    }

    Ok((width, height, rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mat_converts_to_empty_buffer() {
        let mat = Mat::default();
        let (width, height, rgb) = bgr_mat_to_rgb(&mat).unwrap();
        assert_eq!((width, height), (0, 0));
        assert!(rgb.is_empty());
    }

    #[test]
    fn test_channels_are_swapped() {
        // Two pixels, BGR order: (10,20,30) and (40,50,60)
        let flat = Mat::from_slice(&[10u8, 20, 30, 40, 50, 60]).unwrap();
        let bgr = flat.reshape(3, 1).unwrap().try_clone().unwrap();

        let (width, height, rgb) = bgr_mat_to_rgb(&bgr).unwrap();
        assert_eq!((width, height), (2, 1));
        assert_eq!(rgb, vec![30, 20, 10, 60, 50, 40]);
    }
}
