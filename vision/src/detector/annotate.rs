//! Drawing detections onto frames.

use crate::detector::Detection;
use crate::error::Result;
use opencv::core::{Mat, Point, Rect, Scalar};
use opencv::imgproc;

/// Box colors, one per class, cycling.
const PALETTE: [(f64, f64, f64); 10] = [
    (255.0, 56.0, 56.0),
    (255.0, 157.0, 51.0),
    (34.0, 197.0, 255.0),
    (99.0, 255.0, 80.0),
    (255.0, 99.0, 204.0),
    (56.0, 255.0, 165.0),
    (255.0, 255.0, 51.0),
    (0.0, 161.0, 255.0),
    (173.0, 3.0, 255.0),
    (255.0, 99.0, 71.0),
];

const FONT: i32 = imgproc::FONT_HERSHEY_SIMPLEX;
const LABEL_SCALE: f64 = 0.55;

fn class_color(class_id: usize) -> Scalar {
    let (c0, c1, c2) = PALETTE[class_id % PALETTE.len()];
    Scalar::new(c0, c1, c2, 0.0)
}

/// Draws a box and a label chip (`label  NN%`) for every detection.
pub(crate) fn draw_detections(canvas: &mut Mat, detections: &[Detection]) -> Result<()> {
    for detection in detections {
        let color = class_color(detection.class_id);
        let rect = detection.bbox.to_rect();

        imgproc::rectangle(canvas, rect, color, 2, imgproc::LINE_8, 0)?;

        let tag = format!("{}  {:.0}%", detection.label, detection.confidence * 100.0);
        let mut baseline = 0;
        let text_size = imgproc::get_text_size(&tag, FONT, LABEL_SCALE, 1, &mut baseline)?;

        // Filled chip sits just above the box, clamped to the frame top
        let chip_top = (rect.y - text_size.height - baseline - 6).max(0);
        let chip = Rect::new(
            rect.x,
            chip_top,
            text_size.width + 6,
            rect.y - chip_top,
        );
        imgproc::rectangle(canvas, chip, color, imgproc::FILLED, imgproc::LINE_8, 0)?;

        imgproc::put_text(
            canvas,
            &tag,
            Point::new(rect.x + 3, rect.y - baseline - 2),
            FONT,
            LABEL_SCALE,
            Scalar::new(255.0, 255.0, 255.0, 0.0),
            1,
            imgproc::LINE_AA,
            false,
        )?;
    }

    Ok(())
}

/// Draws the `FPS: xx.x` readout bottom-left, shadow first so the
/// text stays readable on any background.
pub(crate) fn draw_fps_overlay(canvas: &mut Mat, fps: f64) -> Result<()> {
    let text = format!("FPS: {:5.1}", fps);
    let origin = Point::new(12, 32);

    imgproc::put_text(
        canvas,
        &text,
        origin,
        FONT,
        1.0,
        Scalar::new(0.0, 0.0, 0.0, 0.0),
        4,
        imgproc::LINE_AA,
        false,
    )?;
    imgproc::put_text(
        canvas,
        &text,
        origin,
        FONT,
        1.0,
        Scalar::new(50.0, 255.0, 100.0, 0.0),
        2,
        imgproc::LINE_AA,
        false,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(class_color(0), class_color(PALETTE.len()));
        assert_ne!(class_color(0), class_color(1));
    }
}
