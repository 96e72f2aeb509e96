//! YOLOv8 detector over ONNX Runtime.
//!
//! Preprocessing letterboxes the frame into a 640x640 NCHW float
//! tensor; postprocessing takes the per-anchor argmax over the 80
//! COCO classes, filters by the caller's confidence threshold, runs
//! non-maximum suppression and maps boxes back to source pixels.

use crate::detector::annotate;
use crate::detector::bounding_box::{BoundingBox, Candidate, non_maximum_suppression};
use crate::detector::fps::FpsMeter;
use crate::detector::labels::label_for;
use crate::detector::{Detection, DetectionOutput, Detector, ModelVariant};
use crate::error::{Result, VisionError};
use logging::Logger;
use ndarray::{Array4, ArrayView2, Axis, CowArray, s};
use opencv::core::{CV_8UC3, CV_32FC3, Mat, Rect, Scalar, Size, Vector};
use opencv::imgproc;
use opencv::prelude::*;
use ort::{Environment, Session, SessionBuilder, Value};
use std::path::PathBuf;
use std::sync::Arc;

/// Model input side length; YOLOv8 exports are square.
const INPUT_SIZE: i32 = 640;
const NMS_IOU_THRESHOLD: f32 = 0.45;

/// Directory searched for `.onnx` weights before the working directory.
pub const MODEL_DIR_ENV: &str = "LIVESIGHT_MODEL_DIR";

/// YOLOv8 model session plus its FPS meter.
pub struct YoloDetector {
    session: Session,
    variant: ModelVariant,
    fps: FpsMeter,
    logger: Logger,
}

impl YoloDetector {
    /// Resolves and loads the ONNX weights for `variant`.
    ///
    /// # Errors
    /// `VisionError::Model` when the weights file cannot be found or
    /// the runtime rejects it.
    pub fn load(variant: ModelVariant, logger: Logger) -> Result<Self> {
        let model_path = resolve_model_path(variant)?;
        logger.info(&format!(
            "Loading model '{}' from {}",
            variant,
            model_path.display()
        ));

        let environment = Arc::new(
            Environment::builder()
                .with_name("livesight")
                .build()
                .map_err(|e| VisionError::Model(format!("runtime init failed: {}", e)))?,
        );

        let session = SessionBuilder::new(&environment)
            .map_err(|e| VisionError::Model(format!("session setup failed: {}", e)))?
            .with_model_from_file(&model_path)
            .map_err(|e| {
                VisionError::Model(format!(
                    "could not load {}: {}",
                    model_path.display(),
                    e
                ))
            })?;

        logger.info(&format!("Model ready: {}", variant));

        Ok(Self {
            session,
            variant,
            // Fresh counters per loaded model
            fps: FpsMeter::new(),
            logger,
        })
    }

    /// The variant this session was loaded from.
    pub fn variant(&self) -> ModelVariant {
        self.variant
    }
}

impl Detector for YoloDetector {
    fn detect(&mut self, frame: &Mat, confidence_threshold: f32) -> Result<DetectionOutput> {
        let fps = self.fps.tick();

        let (tensor, scaled_w, scaled_h) = preprocess(frame)?;
        let input = CowArray::from(tensor.into_dyn());
        let input_value = Value::from_array(self.session.allocator(), &input)?;

        let outputs = self.session.run(vec![input_value])?;
        let output = outputs
            .first()
            .ok_or_else(|| VisionError::Inference("model produced no output".to_string()))?
            .try_extract::<f32>()?
            .view()
            .t()
            .into_owned();

        let rows = output.slice(s![.., .., 0]);
        let detections = decode_rows(
            rows,
            confidence_threshold,
            NMS_IOU_THRESHOLD,
            (frame.cols(), frame.rows()),
            (scaled_w, scaled_h),
        );

        if !detections.is_empty() {
            self.logger
                .debug(&format!("{} detection(s) above threshold", detections.len()));
        }

        let mut annotated = frame.clone();
        annotate::draw_detections(&mut annotated, &detections)?;
        annotate::draw_fps_overlay(&mut annotated, fps)?;

        Ok(DetectionOutput {
            annotated,
            detections,
            fps,
        })
    }
}

/// Finds `<variant>.onnx` in `LIVESIGHT_MODEL_DIR`, then the working
/// directory.
pub(crate) fn resolve_model_path(variant: ModelVariant) -> Result<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(dir) = std::env::var(MODEL_DIR_ENV) {
        dirs.push(PathBuf::from(dir));
    }
    dirs.push(PathBuf::from("."));

    resolve_model_in(&dirs, variant).ok_or_else(|| {
        VisionError::Model(format!(
            "could not resolve model '{}': place {} in the working directory or set {}",
            variant,
            variant.onnx_file_name(),
            MODEL_DIR_ENV
        ))
    })
}

fn resolve_model_in(dirs: &[PathBuf], variant: ModelVariant) -> Option<PathBuf> {
    let file_name = variant.onnx_file_name();
    dirs.iter()
        .map(|dir| dir.join(&file_name))
        .find(|path| path.is_file())
}

/// Letterboxes `frame` into a (1, 3, 640, 640) NCHW float tensor.
/// Returns the tensor plus the scaled content size inside the
/// letterbox, which postprocessing needs to undo the padding.
fn preprocess(frame: &Mat) -> Result<(Array4<f32>, i32, i32)> {
    let mut rgb = Mat::default();
    imgproc::cvt_color_def(frame, &mut rgb, imgproc::COLOR_BGR2RGB)?;

    let scale = letterbox_scale(frame.cols(), frame.rows());
    // Snap the scaled content to the stride-32 grid the model expects
    let scaled_w = ((frame.cols() as f32 * scale / 32.0).round() * 32.0) as i32;
    let scaled_h = ((frame.rows() as f32 * scale / 32.0).round() * 32.0) as i32;

    let mut resized = Mat::default();
    imgproc::resize(
        &rgb,
        &mut resized,
        Size::new(scaled_w, scaled_h),
        0.0,
        0.0,
        imgproc::INTER_LINEAR,
    )?;

    let mut letterboxed = Mat::new_rows_cols_with_default(
        INPUT_SIZE,
        INPUT_SIZE,
        CV_8UC3,
        Scalar::new(114.0, 114.0, 114.0, 0.0),
    )?;
    let dw = (INPUT_SIZE - scaled_w) / 2;
    let dh = (INPUT_SIZE - scaled_h) / 2;
    let mut roi = Mat::roi_mut(&mut letterboxed, Rect::new(dw, dh, scaled_w, scaled_h))?;
    resized.copy_to(&mut roi)?;
    drop(roi);

    let mut float_img = Mat::default();
    letterboxed.convert_to(&mut float_img, CV_32FC3, 1.0 / 255.0, 0.0)?;

    // HWC to CHW: split the planes and concatenate
    let mut channels = Vector::<Mat>::new();
    opencv::core::split(&float_img, &mut channels)?;

    let plane = (INPUT_SIZE * INPUT_SIZE) as usize;
    let mut chw = Vec::with_capacity(3 * plane);
    for channel in channels.iter() {
        chw.extend_from_slice(channel.data_typed::<f32>()?);
    }

    let tensor = Array4::from_shape_vec((1, 3, INPUT_SIZE as usize, INPUT_SIZE as usize), chw)
        .map_err(|e| VisionError::Inference(format!("bad tensor shape: {}", e)))?;

    Ok((tensor, scaled_w, scaled_h))
}

fn letterbox_scale(img_w: i32, img_h: i32) -> f32 {
    (INPUT_SIZE as f32 / img_w as f32).min(INPUT_SIZE as f32 / img_h as f32)
}

/// Decodes transposed YOLOv8 output rows of `[xc, yc, w, h, 80 class
/// scores]` into detections in source-image pixels.
fn decode_rows(
    rows: ArrayView2<f32>,
    confidence_threshold: f32,
    iou_threshold: f32,
    img_size: (i32, i32),
    scaled_size: (i32, i32),
) -> Vec<Detection> {
    let (img_w, img_h) = img_size;
    let (scaled_w, scaled_h) = scaled_size;
    let scale = letterbox_scale(img_w, img_h);
    let dw = (INPUT_SIZE - scaled_w) as f32 / 2.0;
    let dh = (INPUT_SIZE - scaled_h) as f32 / 2.0;

    let mut candidates = Vec::new();
    for row in rows.axis_iter(Axis(0)) {
        let (class_id, score) = row
            .iter()
            .skip(4)
            .enumerate()
            .fold((0usize, f32::MIN), |best, (idx, &value)| {
                if value > best.1 { (idx, value) } else { best }
            });

        if !(score >= confidence_threshold) {
            continue;
        }

        let xc = (row[0] - dw) / scale;
        let yc = (row[1] - dh) / scale;
        let w = row[2] / scale;
        let h = row[3] / scale;

        let x1 = ((xc - w / 2.0).round() as i32).clamp(0, img_w);
        let y1 = ((yc - h / 2.0).round() as i32).clamp(0, img_h);
        let x2 = ((xc + w / 2.0).round() as i32).clamp(0, img_w);
        let y2 = ((yc + h / 2.0).round() as i32).clamp(0, img_h);

        candidates.push(Candidate {
            bbox: BoundingBox::new(x1, y1, x2, y2),
            confidence: score,
            class_id,
        });
    }

    non_maximum_suppression(candidates, iou_threshold)
        .into_iter()
        .map(|c| Detection {
            label: label_for(c.class_id).to_string(),
            confidence: c.confidence,
            bbox: c.bbox,
            class_id: c.class_id,
        })
        .collect()
}
