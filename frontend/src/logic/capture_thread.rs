//! Capture/Inference Worker
//!
//! The single background loop of a session: read a frame, run the
//! detector at the current threshold, hand the packet to the display
//! queue. Generic over the frame source and the detector so the loop
//! is testable without a camera or model weights.

use logging::Logger;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use vision::{ConfidenceThreshold, Detector, FrameChannel, FramePacket, FrameSource};

/// Runs the capture loop until the running flag is cleared or the
/// frame source ends.
///
/// A source returning `None` (camera unplugged, stream over) ends the
/// loop quietly with a log line; it is not an error the user has to
/// acknowledge. `try_send` never blocks: when the GUI is behind, the
/// channel evicts its oldest packet, and in the worst case this frame
/// is silently dropped.
pub fn run_capture_loop<S, D>(
    mut source: S,
    mut detector: D,
    channel: Arc<FrameChannel>,
    threshold: Arc<ConfidenceThreshold>,
    running: Arc<AtomicBool>,
    logger: Logger,
) where
    S: FrameSource,
    D: Detector,
{
    logger.info("Capture loop started");
    let mut seq: u64 = 0;

    while running.load(Ordering::SeqCst) {
        let Some(frame) = source.read_frame() else {
            logger.info("Frame source ended, leaving capture loop");
            break;
        };

        let output = match detector.detect(&frame, threshold.get()) {
            Ok(output) => output,
            Err(e) => {
                logger.error(&format!("Inference failed: {}", e));
                break;
            }
        };

        let packet = match FramePacket::new(output.annotated, output.detections, output.fps, seq) {
            Ok(packet) => packet,
            Err(e) => {
                logger.error(&format!("Frame conversion failed: {}", e));
                break;
            }
        };
        seq += 1;

        // Dropped frames are intentional, not worth a log line each
        let _ = channel.try_send(packet);
    }

    logger.info(&format!("Capture loop finished after {} frame(s)", seq));
}
