//! Frame source abstraction.

use opencv::core::Mat;

/// A source of raw BGR frames.
///
/// The capture loop is written against this trait instead of the
/// concrete camera so the loop (and the session lifecycle around it)
/// can be exercised in tests without hardware.
pub trait FrameSource {
    /// Reads the next frame.
    ///
    /// Returns `None` at end of stream; any read failure is treated
    /// the same way, which makes the capture loop exit quietly.
    fn read_frame(&mut self) -> Option<Mat>;
}
