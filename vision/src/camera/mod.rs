//! Camera capture.
//!
//! - `config`: validated capture configuration
//! - `device`: the OpenCV-backed camera
//! - `source`: the trait seam the capture loop consumes, so tests can
//!   substitute a scripted source for real hardware

mod config;
mod device;
mod source;

pub use config::CameraConfig;
pub use device::Camera;
pub use source::FrameSource;
