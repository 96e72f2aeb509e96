//! Logic Module
//!
//! Background capture/inference pipeline and its lifecycle management.
//! Nothing here touches egui: the only contact points with the GUI
//! thread are the frame channel, the shared confidence threshold and
//! the running flag.

mod capture_thread;
mod session;
pub mod utils;

pub use capture_thread::run_capture_loop;
pub use session::{CaptureSession, SessionState};
