//! Application Module - MVU Controller
//!
//! This module implements the Controller layer of the MVU architecture.
//! It coordinates between the view layer (pages) and the capture
//! pipeline running in the background.
//!
//! # Structure
//!
//! - `state.rs`: Application state definition and MVU loop
//! - `ui_handler.rs`: Command dispatcher for UI actions
//! - `handlers/`: Domain-specific UI command handlers
//!   - `session_handlers.rs`: Start/stop of the detection session
//!   - `snapshot_handlers.rs`: Screenshot capture
//!   - `settings_handlers.rs`: Model selection, confidence, log
//! - `frame_handler.rs`: Consumes packets from the frame channel
//!
//! # Communication Flow
//!
//! ```text
//! View (pages) --> UiCommand --> ui_handler --> handlers/* --> State mutation
//!                                                          \--> CaptureSession
//!
//! Capture thread --> FrameChannel --> frame_handler --> texture + readouts
//! ```

mod frame_handler;
mod handlers;
mod state;
mod ui_handler;

pub use state::App;
