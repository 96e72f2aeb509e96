//! Detection Page Components

mod control_panel;
mod log_panel;
mod video_panel;

/// Width of the controls/log sidebar.
pub const SIDEBAR_WIDTH: f32 = 300.0;

pub use control_panel::render_control_panel;
pub use log_panel::render_log_panel;
pub use video_panel::render_video_panel;
