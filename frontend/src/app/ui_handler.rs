//! UI Command Handler
//!
//! This module dispatches UI commands to specialized handlers.
//! Implementation details are split into domain-specific modules:
//! - session_handlers: Start/stop of the detection session
//! - snapshot_handlers: Screenshot capture
//! - settings_handlers: Model selection, confidence threshold, log

use super::state::App;
use crate::events::UiCommand;

impl App {
    /// Dispatches UI commands to appropriate handlers
    /// This is the main entry point for all UI actions
    pub(super) fn handle_ui_command(&mut self, command: UiCommand) {
        self.logger
            .debug(&format!("[UI] Handling command: {:?}", command));
        match command {
            // Session lifecycle
            UiCommand::StartDetection => self.handle_start_detection(),
            UiCommand::StopDetection => self.handle_stop_detection(),

            // Capture
            UiCommand::TakeScreenshot => self.handle_take_screenshot(),

            // Settings
            UiCommand::SetConfidence(value) => self.handle_set_confidence(value),
            UiCommand::SelectModel(variant) => self.handle_select_model(variant),

            // Detection log
            UiCommand::ClearLog => self.handle_clear_log(),
        }
    }
}
