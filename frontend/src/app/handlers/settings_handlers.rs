//! Settings Handlers
//!
//! Confidence threshold, model selection and detection log commands.

use crate::app::state::App;
use crate::logic::SessionState;
use vision::ModelVariant;

impl App {
    /// Applies a new confidence threshold. Takes effect on the next
    /// frame the worker processes; in-flight frames keep the old value.
    pub(in crate::app) fn handle_set_confidence(&mut self, value: f32) {
        self.confidence = value;
        // Clamped to [0.05, 0.99] inside
        self.session.threshold().set(value);
        self.logger.debug(&format!(
            "[SETTINGS] Confidence threshold set to {:.2}",
            self.session.threshold().get()
        ));
    }

    /// Switches the model variant; only possible while stopped
    pub(in crate::app) fn handle_select_model(&mut self, variant: ModelVariant) {
        if self.session.state() != SessionState::Stopped {
            self.logger
                .warn("[SETTINGS] Model change ignored while session active");
            return;
        }

        self.logger
            .info(&format!("[SETTINGS] Model variant set to '{}'", variant));
        self.selected_model = variant;
    }

    /// Empties the detection log
    pub(in crate::app) fn handle_clear_log(&mut self) {
        self.detection_log.clear();
        self.logger.debug("[SETTINGS] Detection log cleared");
    }
}
