//! Action Buttons
//!
//! The full-width session buttons in the control sidebar. All three
//! share one size so the control column lines up; only the fill color
//! and enablement vary with the session state.

use egui::{Color32, RichText, Vec2};

/// One size for the whole control column.
const ACTION_BUTTON_SIZE: Vec2 = Vec2::new(260.0, 40.0);

/// A full-width sidebar button.
pub struct ActionButton {
    label: String,
    fill: Color32,
    enabled: bool,
}

impl ActionButton {
    /// Blue, for starting the session
    pub fn primary(label: impl Into<String>) -> Self {
        Self::styled(label, Color32::from_rgb(59, 130, 246))
    }

    /// Gray, for auxiliary actions like the screenshot
    pub fn secondary(label: impl Into<String>) -> Self {
        Self::styled(label, Color32::from_rgb(107, 114, 128))
    }

    /// Red, for stopping the session
    pub fn danger(label: impl Into<String>) -> Self {
        Self::styled(label, Color32::from_rgb(239, 68, 68))
    }

    fn styled(label: impl Into<String>, fill: Color32) -> Self {
        Self {
            label: label.into(),
            fill,
            enabled: true,
        }
    }

    /// Grays the button out when its action is invalid in this state
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Renders the button and returns the response
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let button = egui::Button::new(
            RichText::new(&self.label).size(16.0).color(Color32::WHITE),
        )
        .fill(self.fill)
        .corner_radius(8.0)
        .min_size(ACTION_BUTTON_SIZE);

        ui.add_enabled(self.enabled, button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_button_never_clicks() {
        let ctx = egui::Context::default();
        let mut clicked = false;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                clicked = ActionButton::danger("■ Stop Detection")
                    .enabled(false)
                    .show(ui)
                    .clicked();
            });
        });

        assert!(!clicked);
    }
}
