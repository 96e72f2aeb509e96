//! Error Dialog
//!
//! The modal that surfaces model-load, camera-open and screenshot
//! failures. Command handling is suspended while it is up, so
//! clicking OK is the only way forward.

use egui::{Align2, Color32, Margin, RichText, Vec2};

const DIALOG_SIZE: Vec2 = Vec2::new(440.0, 200.0);
const OK_BUTTON_SIZE: Vec2 = Vec2::new(120.0, 44.0);

/// Centered modal with a warning header, a message and an OK button.
pub struct ErrorDialog<'a> {
    message: &'a str,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Shows the dialog; returns true once OK is clicked.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut dismissed = false;

        egui::Window::new("error_dialog")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size(DIALOG_SIZE)
            .frame(
                egui::Frame::new()
                    .fill(Color32::from_rgb(30, 41, 59))
                    .stroke(egui::Stroke::new(1.0, Color32::from_rgb(51, 65, 85)))
                    .corner_radius(12.0)
                    .inner_margin(Margin::same(24)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);

                    ui.label(
                        RichText::new("⚠ Error")
                            .size(24.0)
                            .strong()
                            .color(Color32::from_rgb(239, 68, 68)),
                    );

                    ui.add_space(16.0);

                    ui.label(
                        RichText::new(self.message)
                            .size(15.0)
                            .color(Color32::from_rgb(226, 232, 240)),
                    );

                    ui.add_space(20.0);

                    let ok_button = egui::Button::new(
                        RichText::new("OK").size(16.0).color(Color32::WHITE),
                    )
                    .fill(Color32::from_rgb(59, 130, 246))
                    .corner_radius(8.0)
                    .min_size(OK_BUTTON_SIZE);

                    if ui.add(ok_button).clicked() {
                        dismissed = true;
                    }
                });
            });

        dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_stays_up_without_click() {
        let ctx = egui::Context::default();
        let mut dismissed = true;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            dismissed = ErrorDialog::new("Could not open camera 0").show(ctx);
        });

        assert!(!dismissed);
    }
}
