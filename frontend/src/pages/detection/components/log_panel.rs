//! Detection Log Panel
//!
//! Scrollable list of timestamped detection lines.

use crate::events::UiCommand;
use crate::models::DetectionLog;
use egui::{Color32, RichText};

/// Renders the detection log with its clear button
pub fn render_log_panel(ui: &mut egui::Ui, log: &DetectionLog) -> Option<UiCommand> {
    let mut command = None;

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.heading("Detections");
        if !log.is_empty() && ui.small_button("Clear").clicked() {
            command = Some(UiCommand::ClearLog);
        }
    });
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if log.is_empty() {
                ui.label(
                    RichText::new("No detections yet")
                        .size(13.0)
                        .color(Color32::from_rgb(100, 116, 139)),
                );
                return;
            }

            for line in log.lines() {
                ui.monospace(line);
            }
        });

    command
}
