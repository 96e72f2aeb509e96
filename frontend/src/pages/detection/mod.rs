//! Detection Page
//!
//! The single page of the application: video panel in the center,
//! controls and detection log in the right sidebar, status bar at the
//! bottom.

mod components;

use crate::config::AppConfig;
use crate::events::UiCommand;
use crate::logic::SessionState;
use crate::models::DetectionLog;
use egui::TextureHandle;
use vision::ModelVariant;

/// Read-only snapshot of everything the page renders.
pub struct DetectionView<'a> {
    pub state: SessionState,
    pub texture: Option<&'a TextureHandle>,
    pub fps: f64,
    pub object_count: usize,
    pub selected_model: ModelVariant,
    pub confidence: f32,
    pub log: &'a DetectionLog,
    pub config: &'a AppConfig,
}

pub struct DetectionPage;

impl DetectionPage {
    pub fn show(ui: &mut egui::Ui, view: DetectionView) -> Option<UiCommand> {
        let mut command = None;

        Self::render_sidebar(ui, &view, &mut command);
        Self::render_status_bar(ui, &view);
        Self::render_video_area(ui, &view);

        command
    }

    /// Renders the controls + detection log sidebar
    fn render_sidebar(ui: &mut egui::Ui, view: &DetectionView, command: &mut Option<UiCommand>) {
        egui::SidePanel::right("control_sidebar")
            .resizable(false)
            .exact_width(components::SIDEBAR_WIDTH)
            .show_inside(ui, |ui| {
                if let Some(cmd) = components::render_control_panel(ui, view) {
                    *command = Some(cmd);
                }

                ui.add_space(12.0);
                ui.separator();

                if let Some(cmd) = components::render_log_panel(ui, view.log) {
                    *command = Some(cmd);
                }
            });
    }

    /// Renders the bottom status bar
    fn render_status_bar(ui: &mut egui::Ui, view: &DetectionView) {
        egui::TopBottomPanel::bottom("status_bar").show_inside(ui, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(view.state.label())
                        .size(13.0)
                        .color(egui::Color32::from_rgb(148, 163, 184)),
                );
                ui.separator();
                ui.label(
                    egui::RichText::new(format!(
                        "Camera {} @ {}x{}",
                        view.config.camera_device,
                        view.config.frame_width,
                        view.config.frame_height
                    ))
                    .size(13.0)
                    .color(egui::Color32::from_rgb(148, 163, 184)),
                );
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("Model: {}", view.selected_model))
                        .size(13.0)
                        .color(egui::Color32::from_rgb(148, 163, 184)),
                );
            });
            ui.add_space(4.0);
        });
    }

    /// Renders the live feed in the remaining central area
    fn render_video_area(ui: &mut egui::Ui, view: &DetectionView) {
        egui::CentralPanel::default().show_inside(ui, |ui| {
            components::render_video_panel(ui, view.texture, view.state);
        });
    }
}
