//! Control Panel
//!
//! Status indicator, model selector, confidence slider, session
//! buttons and the FPS / object-count readouts.

use crate::components::ActionButton;
use crate::events::UiCommand;
use crate::logic::SessionState;
use crate::pages::detection::DetectionView;
use egui::{Color32, RichText};
use vision::ModelVariant;

/// Renders the full control column; returns at most one command
pub fn render_control_panel(ui: &mut egui::Ui, view: &DetectionView) -> Option<UiCommand> {
    let mut command = None;

    ui.add_space(16.0);
    ui.heading("Detection Controls");
    ui.add_space(12.0);

    render_status(ui, view.state);
    ui.add_space(16.0);

    if let Some(cmd) = render_model_selector(ui, view) {
        command = Some(cmd);
    }
    ui.add_space(12.0);

    if let Some(cmd) = render_confidence_slider(ui, view.confidence) {
        command = Some(cmd);
    }
    ui.add_space(16.0);

    if let Some(cmd) = render_session_buttons(ui, view.state) {
        command = Some(cmd);
    }
    ui.add_space(16.0);

    render_readouts(ui, view);

    command
}

/// Renders the state dot and label
fn render_status(ui: &mut egui::Ui, state: SessionState) {
    let color = match state {
        SessionState::Stopped => Color32::from_rgb(148, 163, 184),
        SessionState::Starting => Color32::from_rgb(245, 158, 11),
        SessionState::Running => Color32::from_rgb(34, 197, 94),
        SessionState::Stopping => Color32::from_rgb(249, 115, 22),
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new("●").size(18.0).color(color));
        ui.label(
            RichText::new(state.label())
                .size(16.0)
                .color(Color32::WHITE),
        );
    });
}

/// Renders the model variant selector; disabled unless stopped
fn render_model_selector(ui: &mut egui::Ui, view: &DetectionView) -> Option<UiCommand> {
    let mut command = None;

    ui.add_enabled_ui(view.state == SessionState::Stopped, |ui| {
        egui::ComboBox::from_label("Model")
            .selected_text(view.selected_model.identifier())
            .show_ui(ui, |ui| {
                for variant in ModelVariant::ALL {
                    let selected = variant == view.selected_model;
                    if ui.selectable_label(selected, variant.identifier()).clicked() && !selected {
                        command = Some(UiCommand::SelectModel(variant));
                    }
                }
            });
    });

    command
}

/// Renders the confidence threshold slider (0.05 to 0.95, step 0.05)
fn render_confidence_slider(ui: &mut egui::Ui, confidence: f32) -> Option<UiCommand> {
    let mut value = confidence;
    let response = ui.add(
        egui::Slider::new(&mut value, 0.05..=0.95)
            .step_by(0.05)
            .text("Confidence"),
    );

    if response.changed() {
        Some(UiCommand::SetConfidence(value))
    } else {
        None
    }
}

/// Renders Start / Stop / Screenshot with state-dependent enablement
fn render_session_buttons(ui: &mut egui::Ui, state: SessionState) -> Option<UiCommand> {
    let mut command = None;

    if ActionButton::primary("▶ Start Detection")
        .enabled(state == SessionState::Stopped)
        .show(ui)
        .clicked()
    {
        command = Some(UiCommand::StartDetection);
    }
    ui.add_space(8.0);

    if ActionButton::danger("■ Stop Detection")
        .enabled(state == SessionState::Running)
        .show(ui)
        .clicked()
    {
        command = Some(UiCommand::StopDetection);
    }
    ui.add_space(8.0);

    if ActionButton::secondary("📷 Screenshot")
        .enabled(state == SessionState::Running)
        .show(ui)
        .clicked()
    {
        command = Some(UiCommand::TakeScreenshot);
    }

    command
}

/// Renders the FPS and object-count readouts
fn render_readouts(ui: &mut egui::Ui, view: &DetectionView) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("FPS: {:.1}", view.fps))
                .size(15.0)
                .color(Color32::from_rgb(50, 255, 100)),
        );
        ui.add_space(20.0);
        ui.label(
            RichText::new(format!("Objects: {}", view.object_count))
                .size(15.0)
                .color(Color32::from_rgb(96, 165, 250)),
        );
    });
}
