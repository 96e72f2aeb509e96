//! Video Panel
//!
//! Renders the annotated live feed, or a placeholder when no frame is
//! available.

use crate::logic::SessionState;
use egui::{Color32, FontId, RichText, TextureHandle};

/// Renders the live feed area
pub fn render_video_panel(ui: &mut egui::Ui, texture: Option<&TextureHandle>, state: SessionState) {
    // The feed stays blank while stopped, even if an old texture exists
    if state == SessionState::Stopped {
        render_placeholder(ui, "Press Start to begin detection");
        return;
    }

    match texture {
        Some(texture) => {
            let available = ui.available_size();
            let size = fit_preserving_aspect(texture.size_vec2(), available);

            ui.centered_and_justified(|ui| {
                ui.image((texture.id(), size));
            });
        }
        None => render_placeholder(ui, "Waiting for first frame..."),
    }
}

/// Scales `frame` down (or up) to fit `bounds` without distortion
fn fit_preserving_aspect(frame: egui::Vec2, bounds: egui::Vec2) -> egui::Vec2 {
    if frame.x <= 0.0 || frame.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.x / frame.x).min(bounds.y / frame.y);
    frame * scale
}

fn render_placeholder(ui: &mut egui::Ui, message: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            RichText::new(message)
                .font(FontId::proportional(22.0))
                .color(Color32::from_rgb(100, 116, 139)),
        );
    });
}
