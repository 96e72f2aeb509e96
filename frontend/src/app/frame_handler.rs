//! Frame Handler
//!
//! Consumes packets from the frame channel and turns them into GUI
//! state: the video texture, the FPS / object readouts, and detection
//! log lines. One packet per display tick; the channel's drop-oldest
//! policy keeps the backlog at two frames at most.

use super::state::App;
use crate::logic::utils::rgb_to_color_image;
use egui::TextureOptions;

impl App {
    /// Polls the frame channel once. An empty channel is the normal
    /// case, not an error.
    pub(super) fn poll_frame(&mut self, ctx: &egui::Context) {
        let Some(packet) = self.session.channel().try_recv() else {
            return;
        };

        if packet.width() > 0 && packet.height() > 0 {
            let image = rgb_to_color_image(packet.width(), packet.height(), packet.rgb_pixels());

            match &mut self.video_texture {
                Some(texture) => texture.set(image, TextureOptions::LINEAR),
                None => {
                    self.video_texture =
                        Some(ctx.load_texture("live_feed", image, TextureOptions::LINEAR));
                }
            }
        }

        self.current_fps = packet.fps;
        self.object_count = packet.detections.len();

        if !packet.detections.is_empty() {
            let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
            self.detection_log.record(&timestamp, &packet.detections);
        }

        // Retained so a screenshot can save the annotated frame
        self.last_packet = Some(packet);
    }
}
