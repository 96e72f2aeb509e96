//! Snapshot Handlers
//!
//! Saves the most recent annotated frame to the working directory.

use crate::app::state::App;
use chrono::{DateTime, Local};
use std::path::PathBuf;

impl App {
    /// Saves the latest annotated frame as
    /// `detection_<YYYYMMDD_HHMMSS>.png`. Only valid while running.
    pub(in crate::app) fn handle_take_screenshot(&mut self) {
        if !self.session.is_running() {
            self.logger
                .warn("[SNAPSHOT] Screenshot requested while session not running");
            self.show_warning("Start detection before taking a screenshot".to_string());
            return;
        }

        // No frame yet: nothing to save, and nothing worth a dialog
        let Some(packet) = &self.last_packet else {
            self.logger
                .debug("[SNAPSHOT] Screenshot requested before any frame arrived");
            return;
        };

        let path = PathBuf::from(screenshot_file_name(Local::now()));
        match packet.save(&path) {
            Ok(()) => {
                self.logger
                    .info(&format!("[SNAPSHOT] Saved {}", path.display()));
                self.show_success(format!("Saved {}", path.display()));
            }
            Err(e) => {
                // A failed write does not stop the session
                self.show_error_dialog(format!(
                    "Could not save screenshot {}: {}",
                    path.display(),
                    e
                ));
            }
        }
    }
}

/// Timestamped screenshot file name, second resolution.
fn screenshot_file_name(now: DateTime<Local>) -> String {
    format!("detection_{}.png", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_screenshot_file_name() {
        let moment = Local.with_ymd_and_hms(2026, 8, 23, 14, 5, 9).unwrap();
        assert_eq!(
            screenshot_file_name(moment),
            "detection_20260823_140509.png"
        );
    }

    #[test]
    fn test_screenshot_names_sort_chronologically() {
        let earlier = Local.with_ymd_and_hms(2026, 8, 23, 9, 59, 59).unwrap();
        let later = Local.with_ymd_and_hms(2026, 8, 23, 10, 0, 0).unwrap();
        assert!(screenshot_file_name(earlier) < screenshot_file_name(later));
    }
}
