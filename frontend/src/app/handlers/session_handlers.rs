//! Session Operation Handlers
//!
//! Start and stop of the detection session. A start is two fallible
//! steps (model load, camera open) before the worker is spawned;
//! either failure raises the error dialog and reverts to Stopped.

use crate::app::state::App;
use crate::logic::SessionState;
use logging::Logger;
use vision::{Camera, CameraConfig, Detector, FrameSource, ModelVariant, YoloDetector};

impl App {
    /// Starts a detection session with the selected model
    pub(in crate::app) fn handle_start_detection(&mut self) {
        self.start_session_with(
            |variant, logger| YoloDetector::load(variant, logger),
            |camera_config, logger| Camera::open(camera_config, logger),
        );
    }

    /// Start with injectable model and camera constructors, the same
    /// seam the worker loop has for its frame source. A constructor
    /// failure aborts the start: the session stays Stopped, no worker
    /// is spawned and the error dialog carries the cause.
    fn start_session_with<D, S>(
        &mut self,
        load_detector: impl FnOnce(ModelVariant, Logger) -> vision::Result<D>,
        open_camera: impl FnOnce(&CameraConfig, Logger) -> vision::Result<S>,
    ) where
        D: Detector + 'static,
        S: FrameSource + Send + 'static,
    {
        if !self.session.begin_start() {
            self.logger.warn(&format!(
                "[SESSION] Start requested in state {:?}, ignoring",
                self.session.state()
            ));
            return;
        }

        self.logger.info(&format!(
            "[SESSION] Starting detection with model '{}'",
            self.selected_model
        ));

        // Step 1: load the model
        let detector = match load_detector(
            self.selected_model,
            self.logger.for_component("Vision"),
        ) {
            Ok(detector) => detector,
            Err(e) => {
                self.session.abort_start();
                self.show_error_dialog(format!(
                    "Could not load model '{}': {}",
                    self.selected_model, e
                ));
                return;
            }
        };

        // Step 2: open the camera
        let camera_config = match CameraConfig::new(
            self.config.camera_device,
            self.config.frame_width,
            self.config.frame_height,
        ) {
            Ok(camera_config) => camera_config,
            Err(e) => {
                self.session.abort_start();
                self.show_error_dialog(format!("Invalid camera configuration: {}", e));
                return;
            }
        };

        let camera = match open_camera(&camera_config, self.logger.for_component("Camera")) {
            Ok(camera) => camera,
            Err(e) => {
                self.session.abort_start();
                self.show_error_dialog(format!(
                    "Could not open camera {}: {}",
                    self.config.camera_device, e
                ));
                return;
            }
        };

        // Fresh display state for the new session
        self.last_packet = None;
        self.current_fps = 0.0;
        self.object_count = 0;

        self.session.spawn(camera, detector);
        self.show_success("Detection started".to_string());
    }

    /// Stops the running session; stop while stopped is a no-op
    pub(in crate::app) fn handle_stop_detection(&mut self) {
        if self.session.state() == SessionState::Stopped {
            self.logger
                .debug("[SESSION] Stop requested while already stopped");
            return;
        }

        self.logger.info("[SESSION] Stopping detection session");
        self.session.stop();

        self.current_fps = 0.0;
        self.object_count = 0;
        self.show_info("Detection stopped".to_string());
    }
}
