//! Application State
//!
//! This module defines the main application state and initialization
//! logic. It implements the MVU (Model-View-Update) pattern's
//! Controller component.
//!
//! # MVU Loop
//!
//! The `eframe::App::update()` implementation follows this flow:
//! 1. Poll the frame channel (non-blocking)
//! 2. Render the detection page (pure function of state)
//! 3. Handle UI commands from the view (state mutations)
//! 4. Render modal error dialog / toast overlays
//! 5. Schedule the next display tick (~15 ms)
//!
//! The repaint request is unconditional: it is the presentation
//! loop's heartbeat, independent of whether a frame arrived.

use crate::components::{ErrorDialog, Toast};
use crate::config::AppConfig;
use crate::logic::CaptureSession;
use crate::models::DetectionLog;
use crate::pages::{DetectionPage, DetectionView};
use logging::Logger;
use std::time::Duration;
use vision::{FramePacket, ModelVariant};

/// Display tick period; also the frame poll cadence.
const DISPLAY_TICK: Duration = Duration::from_millis(15);

/// Initial confidence threshold shown on the slider.
const DEFAULT_CONFIDENCE: f32 = 0.5;

/// Main application state - MVU Controller
pub struct App {
    // Config
    pub(super) config: AppConfig,

    // Logger
    pub(super) logger: Logger,

    // Capture pipeline
    pub(super) session: CaptureSession,

    // Display state
    pub(super) video_texture: Option<egui::TextureHandle>,
    pub(super) last_packet: Option<FramePacket>,
    pub(super) detection_log: DetectionLog,
    pub(super) current_fps: f64,
    pub(super) object_count: usize,

    // Settings
    pub(super) selected_model: ModelVariant,
    pub(super) confidence: f32,

    // Notifications
    pub(super) error_dialog: Option<String>,
    pub(super) current_toast: Option<Toast>,
}

impl App {
    /// Create a new App instance with configuration and logger
    pub fn new() -> Self {
        // Load application configuration
        let config = AppConfig::load();

        // Initialize logger from configuration
        let logger = match Logger::new(config.log_path.clone(), config.log_level) {
            Ok(logger) => logger.for_component("Frontend"),
            Err(e) => {
                eprintln!("Failed to initialize logger: {}", e);
                std::process::exit(1);
            }
        };

        logger.info("[APP] Initializing application...");
        logger.info(&format!(
            "[APP] Configuration loaded - camera: {}, {}x{}, model: {}, log_level: {:?}",
            config.camera_device,
            config.frame_width,
            config.frame_height,
            config.default_model,
            config.log_level
        ));

        let session = CaptureSession::new(DEFAULT_CONFIDENCE, logger.clone());
        let selected_model = config.default_model;

        let app = Self {
            config,
            logger: logger.clone(),
            session,
            video_texture: None,
            last_packet: None,
            detection_log: DetectionLog::new(),
            current_fps: 0.0,
            object_count: 0,
            selected_model,
            confidence: DEFAULT_CONFIDENCE,
            error_dialog: None,
            current_toast: None,
        };

        logger.info("[APP] Application initialized successfully");
        app
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- MVU UPDATE LOOP ---

        // 1. Pull the freshest packet from the capture pipeline
        self.poll_frame(ctx);

        // 2. Render the view and collect UI commands
        let ui_command = self.render_view(ctx);

        // 3. Process UI command, unless a modal error is up
        if self.error_dialog.is_none()
            && let Some(command) = ui_command
        {
            self.handle_ui_command(command);
        }

        // 4. Render modal error dialog (if any)
        self.render_error_dialog(ctx);

        // 5. Render toast notification (if any)
        self.render_toast(ctx);

        // 6. Self-perpetuating display tick
        ctx.request_repaint_after(DISPLAY_TICK);
    }

    /// Called when the app is about to close
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.logger.info("[APP] Application shutting down...");

        // Stop the capture worker before the window goes away
        self.session.stop();

        self.logger.info("[APP] Cleanup complete, goodbye!");
    }
}

impl App {
    /// Renders the detection page and returns any UI command
    fn render_view(&mut self, ctx: &egui::Context) -> Option<crate::events::UiCommand> {
        let mut ui_command = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            let view = DetectionView {
                state: self.session.state(),
                texture: self.video_texture.as_ref(),
                fps: self.current_fps,
                object_count: self.object_count,
                selected_model: self.selected_model,
                confidence: self.confidence,
                log: &self.detection_log,
                config: &self.config,
            };

            ui_command = DetectionPage::show(ui, view);
        });

        ui_command
    }

    /// Renders the modal error dialog; dismissed with its OK button
    fn render_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.error_dialog else {
            return;
        };

        if ErrorDialog::new(message).show(ctx) {
            self.error_dialog = None;
        }
    }

    /// Renders a toast notification if one exists
    fn render_toast(&mut self, ctx: &egui::Context) {
        if let Some(toast) = &self.current_toast {
            // show() returns true if user clicked dismiss OR toast expired
            if toast.show(ctx) {
                self.current_toast = None;
            }
        }
    }

    /// Raises the modal error dialog
    pub(super) fn show_error_dialog(&mut self, message: String) {
        self.logger.error(&message);
        self.error_dialog = Some(message);
    }

    /// Shows a warning toast notification to the user
    pub(super) fn show_warning(&mut self, message: String) {
        self.current_toast = Some(Toast::warning(message));
    }

    /// Shows a success toast notification to the user
    pub(super) fn show_success(&mut self, message: String) {
        self.current_toast = Some(Toast::success(message));
    }

    /// Shows an info toast notification to the user
    pub(super) fn show_info(&mut self, message: String) {
        self.current_toast = Some(Toast::info(message));
    }
}
