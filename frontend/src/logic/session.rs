//! Session Lifecycle
//!
//! Owns the capture worker thread and the shared state crossing the
//! thread boundary (frame channel, confidence threshold, running
//! flag). The GUI drives the state machine:
//!
//! ```text
//! Stopped -> Starting -> Running -> Stopping -> Stopped
//!               \-> Stopped (model load or camera open failed)
//! ```

use crate::logic::run_capture_loop;
use logging::Logger;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use vision::{ConfidenceThreshold, DISPLAY_QUEUE_DEPTH, Detector, FrameChannel, FrameSource};

/// How long `stop` waits for the worker before detaching it.
const JOIN_DEADLINE: Duration = Duration::from_secs(3);
const JOIN_POLL: Duration = Duration::from_millis(10);

/// Lifecycle state of the detection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Stopped,
    Starting,
    Running,
    Stopping,
}

impl SessionState {
    /// Status text shown next to the state dot.
    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Stopped => "Stopped",
            SessionState::Starting => "Starting...",
            SessionState::Running => "Running",
            SessionState::Stopping => "Stopping...",
        }
    }
}

/// One detection session: worker thread plus shared pipeline state.
pub struct CaptureSession {
    state: SessionState,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
    channel: Arc<FrameChannel>,
    threshold: Arc<ConfidenceThreshold>,
    logger: Logger,
}

impl CaptureSession {
    pub fn new(initial_threshold: f32, logger: Logger) -> Self {
        Self {
            state: SessionState::Stopped,
            running: Arc::new(AtomicBool::new(false)),
            worker: None,
            channel: Arc::new(FrameChannel::new(DISPLAY_QUEUE_DEPTH)),
            threshold: Arc::new(ConfidenceThreshold::new(initial_threshold)),
            logger,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// The display queue the GUI polls each frame.
    pub fn channel(&self) -> &FrameChannel {
        &self.channel
    }

    /// The confidence threshold shared with the worker.
    pub fn threshold(&self) -> &ConfidenceThreshold {
        &self.threshold
    }

    /// Moves `Stopped -> Starting`. Returns false (and does nothing)
    /// in any other state.
    pub fn begin_start(&mut self) -> bool {
        if self.state != SessionState::Stopped {
            return false;
        }
        self.state = SessionState::Starting;
        true
    }

    /// Reverts a failed start (`Starting -> Stopped`). No worker was
    /// spawned, so there is nothing to join.
    pub fn abort_start(&mut self) {
        self.state = SessionState::Stopped;
    }

    /// Spawns the capture worker and moves to `Running`. The source
    /// (camera) is moved into the thread and released when the loop
    /// exits.
    pub fn spawn<S, D>(&mut self, source: S, detector: D)
    where
        S: FrameSource + Send + 'static,
        D: Detector + 'static,
    {
        self.channel.clear();
        self.running.store(true, Ordering::SeqCst);

        let channel = Arc::clone(&self.channel);
        let threshold = Arc::clone(&self.threshold);
        let running = Arc::clone(&self.running);
        let worker_logger = self.logger.for_component("Capture");

        self.worker = Some(std::thread::spawn(move || {
            run_capture_loop(source, detector, channel, threshold, running, worker_logger);
        }));

        self.state = SessionState::Running;
        self.logger.info("Capture worker spawned, session running");
    }

    /// Stops the session cooperatively: clears the running flag, waits
    /// up to 3 seconds for the worker, drains the channel. Calling
    /// stop on a stopped session is a no-op.
    pub fn stop(&mut self) {
        if self.state == SessionState::Stopped {
            return;
        }

        self.state = SessionState::Stopping;
        self.running.store(false, Ordering::SeqCst);

        if let Some(worker) = self.worker.take() {
            let deadline = Instant::now() + JOIN_DEADLINE;
            while !worker.is_finished() && Instant::now() < deadline {
                std::thread::sleep(JOIN_POLL);
            }

            if worker.is_finished() {
                if worker.join().is_err() {
                    self.logger.warn("Capture worker panicked before joining");
                }
            } else {
                // A wedged camera read must not freeze the GUI; the
                // detached thread exits on its next flag check
                self.logger
                    .warn("Capture worker missed the stop deadline, detaching it");
            }
        }

        self.channel.clear();
        self.state = SessionState::Stopped;
        self.logger.info("Session stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::LogLevel;
    use std::sync::atomic::AtomicUsize;
    use tempfile::{TempDir, tempdir};
    use vision::{DetectionOutput, Mat};

    fn test_logger(dir: &TempDir) -> Logger {
        Logger::new(dir.path().join("test.log"), LogLevel::Debug).unwrap()
    }

    /// Produces empty frames forever; counts drops to verify the
    /// session releases it exactly once.
    struct EndlessSource {
        drops: Arc<AtomicUsize>,
    }

    impl FrameSource for EndlessSource {
        fn read_frame(&mut self) -> Option<Mat> {
            Some(Mat::default())
        }
    }

    impl Drop for EndlessSource {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Ends immediately, like a camera whose read fails.
    struct EmptySource;

    impl FrameSource for EmptySource {
        fn read_frame(&mut self) -> Option<Mat> {
            None
        }
    }

    struct NullDetector;

    impl Detector for NullDetector {
        fn detect(&mut self, frame: &Mat, _threshold: f32) -> vision::Result<DetectionOutput> {
            Ok(DetectionOutput {
                annotated: frame.clone(),
                detections: Vec::new(),
                fps: 0.0,
            })
        }
    }

    #[test]
    fn test_full_lifecycle() {
        let dir = tempdir().unwrap();
        let mut session = CaptureSession::new(0.5, test_logger(&dir));
        assert_eq!(session.state(), SessionState::Stopped);

        assert!(session.begin_start());
        assert_eq!(session.state(), SessionState::Starting);

        let drops = Arc::new(AtomicUsize::new(0));
        session.spawn(
            EndlessSource {
                drops: Arc::clone(&drops),
            },
            NullDetector,
        );
        assert_eq!(session.state(), SessionState::Running);

        // Start is refused while running
        assert!(!session.begin_start());

        session.stop();
        assert_eq!(session.state(), SessionState::Stopped);
        assert!(session.channel().is_empty());
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stop_when_stopped_is_noop() {
        let dir = tempdir().unwrap();
        let mut session = CaptureSession::new(0.5, test_logger(&dir));

        session.stop();
        session.stop();
        assert_eq!(session.state(), SessionState::Stopped);
    }

    #[test]
    fn test_aborted_start_reverts_to_stopped() {
        let dir = tempdir().unwrap();
        let mut session = CaptureSession::new(0.5, test_logger(&dir));

        assert!(session.begin_start());
        session.abort_start();
        assert_eq!(session.state(), SessionState::Stopped);

        // A failed start does not poison later attempts
        assert!(session.begin_start());
    }

    #[test]
    fn test_source_end_exits_worker_quietly() {
        let dir = tempdir().unwrap();
        let mut session = CaptureSession::new(0.5, test_logger(&dir));

        session.begin_start();
        session.spawn(EmptySource, NullDetector);

        // The worker exits on its own, but the lifecycle stays
        // user-driven until stop is requested
        assert_eq!(session.state(), SessionState::Running);

        session.stop();
        assert_eq!(session.state(), SessionState::Stopped);
    }

    #[test]
    fn test_threshold_is_shared() {
        let dir = tempdir().unwrap();
        let session = CaptureSession::new(0.5, test_logger(&dir));

        session.threshold().set(0.8);
        assert_eq!(session.threshold().get(), 0.8);
    }
}
