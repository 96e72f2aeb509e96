//! The public logger handle.

use crate::error::Result;
use crate::level::LogLevel;
use crate::record::Record;
use crate::writer;
use std::path::PathBuf;
use std::sync::mpsc::{Sender, channel};

/// Cloneable, non-blocking logger.
///
/// All clones (including per-component ones) share a single writer
/// thread, so one log file stays ordered no matter how many threads
/// log into it.
///
/// # Examples
///
/// ```
/// use logging::{Logger, LogLevel};
///
/// let logger = Logger::new("app.log".into(), LogLevel::Info).unwrap();
/// let camera_log = logger.for_component("Camera");
/// camera_log.info("device opened");
/// ```
#[derive(Clone)]
pub struct Logger {
    sender: Sender<Record>,
    level: LogLevel,
    component: String,
    echo_to_console: bool,
}

impl Logger {
    /// Creates a logger writing to `log_path`, spawning the writer thread.
    ///
    /// # Errors
    ///
    /// Fails if the log file cannot be created or opened.
    pub fn new(log_path: PathBuf, level: LogLevel) -> Result<Self> {
        let (sender, receiver) = channel();
        writer::spawn(&log_path, receiver)?;
        Ok(Logger {
            sender,
            level,
            component: "App".to_string(),
            echo_to_console: false,
        })
    }

    /// Returns a clone tagged with a different component name.
    /// Shares the writer thread and level of `self`.
    pub fn for_component(&self, component: &str) -> Self {
        let mut clone = self.clone();
        clone.component = component.to_string();
        clone
    }

    /// Enables or disables echoing records to stdout.
    pub fn with_console_echo(mut self, echo: bool) -> Self {
        self.echo_to_console = echo;
        self
    }

    /// Logs a debug message.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Logs an info message.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs a warning.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs an error. Always recorded.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }

        let record = Record::new(level, &self.component, message);
        if self.echo_to_console {
            print!("{}", record.render());
        }
        let _ = self.sender.send(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    fn wait_for_writer() {
        thread::sleep(Duration::from_millis(80));
    }

    #[test]
    fn test_writes_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        let logger = Logger::new(path.clone(), LogLevel::Debug).unwrap();
        logger.info("session started");
        wait_for_writer();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("session started"));
    }

    #[test]
    fn test_level_filtering() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        let logger = Logger::new(path.clone(), LogLevel::Warn).unwrap();
        logger.debug("too quiet");
        logger.info("still too quiet");
        logger.warn("loud enough");
        wait_for_writer();

        let content = fs::read_to_string(path).unwrap();
        assert!(!content.contains("too quiet"));
        assert!(content.contains("loud enough"));
    }

    #[test]
    fn test_component_clones_share_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        let logger = Logger::new(path.clone(), LogLevel::Info).unwrap();
        let capture_log = logger.for_component("Capture");

        logger.info("from app");
        capture_log.info("from capture");
        wait_for_writer();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("[App] from app"));
        assert!(content.contains("[Capture] from capture"));
    }

    #[test]
    fn test_clone_across_threads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        let logger = Logger::new(path.clone(), LogLevel::Info).unwrap();
        let worker_log = logger.for_component("Worker");

        let handle = thread::spawn(move || {
            worker_log.info("hello from thread");
        });
        handle.join().unwrap();
        wait_for_writer();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("hello from thread"));
    }
}
