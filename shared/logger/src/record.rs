//! A single formatted log record.

use crate::level::LogLevel;
use chrono::Local;

/// One line of log output, timestamped at creation.
#[derive(Debug, Clone)]
pub(crate) struct Record {
    timestamp: String,
    level: LogLevel,
    component: String,
    message: String,
}

impl Record {
    pub fn new(level: LogLevel, component: &str, message: &str) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            level,
            component: component.to_string(),
            message: message.to_string(),
        }
    }

    /// Renders the record as a single line:
    /// `2025-01-01 12:00:00.000 [INFO ] [Capture] message`
    pub fn render(&self) -> String {
        format!(
            "{} [{}] [{}] {}\n",
            self.timestamp,
            self.level.tag(),
            self.component,
            self.message
        )
    }
}
