//! Models Module

mod detection_log;

pub use detection_log::DetectionLog;
