//! Detection Log
//!
//! Rolling text log of detection results shown in the side panel.
//! Capped so a long-running session cannot grow the GUI state without
//! bound: reaching the cap prunes the oldest block of lines at once,
//! which is much cheaper than trimming one line per frame.

use std::collections::VecDeque;
use vision::Detection;

/// Hard cap on stored lines.
pub const MAX_LOG_LINES: usize = 300;
/// How many of the oldest lines are pruned when the cap is reached.
const PRUNE_LINES: usize = 100;

/// Bounded detection log.
pub struct DetectionLog {
    lines: VecDeque<String>,
}

impl DetectionLog {
    pub fn new() -> Self {
        Self {
            lines: VecDeque::with_capacity(MAX_LOG_LINES),
        }
    }

    /// Appends one line, pruning the oldest 100 when the log is full.
    pub fn push(&mut self, line: String) {
        if self.lines.len() >= MAX_LOG_LINES {
            self.lines.drain(..PRUNE_LINES);
        }
        self.lines.push_back(line);
    }

    /// Appends a `[HH:MM:SS]` header line, then one indented
    /// `label: NN.NN%` line per detection.
    pub fn record(&mut self, timestamp: &str, detections: &[Detection]) {
        if detections.is_empty() {
            return;
        }

        self.push(format!("[{}]", timestamp));
        for detection in detections {
            self.push(format!(
                "  {}: {:.2}%",
                detection.label,
                detection.confidence * 100.0
            ));
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Default for DetectionLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(count: usize) -> DetectionLog {
        let mut log = DetectionLog::new();
        for i in 0..count {
            log.push(format!("line {}", i));
        }
        log
    }

    #[test]
    fn test_stays_below_cap() {
        let log = filled(MAX_LOG_LINES);
        assert_eq!(log.len(), MAX_LOG_LINES);
    }

    #[test]
    fn test_cap_prunes_oldest_hundred() {
        let log = filled(MAX_LOG_LINES + 1);

        // 300 lines hit the cap, the oldest 100 go, line 301 lands
        assert_eq!(log.len(), MAX_LOG_LINES - PRUNE_LINES + 1);
        assert_eq!(log.lines().next(), Some("line 100"));
        assert_eq!(log.lines().last(), Some("line 300"));
    }

    #[test]
    fn test_never_exceeds_cap() {
        let log = filled(1000);
        assert!(log.len() <= MAX_LOG_LINES);
    }

    #[test]
    fn test_record_formats_detections() {
        use vision::detector::BoundingBox;

        let mut log = DetectionLog::new();
        let detections = vec![
            Detection {
                label: "person".to_string(),
                confidence: 0.87,
                bbox: BoundingBox::new(0, 0, 10, 10),
                class_id: 0,
            },
            Detection {
                label: "dog".to_string(),
                confidence: 0.505,
                bbox: BoundingBox::new(5, 5, 20, 20),
                class_id: 16,
            },
        ];

        log.record("12:30:01", &detections);

        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines, vec!["[12:30:01]", "  person: 87.00%", "  dog: 50.50%"]);
    }

    #[test]
    fn test_record_without_detections_writes_nothing() {
        let mut log = DetectionLog::new();
        log.record("12:30:01", &[]);
        assert!(log.is_empty());
    }

    #[test]
    fn test_clear_empties_log() {
        let mut log = filled(10);
        log.clear();
        assert!(log.is_empty());
    }
}
