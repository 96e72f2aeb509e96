//! Shared confidence threshold.

use std::sync::atomic::{AtomicU32, Ordering};

/// Confidence threshold shared between the GUI thread (writer) and
/// the capture thread (reader).
///
/// Stored as f32 bits in an `AtomicU32` with relaxed ordering: the
/// value is a single scalar with no cross-field invariant, so a
/// slightly stale read is fine. Threshold changes apply "soon", not
/// atomically with in-flight frames.
pub struct ConfidenceThreshold(AtomicU32);

impl ConfidenceThreshold {
    pub const MIN: f32 = 0.05;
    pub const MAX: f32 = 0.99;

    /// Creates a threshold, clamping the initial value to [0.05, 0.99].
    pub fn new(initial: f32) -> Self {
        Self(AtomicU32::new(Self::clamp(initial).to_bits()))
    }

    /// Stores a new threshold, clamped to [0.05, 0.99].
    pub fn set(&self, value: f32) {
        self.0.store(Self::clamp(value).to_bits(), Ordering::Relaxed);
    }

    /// Reads the current threshold.
    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    fn clamp(value: f32) -> f32 {
        if value.is_nan() {
            return Self::MIN;
        }
        value.clamp(Self::MIN, Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_in_range_value_is_kept() {
        let threshold = ConfidenceThreshold::new(0.50);
        assert_eq!(threshold.get(), 0.50);
    }

    #[test]
    fn test_high_value_clamps_to_max() {
        let threshold = ConfidenceThreshold::new(0.50);
        threshold.set(1.5);
        assert_eq!(threshold.get(), 0.99);
    }

    #[test]
    fn test_low_value_clamps_to_min() {
        let threshold = ConfidenceThreshold::new(0.50);
        threshold.set(-1.0);
        assert_eq!(threshold.get(), 0.05);
    }

    #[test]
    fn test_nan_falls_back_to_min() {
        let threshold = ConfidenceThreshold::new(f32::NAN);
        assert_eq!(threshold.get(), 0.05);
    }

    #[test]
    fn test_visible_across_threads() {
        let threshold = Arc::new(ConfidenceThreshold::new(0.50));
        let writer = Arc::clone(&threshold);

        thread::spawn(move || writer.set(0.85)).join().unwrap();
        assert_eq!(threshold.get(), 0.85);
    }
}
