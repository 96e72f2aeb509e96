//! Smoothed frames-per-second estimation.

use std::time::{Duration, Instant};

/// Rolling FPS counter, recomputed once per elapsed second.
///
/// Intermediate ticks return the last computed value, so the readout
/// is stable instead of jittering per frame.
pub struct FpsMeter {
    frames: u32,
    window_start: Instant,
    fps: f64,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self {
            frames: 0,
            window_start: Instant::now(),
            fps: 0.0,
        }
    }

    /// Clears counters; called when a new model is loaded.
    pub fn reset(&mut self) {
        self.frames = 0;
        self.window_start = Instant::now();
        self.fps = 0.0;
    }

    /// Counts one frame and returns the current smoothed estimate.
    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f64 {
        self.frames += 1;
        let elapsed = now.duration_since(self.window_start);
        if elapsed >= Duration::from_secs(1) {
            self.fps = f64::from(self.frames) / elapsed.as_secs_f64();
            self.frames = 0;
            self.window_start = now;
        }
        self.fps
    }

    /// The last computed estimate without counting a frame.
    pub fn current(&self) -> f64 {
        self.fps
    }
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let meter = FpsMeter::new();
        assert_eq!(meter.current(), 0.0);
    }

    #[test]
    fn test_no_update_within_first_second() {
        let mut meter = FpsMeter::new();
        let start = meter.window_start;
        for i in 1..=5 {
            let fps = meter.tick_at(start + Duration::from_millis(i * 100));
            assert_eq!(fps, 0.0);
        }
    }

    #[test]
    fn test_computes_after_one_second() {
        let mut meter = FpsMeter::new();
        let start = meter.window_start;

        meter.tick_at(start + Duration::from_millis(500));
        let fps = meter.tick_at(start + Duration::from_secs(1));
        assert!((fps - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_estimate_is_held_between_windows() {
        let mut meter = FpsMeter::new();
        let start = meter.window_start;

        meter.tick_at(start + Duration::from_millis(250));
        meter.tick_at(start + Duration::from_secs(1));
        let held = meter.tick_at(start + Duration::from_millis(1100));
        assert!((held - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_reset_clears_estimate() {
        let mut meter = FpsMeter::new();
        let start = meter.window_start;
        meter.tick_at(start + Duration::from_secs(2));

        meter.reset();
        assert_eq!(meter.current(), 0.0);
    }
}
