//! Fixed-timestep frame clock
//!
//! Hosts call `frame(dt)` with the real time since the previous frame and run
//! that many simulation ticks. Leftover time carries into the next frame.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f32,
    accumulator: f32,
    /// Frames that hit the substep cap and dropped time
    dropped_frames: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FrameClock {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            dropped_frames: 0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Number of fixed ticks to run for a frame that took `dt` seconds
    pub fn frame(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.accumulator += dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            substeps += 1;
        }

        // Spiral of death: drop whatever the cap couldn't absorb
        if self.accumulator >= self.step {
            self.accumulator = 0.0;
            self.dropped_frames += 1;
            log::debug!("Frame clock dropped time after {} substeps", substeps);
        }

        substeps
    }

    /// Fraction of a step carried into the next frame (for interpolation)
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    pub fn dropped_frames(&self) -> u64 {
        self.dropped_frames
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_frames() {
        // Power-of-two step keeps the arithmetic exact
        let mut clock = FrameClock::new(1.0 / 64.0);
        assert_eq!(clock.frame(2.5 / 64.0), 2);
        assert_eq!(clock.frame(0.5 / 64.0), 1);
        assert_eq!(clock.frame(0.25 / 64.0), 0);
        assert_eq!(clock.alpha(), 0.25);
    }

    #[test]
    fn test_substep_cap() {
        let mut clock = FrameClock::new(0.01);
        assert_eq!(clock.frame(0.2), MAX_SUBSTEPS);
        assert_eq!(clock.dropped_frames(), 1);
        assert!(clock.alpha() < 1.0);
    }

    #[test]
    fn test_bad_deltas_ignored() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.frame(-1.0), 0);
        assert_eq!(clock.frame(f32::NAN), 0);
        assert_eq!(clock.frame(0.0), 0);
    }
}
