use std::time::Duration;

use crate::constants::{DEFAULT_MAX_STEPS_PER_FRAME, DEFAULT_TICK, MAX_FRAME_DT, MIN_TICK};

/// Fixed-timestep accumulator.
///
/// Feeds variable frame deltas in and hands out a whole number of fixed ticks, so the same
/// input sequence always produces the same trajectory regardless of frame rate. Time is kept
/// in whole nanoseconds, so even very short frames keep adding up.
#[derive(Clone, Debug)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
    max_steps: u32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(DEFAULT_TICK)
    }
}

impl FixedTimestep {
    /// Steps shorter than `MIN_TICK` (including zero) are raised to it.
    pub fn new(step: Duration) -> Self {
        if step < MIN_TICK {
            log::warn!("fixed timestep: step {step:?} raised to {MIN_TICK:?}");
        }

        Self {
            step: step.max(MIN_TICK),
            accumulator: Duration::ZERO,
            max_steps: DEFAULT_MAX_STEPS_PER_FRAME,
        }
    }

    /// Tick rate in Hz.
    pub fn from_hz(hz: u32) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / f64::from(hz.max(1))))
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Fixed tick duration in seconds.
    #[inline]
    pub fn dt(&self) -> f32 {
        self.step.as_secs_f32()
    }

    /// Fraction of a tick left in the accumulator, for render interpolation.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / self.step.as_secs_f32()
    }

    /// Add a frame delta in seconds and return how many fixed ticks to run now.
    ///
    /// Negative and NaN deltas count as zero.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let secs = if frame_dt > 0.0 {
            frame_dt.min(MAX_FRAME_DT.as_secs_f32())
        } else {
            0.0
        };
        self.advance_by(Duration::from_secs_f32(secs))
    }

    /// Add a frame duration and return how many fixed ticks to run now.
    ///
    /// The frame is clamped to `MAX_FRAME_DT`. If more than `max_steps` ticks are due the
    /// excess is dropped rather than simulated.
    pub fn advance_by(&mut self, frame: Duration) -> u32 {
        self.accumulator += frame.min(MAX_FRAME_DT);

        let mut steps = 0;
        while self.accumulator >= self.step {
            if steps == self.max_steps {
                let step_ns = self.step.as_nanos();
                let behind_ns = self.accumulator.as_nanos();
                log::warn!(
                    "fixed timestep: dropping {} ticks behind schedule",
                    behind_ns / step_ns
                );
                // The remainder is below one step, which always fits in u64 nanoseconds.
                self.accumulator = Duration::from_nanos((behind_ns % step_ns) as u64);
                break;
            }
            self.accumulator -= self.step;
            steps += 1;
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_ticks_are_handed_out_and_remainder_is_kept() {
        // 64 Hz keeps every value below exactly representable.
        let mut timestep = FixedTimestep::from_hz(64);

        assert_eq!(timestep.advance(2.5 / 64.0), 2);
        assert!((timestep.alpha() - 0.5).abs() < 1.0e-5);
        assert_eq!(timestep.advance(0.5 / 64.0), 1);
        assert!(timestep.alpha() < 1.0e-5);
    }

    #[test]
    fn small_frames_accumulate() {
        let mut timestep = FixedTimestep::from_hz(50);
        let total: u32 = (0..40).map(|_| timestep.advance(0.005)).sum();
        // 40 * 5ms = 200ms = 10 ticks.
        assert_eq!(total, 10);
    }

    #[test]
    fn very_short_frames_still_reach_a_tick() {
        let mut timestep = FixedTimestep::from_hz(60);
        let frame = Duration::from_nanos(10);

        // 2M * 10ns = 20ms, one 16.67ms tick with 3.33ms left over.
        let total: u32 = (0..2_000_000).map(|_| timestep.advance_by(frame)).sum();
        assert_eq!(total, 1);
        assert!((timestep.alpha() - 0.2).abs() < 1.0e-3);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut timestep = FixedTimestep::from_hz(1000).with_max_steps(4);

        assert_eq!(timestep.advance(5.0), 4);
        assert!(timestep.alpha() < 1.0);
    }

    #[test]
    fn zero_step_is_raised_to_the_minimum_tick() {
        let mut timestep = FixedTimestep::new(Duration::ZERO).with_max_steps(16);
        assert_eq!(timestep.dt(), MIN_TICK.as_secs_f32());
        assert_eq!(timestep.advance_by(Duration::ZERO), 0);

        // 1ms of frame at 100us per tick.
        assert_eq!(timestep.advance_by(Duration::from_millis(1)), 10);
        assert_eq!(timestep.advance_by(Duration::ZERO), 0);
        assert_eq!(timestep.alpha(), 0.0);
    }

    #[test]
    fn negative_and_nan_frame_deltas_run_nothing() {
        let mut timestep = FixedTimestep::default();
        assert_eq!(timestep.advance(-1.0), 0);
        assert_eq!(timestep.advance(f32::NAN), 0);
        assert_eq!(timestep.alpha(), 0.0);
    }
}
