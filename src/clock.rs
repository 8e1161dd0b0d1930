//! Fixed-step animation clock.
//!
//! The clock advances by a fixed step once per displayed frame rather than
//! tracking wall time, so a slow frame still advances the animation by one
//! step. This decouples animation speed from frame rate on purpose; it is
//! not frame-rate independence.

/// Step added to the clock each tick.
pub const FIXED_STEP: f32 = 0.05;

/// Factor applied to the accumulated clock before it reaches the shader.
const TIME_SCALE: f32 = 0.5;

/// Frame clock with exactly two states: running and stopped.
#[derive(Debug, Clone)]
pub struct FrameClock {
    elapsed: f32,
    step: f32,
    frame_count: u64,
    running: bool,
}

impl FrameClock {
    /// Create a running clock at zero with the default step.
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            step: FIXED_STEP,
            frame_count: 0,
            running: true,
        }
    }

    /// Advance by one fixed step. No-op while stopped.
    ///
    /// Returns `true` if the clock advanced.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += self.step;
        self.frame_count += 1;
        true
    }

    /// Accumulated clock value.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Value pushed into the shader time uniform (`elapsed * 0.5`).
    #[inline]
    pub fn shader_time(&self) -> f32 {
        self.elapsed * TIME_SCALE
    }

    /// Ticks taken since creation.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Whether the clock is currently advancing.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the clock. Further ticks do nothing until [`FrameClock::start`].
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Resume ticking from the current value.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Toggle between running and stopped.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clock() {
        let clock = FrameClock::new();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.frame(), 0);
        assert!(clock.is_running());
    }

    #[test]
    fn test_fixed_step_advance() {
        let mut clock = FrameClock::new();
        for _ in 0..10 {
            assert!(clock.tick());
        }
        assert_eq!(clock.frame(), 10);
        assert!((clock.elapsed() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_shader_time_after_k_ticks() {
        let mut clock = FrameClock::new();
        let k = 37;
        for _ in 0..k {
            clock.tick();
        }
        let expected = (FIXED_STEP * k as f32) * 0.5;
        assert!((clock.shader_time() - expected).abs() < 1e-5);
    }

    #[test]
    fn test_stop_freezes_clock() {
        let mut clock = FrameClock::new();
        clock.tick();
        let frozen = clock.elapsed();

        clock.stop();
        assert!(!clock.is_running());
        assert!(!clock.tick());
        assert!(!clock.tick());
        assert_eq!(clock.elapsed(), frozen);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_restart_resumes_from_frozen_value() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.stop();
        clock.tick();
        clock.start();
        assert!(clock.tick());
        assert!((clock.elapsed() - 2.0 * FIXED_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_toggle() {
        let mut clock = FrameClock::new();
        clock.toggle();
        assert!(!clock.is_running());
        clock.toggle();
        assert!(clock.is_running());
    }
}
