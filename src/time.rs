//! Frame clock for the impact animation.
//!
//! Converts wall-clock frame timestamps into simulated time steps.

/// Tracks the previous frame timestamp of a run.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// Forget the previous frame so the next one starts the run.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Simulated seconds elapsed since the previous frame.
    ///
    /// `now_secs` is wall-clock time in seconds and `speed` is how many
    /// simulated seconds pass per real second. The first frame after a reset
    /// yields zero, and a clock running backwards never yields a negative step.
    pub fn delta(&mut self, now_secs: f64, speed: f64) -> f64 {
        let real_dt = match self.last {
            Some(last) => (now_secs - last).max(0.0),
            None => 0.0,
        };
        self.last = Some(now_secs);
        real_dt * speed
    }
}
