//! Test utilities for the deflection simulation.
//!
//! Provides fixtures for building reproducible simulations and helpers for
//! driving them frame by frame without a real clock.

/// Fixtures for creating and driving test simulations.
pub mod fixtures {
    use crate::animation::{AnimationPhase, DeflectionSimulation, FrameQueue};
    use crate::config::SimulationConfig;

    /// Seed used by every fixture so ejecta are reproducible.
    pub const TEST_SEED: u64 = 0x0DA7;

    /// A simulation with DART defaults and a fixed ejecta seed.
    pub fn seeded_simulation() -> DeflectionSimulation {
        DeflectionSimulation::new(SimulationConfig::seeded(TEST_SEED))
    }

    /// Step with a fixed simulated `dt` until the given phase is reached.
    ///
    /// # Panics
    /// Panics if the phase is not reached within `max_ticks`.
    pub fn step_until(
        sim: &mut DeflectionSimulation,
        phase: AnimationPhase,
        dt: f64,
        max_ticks: usize,
    ) -> usize {
        for tick in 0..max_ticks {
            if sim.phase() == phase {
                return tick;
            }
            sim.step(dt);
        }
        assert_eq!(sim.phase(), phase, "phase not reached in {max_ticks} ticks");
        max_ticks
    }

    /// Deliver frames `frame_secs` of wall-clock time apart until the loop stops.
    ///
    /// Returns the number of frames delivered.
    pub fn run_to_completion(
        sim: &mut DeflectionSimulation,
        queue: &mut FrameQueue,
        frame_secs: f64,
        max_frames: usize,
    ) -> usize {
        let mut now = 0.0;
        let mut frames = 0;
        while let Some(handle) = queue.take_due() {
            sim.on_frame(handle, now, queue);
            now += frame_secs;
            frames += 1;
            if frames >= max_frames {
                break;
            }
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures;
    use crate::animation::{AnimationPhase, FrameQueue, RunStatus};

    #[test]
    fn test_seeded_simulation_is_ready() {
        let sim = fixtures::seeded_simulation();
        assert_eq!(sim.status(), RunStatus::Ready);
        assert_eq!(sim.phase(), AnimationPhase::Initial);
    }

    #[test]
    fn test_run_to_completion_terminates() {
        let mut sim = fixtures::seeded_simulation();
        let mut queue = FrameQueue::default();
        sim.run(&mut queue);

        let frames = fixtures::run_to_completion(&mut sim, &mut queue, 1.0 / 60.0, 10_000);

        assert!(frames < 10_000);
        assert!(queue.is_idle());
        assert_eq!(sim.status(), RunStatus::Finished);
    }
}
