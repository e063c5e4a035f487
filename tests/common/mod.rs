//! Common test utilities for integration tests.

#![allow(dead_code)]

use deflecting::animation::{AnimationPhase, DeflectionSimulation, FrameQueue, TickOutcome};
use deflecting::config::SimulationConfig;
use deflecting::params::SimulationParameters;

/// Seed shared by the integration tests.
pub const SEED: u64 = 0x0DA7;

/// Simulated seconds per tick at the default speed and 60 frames/s.
pub const DEFAULT_TICK: f64 = 5.0 / 60.0;

/// A simulation with DART defaults and a fixed ejecta seed.
pub fn seeded_simulation() -> DeflectionSimulation {
    DeflectionSimulation::new(SimulationConfig::seeded(SEED))
}

/// A seeded simulation starting from custom parameters.
pub fn simulation_with(params: SimulationParameters) -> DeflectionSimulation {
    let config = SimulationConfig {
        defaults: params,
        ..SimulationConfig::seeded(SEED)
    };
    DeflectionSimulation::new(config)
}

/// Start a run and step it with a fixed `dt` until it finishes.
///
/// Returns the phase observed after every tick.
pub fn run_fixed_dt(
    sim: &mut DeflectionSimulation,
    dt: f64,
    max_ticks: usize,
) -> Vec<AnimationPhase> {
    let mut queue = FrameQueue::default();
    sim.run(&mut queue);

    let mut phases = Vec::new();
    for _ in 0..max_ticks {
        let outcome = sim.step(dt);
        phases.push(sim.phase());
        if outcome == TickOutcome::Finished {
            break;
        }
    }
    phases
}

/// Collapse consecutive duplicates.
pub fn distinct_in_order(phases: &[AnimationPhase]) -> Vec<AnimationPhase> {
    let mut out: Vec<AnimationPhase> = Vec::new();
    for &phase in phases {
        if out.last() != Some(&phase) {
            out.push(phase);
        }
    }
    out
}
