//! Impact animation: phased state machine, frame scheduling, and the Bevy
//! systems that drive it.
//!
//! Bevy's `Update` schedule plays the role of the host frame callback: each
//! frame [`drive_frames`] delivers the pending [`FrameHandle`] (if any) to the
//! controller with the current wall-clock time.

mod controller;
mod scheduler;
mod state;

use bevy::prelude::*;
use bevy::time::Real;

pub use controller::{DeflectionSimulation, SimulationIntent};
pub use scheduler::{FrameHandle, FrameQueue, FrameScheduler};
pub use state::{
    AnimationPhase, AnimationState, FrameSnapshot, RunStatus, TickOutcome, impact_point,
};

use crate::config::SimulationConfig;

/// System set containing intent handling and frame delivery.
///
/// Rendering and UI read the simulation after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// Plugin providing the deflection simulation and its frame loop.
///
/// Uses the [`SimulationConfig`] resource if one was inserted before the
/// plugin, otherwise the defaults.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<SimulationConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(DeflectionSimulation::new(config.clone()))
            .insert_resource(config)
            .init_resource::<FrameQueue>()
            .add_message::<SimulationIntent>()
            .add_systems(
                Update,
                (apply_intents, drive_frames).chain().in_set(SimulationSet),
            );
    }
}

/// Apply queued user intents to the simulation.
fn apply_intents(
    mut intents: MessageReader<SimulationIntent>,
    simulation: Option<ResMut<DeflectionSimulation>>,
    queue: Option<ResMut<FrameQueue>>,
) {
    let (Some(mut simulation), Some(mut queue)) = (simulation, queue) else {
        let dropped = intents.read().count();
        if dropped > 0 {
            warn!("Deflection simulation not initialized, dropped {dropped} intents");
        }
        return;
    };

    for intent in intents.read() {
        if let Err(err) = simulation.handle_intent(*intent, &mut *queue) {
            warn!("Rejected parameter edit: {err}");
        }
    }
}

/// Deliver the pending frame, if any, to the simulation.
fn drive_frames(
    time: Res<Time<Real>>,
    simulation: Option<ResMut<DeflectionSimulation>>,
    queue: Option<ResMut<FrameQueue>>,
) {
    let (Some(mut simulation), Some(mut queue)) = (simulation, queue) else {
        return;
    };

    let Some(handle) = queue.take_due() else {
        return;
    };

    simulation.on_frame(handle, time.elapsed_secs_f64(), &mut *queue);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterEdit;
    use crate::test_utils::fixtures;

    #[test]
    fn test_run_schedules_one_frame() {
        let mut sim = fixtures::seeded_simulation();
        let mut queue = FrameQueue::default();

        sim.run(&mut queue);

        assert_eq!(sim.status(), RunStatus::Running);
        assert_eq!(sim.pending_frame(), queue.pending());
        assert!(queue.pending().is_some());
    }

    #[test]
    fn test_first_frame_has_zero_dt() {
        let mut sim = fixtures::seeded_simulation();
        let mut queue = FrameQueue::default();
        sim.run(&mut queue);
        let start = sim.state().impactor_distance;

        let handle = queue.take_due().unwrap();
        assert!(sim.on_frame(handle, 42.0, &mut queue));
        assert_eq!(sim.state().impactor_distance, start);

        // Next frame 0.1 s later at speed 5: 0.5 simulated s × 100 units/s
        let handle = queue.take_due().unwrap();
        sim.on_frame(handle, 42.1, &mut queue);
        approx::assert_relative_eq!(
            sim.state().impactor_distance,
            start - 50.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_stale_frame_is_ignored() {
        let mut sim = fixtures::seeded_simulation();
        let mut queue = FrameQueue::default();
        sim.run(&mut queue);
        let stale = queue.pending().unwrap();

        // Latest intent wins: a new run cancels the old frame
        sim.run(&mut queue);
        let before = sim.state().impactor_distance;

        assert!(!sim.on_frame(stale, 1.0, &mut queue));
        assert!(!sim.on_frame(stale, 2.0, &mut queue));
        assert_eq!(sim.state().impactor_distance, before);
        assert_ne!(queue.pending(), Some(stale));
    }

    #[test]
    fn test_radius_edit_mid_run_restarts() {
        let mut sim = fixtures::seeded_simulation();
        let mut queue = FrameQueue::default();
        sim.run(&mut queue);
        fixtures::step_until(&mut sim, AnimationPhase::Shrinking, 1.0 / 12.0, 500);
        let old_frame = queue.pending().unwrap();

        sim.edit(ParameterEdit::OrbitRadius(200.0), &mut queue).unwrap();

        assert_eq!(sim.phase(), AnimationPhase::Initial);
        assert_eq!(sim.status(), RunStatus::Running);
        assert_eq!(sim.state().start_radius, 200.0);
        assert_eq!(sim.state().impactor_distance, 300.0);
        assert!(sim.state().ejecta.is_empty());
        assert_ne!(queue.pending(), Some(old_frame));
        assert!(!sim.on_frame(old_frame, 0.0, &mut queue));
    }

    #[test]
    fn test_radius_edit_when_ready_stays_ready() {
        let mut sim = fixtures::seeded_simulation();
        let mut queue = FrameQueue::default();

        sim.edit(ParameterEdit::OrbitRadius(150.0), &mut queue).unwrap();

        assert_eq!(sim.status(), RunStatus::Ready);
        assert!(queue.is_idle());
        assert_eq!(sim.state().current_radius, 150.0);
    }

    #[test]
    fn test_other_edits_keep_phase() {
        let mut sim = fixtures::seeded_simulation();
        let mut queue = FrameQueue::default();
        sim.run(&mut queue);
        fixtures::step_until(&mut sim, AnimationPhase::Impact, 1.0 / 12.0, 500);
        let frame = queue.pending();

        sim.edit(ParameterEdit::ImpactAngle(180.0), &mut queue).unwrap();

        assert_eq!(sim.phase(), AnimationPhase::Impact);
        assert_eq!(queue.pending(), frame);
        assert!(sim.result().delta_v_tangential > 0.0);
        assert_eq!(sim.state().target_radius, sim.result().new_radius);
    }

    #[test]
    fn test_contact_snaps_impactor_distance() {
        let mut sim = fixtures::seeded_simulation();
        let mut queue = FrameQueue::default();
        sim.run(&mut queue);

        fixtures::step_until(&mut sim, AnimationPhase::Impact, 1.0 / 12.0, 500);

        assert_eq!(sim.state().impactor_distance, 5.0);
    }

    #[test]
    fn test_impactor_recoils_at_fixed_rate() {
        let mut sim = fixtures::seeded_simulation();
        let mut queue = FrameQueue::default();
        sim.run(&mut queue);
        fixtures::step_until(&mut sim, AnimationPhase::Impact, 1.0 / 12.0, 500);

        sim.step(0.1);

        assert_eq!(sim.phase(), AnimationPhase::Impact);
        approx::assert_relative_eq!(sim.state().impactor_distance, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_radius_interpolates_linearly_while_shrinking() {
        let mut sim = fixtures::seeded_simulation();
        let mut queue = FrameQueue::default();
        sim.run(&mut queue);
        fixtures::step_until(&mut sim, AnimationPhase::Shrinking, 1.0 / 12.0, 500);
        let (start, target) = (sim.state().start_radius, sim.state().target_radius);
        assert_ne!(start, target);

        // Halfway through the 3 s transition
        sim.step(1.5);

        assert_eq!(sim.phase(), AnimationPhase::Shrinking);
        approx::assert_relative_eq!(
            sim.state().current_radius,
            start + (target - start) * 0.5,
            epsilon = 1e-12
        );

        sim.step(0.75);
        approx::assert_relative_eq!(
            sim.state().current_radius,
            start + (target - start) * 0.75,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_invalid_edit_rejected_without_side_effects() {
        let mut sim = fixtures::seeded_simulation();
        let mut queue = FrameQueue::default();
        let before = *sim.result();

        let err = sim.edit(ParameterEdit::ImpactorMass(-1.0), &mut queue);
        assert!(err.is_err());
        assert_eq!(*sim.result(), before);
        assert_eq!(sim.params().impactor_mass, 500.0);

        assert!(sim.edit(ParameterEdit::Speed(f64::NAN), &mut queue).is_err());
        assert_eq!(sim.speed(), crate::config::DEFAULT_SPEED);
    }

    #[test]
    fn test_speed_edit_scales_dt() {
        let mut sim = fixtures::seeded_simulation();
        let mut queue = FrameQueue::default();
        sim.edit(ParameterEdit::Speed(10.0), &mut queue).unwrap();
        sim.run(&mut queue);
        let start = sim.state().impactor_distance;

        let h = queue.take_due().unwrap();
        sim.on_frame(h, 0.0, &mut queue);
        let h = queue.take_due().unwrap();
        sim.on_frame(h, 0.1, &mut queue);

        approx::assert_relative_eq!(sim.state().impactor_distance, start - 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_primary_intent_follows_status() {
        let mut sim = fixtures::seeded_simulation();
        let mut queue = FrameQueue::default();
        assert_eq!(sim.primary_intent(), Some(SimulationIntent::Run));

        sim.run(&mut queue);
        assert_eq!(sim.primary_intent(), None);

        fixtures::run_to_completion(&mut sim, &mut queue, 1.0 / 60.0, 10_000);
        assert_eq!(sim.status(), RunStatus::Finished);
        assert_eq!(sim.primary_intent(), Some(SimulationIntent::Replay));

        sim.handle_intent(SimulationIntent::Replay, &mut queue).unwrap();
        assert_eq!(sim.status(), RunStatus::Ready);
        assert_eq!(sim.phase(), AnimationPhase::Initial);
    }

    #[test]
    fn test_snapshot_hides_impactor_after_impact() {
        let mut sim = fixtures::seeded_simulation();
        let mut queue = FrameQueue::default();
        sim.run(&mut queue);
        assert!(sim.snapshot().impactor_distance.is_some());

        fixtures::step_until(&mut sim, AnimationPhase::Shrinking, 1.0 / 12.0, 500);
        let snapshot = sim.snapshot();
        assert!(snapshot.impactor_distance.is_none());
        assert!(snapshot.impactor_position().is_none());
        assert!(snapshot.shows_new_orbit());
        assert!(!snapshot.orbit_expanded());
    }
}
