//! Animation phases, per-run state, and the read-only frame snapshot.

use bevy::math::DVec2;

use crate::config::AnimationConfig;
use crate::ejecta::{EjectaCloud, EjectaParticle, bearing_to_unit};
use crate::params::SimulationParameters;
use crate::physics::DeflectionResult;
use crate::types::IMPACT_BEARING_DEG;

/// Phase of the impact animation, in the order a run visits them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnimationPhase {
    /// Impactor closing in on the target.
    #[default]
    Initial,
    /// Contact and rebound; ejecta plume launched.
    Impact,
    /// Orbit radius moving to its new value.
    Shrinking,
    /// Orbit settled; remaining ejecta fading out.
    Complete,
}

/// Whether the controller is waiting, animating, or done.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunStatus {
    /// Parameters can be edited; nothing is scheduled.
    #[default]
    Ready,
    /// A frame loop is active.
    Running,
    /// The loop ended on its own. A new run must be requested explicitly.
    Finished,
}

/// Result of advancing one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// More frames are needed.
    Continue,
    /// The run is over; stop scheduling.
    Finished,
}

/// Mutable state of one run.
#[derive(Clone, Debug)]
pub struct AnimationState {
    /// Current phase.
    pub phase: AnimationPhase,
    /// Simulated seconds since the current phase began.
    pub phase_elapsed: f64,
    /// Impactor distance from the impact point (visual units).
    pub impactor_distance: f64,
    /// Drawn orbit radius this frame.
    pub current_radius: f64,
    /// Orbit radius before the impact.
    pub start_radius: f64,
    /// Orbit radius after the impact.
    pub target_radius: f64,
    /// Ejecta plume.
    pub ejecta: EjectaCloud,
}

impl AnimationState {
    /// State at the start of a run on an orbit of the given radius.
    pub fn at_rest(radius: f64, config: &AnimationConfig) -> Self {
        Self {
            phase: AnimationPhase::Initial,
            phase_elapsed: 0.0,
            impactor_distance: config.approach_factor * radius,
            current_radius: radius,
            start_radius: radius,
            target_radius: radius,
            ejecta: EjectaCloud::default(),
        }
    }

    /// Where the impactor hits: the target's position on the original orbit.
    pub fn impact_point(&self) -> DVec2 {
        impact_point(self.start_radius)
    }
}

/// Target position on an orbit of the given radius, with the Sun at the origin.
pub fn impact_point(radius: f64) -> DVec2 {
    bearing_to_unit(IMPACT_BEARING_DEG) * radius
}

/// Read-only view handed to the renderer and the result display each frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot<'a> {
    pub phase: AnimationPhase,
    pub status: RunStatus,
    /// Present only while the impactor is drawn (initial and impact phases).
    pub impactor_distance: Option<f64>,
    pub current_radius: f64,
    pub initial_radius: f64,
    pub target_radius: f64,
    pub particles: &'a [EjectaParticle],
    pub result: &'a DeflectionResult,
    pub params: &'a SimulationParameters,
}

impl FrameSnapshot<'_> {
    /// Whether the new orbit should be drawn alongside the original one.
    pub fn shows_new_orbit(&self) -> bool {
        matches!(self.phase, AnimationPhase::Shrinking | AnimationPhase::Complete)
    }

    /// Whether the orbit grew (drawn lime) rather than shrank (drawn red).
    pub fn orbit_expanded(&self) -> bool {
        self.target_radius > self.initial_radius
    }

    /// Target position this frame. Moves with the interpolated radius.
    pub fn asteroid_position(&self) -> DVec2 {
        impact_point(self.current_radius)
    }

    /// Impact point on the original orbit.
    pub fn impact_position(&self) -> DVec2 {
        impact_point(self.initial_radius)
    }

    /// Impactor position, approaching along the ejecta direction.
    pub fn impactor_position(&self) -> Option<DVec2> {
        let distance = self.impactor_distance?;
        let approach = bearing_to_unit(self.params.impact_angle_deg + 180.0);
        Some(self.impact_position() + approach * distance)
    }
}
