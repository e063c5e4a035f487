//! The deflection simulation controller.
//!
//! Owns the parameters, the latest deflection result, and the animation
//! state, and is the only thing that mutates them. Work happens in two
//! places:
//! - intents (`run`, `replay`, `reset`, `edit`), which may recompute physics
//!   and (re)schedule the frame loop
//! - frames (`on_frame` → `step`), which advance the animation by one tick

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::scheduler::{FrameHandle, FrameScheduler};
use super::state::{AnimationPhase, AnimationState, FrameSnapshot, RunStatus, TickOutcome};
use crate::config::SimulationConfig;
use crate::params::{ParameterEdit, ParameterError, SimulationParameters};
use crate::physics::DeflectionResult;
use crate::time::FrameClock;

/// A user intent coming from the controls.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum SimulationIntent {
    /// Start a run with the current parameters.
    Run,
    /// Restore the DART defaults after a finished run.
    Replay,
    /// Stop everything and restore the DART defaults.
    Reset,
    /// Change one parameter.
    Edit(ParameterEdit),
}

/// One deflection simulation instance.
#[derive(Resource)]
pub struct DeflectionSimulation {
    config: SimulationConfig,
    params: SimulationParameters,
    speed: f64,
    result: DeflectionResult,
    state: AnimationState,
    clock: FrameClock,
    pending: Option<FrameHandle>,
    status: RunStatus,
    rng: StdRng,
}

impl Default for DeflectionSimulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl DeflectionSimulation {
    pub fn new(config: SimulationConfig) -> Self {
        let params = config.defaults;
        let result = config.model.compute(&params.impact_input());
        let mut state = AnimationState::at_rest(params.orbit_radius, &config.animation);
        state.target_radius = result.new_radius;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            speed: config.default_speed,
            config,
            params,
            result,
            state,
            clock: FrameClock::default(),
            pending: None,
            status: RunStatus::Ready,
            rng,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn result(&self) -> &DeflectionResult {
        &self.result
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn phase(&self) -> AnimationPhase {
        self.state.phase
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Animation speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// The frame this controller is waiting for, if any.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Read-only view of the current frame.
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        let impactor_distance = match self.state.phase {
            AnimationPhase::Initial | AnimationPhase::Impact => Some(self.state.impactor_distance),
            AnimationPhase::Shrinking | AnimationPhase::Complete => None,
        };

        FrameSnapshot {
            phase: self.state.phase,
            status: self.status,
            impactor_distance,
            current_radius: self.state.current_radius,
            initial_radius: self.state.start_radius,
            target_radius: self.state.target_radius,
            particles: self.state.ejecta.particles(),
            result: &self.result,
            params: &self.params,
        }
    }

    /// What the play control does right now.
    ///
    /// `None` while a run is in progress (the control is disabled).
    pub fn primary_intent(&self) -> Option<SimulationIntent> {
        match self.status {
            RunStatus::Ready => Some(SimulationIntent::Run),
            RunStatus::Running => None,
            RunStatus::Finished => Some(SimulationIntent::Replay),
        }
    }

    /// Dispatch an intent.
    pub fn handle_intent(
        &mut self,
        intent: SimulationIntent,
        scheduler: &mut impl FrameScheduler,
    ) -> Result<(), ParameterError> {
        match intent {
            SimulationIntent::Run => self.run(scheduler),
            SimulationIntent::Replay => self.replay(scheduler),
            SimulationIntent::Reset => self.reset(scheduler),
            SimulationIntent::Edit(edit) => return self.edit(edit, scheduler),
        }
        Ok(())
    }

    /// Start a fresh run from the initial phase.
    ///
    /// Any pending frame of a previous run is cancelled first.
    pub fn run(&mut self, scheduler: &mut impl FrameScheduler) {
        self.cancel_pending(scheduler);
        self.restart_state();
        self.start_loop(scheduler);
        info!(
            "Impact run started (m={} kg, u={} m/s, a={}, phi={}°, beta={})",
            self.params.impactor_mass,
            self.params.impactor_velocity,
            self.params.orbit_radius,
            self.params.impact_angle_deg,
            self.params.ejecta.ordinal()
        );
    }

    /// Return to the defaults after a finished run.
    pub fn replay(&mut self, scheduler: &mut impl FrameScheduler) {
        self.reset(scheduler);
    }

    /// Cancel any run and restore the default parameters.
    pub fn reset(&mut self, scheduler: &mut impl FrameScheduler) {
        self.cancel_pending(scheduler);
        self.params = self.config.defaults;
        self.restart_state();
        self.status = RunStatus::Ready;
        info!("Deflection simulation reset to defaults");
    }

    /// Apply a parameter edit.
    ///
    /// A radius edit restarts the initial phase on the new orbit; if a run
    /// was in progress a fresh one starts immediately. Other edits only
    /// refresh the deflection result.
    pub fn edit(
        &mut self,
        edit: ParameterEdit,
        scheduler: &mut impl FrameScheduler,
    ) -> Result<(), ParameterError> {
        self.params.apply(edit)?;

        match edit {
            ParameterEdit::Speed(speed) => {
                self.speed = speed;
            }
            ParameterEdit::OrbitRadius(_) => {
                let was_running = self.status == RunStatus::Running;
                self.cancel_pending(scheduler);
                self.restart_state();
                if was_running {
                    self.start_loop(scheduler);
                } else {
                    self.status = RunStatus::Ready;
                }
            }
            _ => self.recompute(),
        }

        debug!("Parameter {} updated", edit.name());
        Ok(())
    }

    /// Deliver a scheduled frame.
    ///
    /// Frames whose handle is no longer pending were cancelled and are
    /// ignored. Returns whether the frame was processed.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        now_secs: f64,
        scheduler: &mut impl FrameScheduler,
    ) -> bool {
        if self.pending != Some(handle) {
            debug!("Ignoring stale frame {:?}", handle);
            return false;
        }
        self.pending = None;

        let dt = self.clock.delta(now_secs, self.speed);
        match self.step(dt) {
            TickOutcome::Continue => self.pending = Some(scheduler.request_frame()),
            TickOutcome::Finished => info!("Impact run finished"),
        }
        true
    }

    /// Advance the animation by `dt` simulated seconds.
    ///
    /// Independent of any scheduler, so runs can be replayed with synthetic
    /// time steps.
    pub fn step(&mut self, dt: f64) -> TickOutcome {
        let anim = &self.config.animation;
        let state = &mut self.state;
        state.phase_elapsed += dt;

        match state.phase {
            AnimationPhase::Initial => {
                state.impactor_distance -= anim.closing_rate * dt;

                if state.impactor_distance <= anim.contact_distance {
                    state.impactor_distance = anim.contact_snap;
                    let count = self.params.ejecta.particle_count();
                    let origin = state.impact_point();
                    let bearing = self.params.impact_angle_deg + 180.0;
                    state
                        .ejecta
                        .spawn_batch(&mut self.rng, origin, bearing, count, &anim.plume);
                    debug!("Impact: spawned {} ejecta particles", count);
                    Self::enter(state, AnimationPhase::Impact);
                }
            }
            AnimationPhase::Impact => {
                if state.impactor_distance < anim.rebound_distance {
                    state.impactor_distance += anim.recoil_rate * dt;
                }
                state.ejecta.advance(dt, anim.particle_lifetime);

                if state.impactor_distance >= anim.rebound_distance {
                    Self::enter(state, AnimationPhase::Shrinking);
                    self.recompute();
                }
            }
            AnimationPhase::Shrinking => {
                state.ejecta.advance(dt, anim.particle_lifetime);

                if state.phase_elapsed < anim.transition_duration {
                    let fraction = state.phase_elapsed / anim.transition_duration;
                    state.current_radius =
                        state.start_radius + (state.target_radius - state.start_radius) * fraction;
                } else {
                    state.current_radius = state.target_radius;
                    Self::enter(state, AnimationPhase::Complete);
                }
            }
            AnimationPhase::Complete => {
                state.ejecta.advance(dt, anim.particle_lifetime);

                if state.ejecta.is_empty() {
                    self.status = RunStatus::Finished;
                    return TickOutcome::Finished;
                }
            }
        }

        TickOutcome::Continue
    }

    fn enter(state: &mut AnimationState, phase: AnimationPhase) {
        debug!("Deflection phase {:?} -> {:?}", state.phase, phase);
        state.phase = phase;
        state.phase_elapsed = 0.0;
    }

    /// Recompute the deflection result and the target radius.
    fn recompute(&mut self) {
        self.result = self.config.model.compute(&self.params.impact_input());
        self.state.target_radius = self.result.new_radius;
    }

    fn restart_state(&mut self) {
        self.state = AnimationState::at_rest(self.params.orbit_radius, &self.config.animation);
        self.clock.reset();
        self.recompute();
    }

    fn start_loop(&mut self, scheduler: &mut impl FrameScheduler) {
        self.status = RunStatus::Running;
        self.pending = Some(scheduler.request_frame());
    }

    fn cancel_pending(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }
}
