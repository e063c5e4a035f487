//! Tunable configuration for the deflection simulation.
//!
//! Everything here has a default matching the classroom demo. Insert a
//! customized [`SimulationConfig`] resource before adding
//! [`crate::animation::SimulationPlugin`] to override it.

use bevy::prelude::*;

use crate::ejecta::PlumeShape;
use crate::params::SimulationParameters;
use crate::physics::DeflectionModel;
use crate::types::ASTEROID_VISUAL_RADIUS;

/// Default animation speed multiplier ("Normal").
pub const DEFAULT_SPEED: f64 = 5.0;

/// Timing and geometry of the impact animation.
///
/// Distances are in visual units, rates in visual units per simulated
/// second, durations in simulated seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    /// Impactor start distance as a multiple of the orbit radius.
    pub approach_factor: f64,
    /// Impactor approach speed.
    pub closing_rate: f64,
    /// Distance at which the impactor hits.
    pub contact_distance: f64,
    /// Distance the impactor snaps to on contact.
    pub contact_snap: f64,
    /// Rebound speed after contact.
    pub recoil_rate: f64,
    /// Rebound distance that ends the impact phase.
    pub rebound_distance: f64,
    /// Duration of the orbit radius transition.
    pub transition_duration: f64,
    /// Time for an ejecta particle to fade out.
    pub particle_lifetime: f64,
    /// Shape of the ejecta plume.
    pub plume: PlumeShape,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            approach_factor: 1.5,
            closing_rate: 100.0,
            contact_distance: ASTEROID_VISUAL_RADIUS,
            contact_snap: ASTEROID_VISUAL_RADIUS / 2.0,
            recoil_rate: 20.0,
            rebound_distance: 25.0,
            transition_duration: 3.0,
            particle_lifetime: 4.0,
            plume: PlumeShape::default(),
        }
    }
}

/// Top-level simulation configuration.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Deflection model constants.
    pub model: DeflectionModel,
    /// Animation timing.
    pub animation: AnimationConfig,
    /// Parameters restored on reset.
    pub defaults: SimulationParameters,
    /// Initial speed multiplier.
    pub default_speed: f64,
    /// Fixed ejecta seed for reproducible runs. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            model: DeflectionModel::default(),
            animation: AnimationConfig::default(),
            defaults: SimulationParameters::dart(),
            default_speed: DEFAULT_SPEED,
            rng_seed: None,
        }
    }
}

impl SimulationConfig {
    /// Default configuration with a fixed ejecta seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng_seed: Some(seed),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_ordered() {
        let anim = AnimationConfig::default();
        assert!(anim.contact_snap < anim.contact_distance);
        assert!(anim.contact_distance < anim.rebound_distance);
        // The impactor must start outside the contact distance
        assert!(anim.approach_factor * 50.0 > anim.rebound_distance);
    }

    #[test]
    fn test_seeded() {
        let config = SimulationConfig::seeded(42);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.defaults, SimulationParameters::dart());
        assert_eq!(config.default_speed, DEFAULT_SPEED);
    }
}
