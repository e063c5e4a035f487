//! User-controlled simulation parameters and edit validation.
//!
//! The physics model trusts its inputs, so every edit coming from the
//! controls passes through [`SimulationParameters::apply`] first.

use crate::physics::ImpactInput;
use crate::types::{M_ASTEROID_PROXY, REFERENCE_VISUAL_RADIUS};

/// Errors raised by a rejected parameter edit.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("ejecta level must be 1-4, got {0}")]
    InvalidEjectaLevel(u8),
}

/// Qualitative ejecta intensity, which sets the momentum-enhancement factor β.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EjectaLevel {
    /// β = 1
    None,
    /// β = 2
    Low,
    /// β = 3, as measured for DART
    #[default]
    Medium,
    /// β = 4
    High,
}

impl EjectaLevel {
    /// All levels in ascending β order.
    pub const ALL: [EjectaLevel; 4] = [Self::None, Self::Low, Self::Medium, Self::High];

    /// Build from the 1-based ordinal shown on the β control.
    pub fn from_ordinal(ordinal: u8) -> Result<Self, ParameterError> {
        match ordinal {
            1 => Ok(Self::None),
            2 => Ok(Self::Low),
            3 => Ok(Self::Medium),
            4 => Ok(Self::High),
            other => Err(ParameterError::InvalidEjectaLevel(other)),
        }
    }

    /// The 1-based ordinal (equal to β).
    pub fn ordinal(self) -> u8 {
        match self {
            Self::None => 1,
            Self::Low => 2,
            Self::Medium => 3,
            Self::High => 4,
        }
    }

    /// Momentum-enhancement factor.
    pub fn beta(self) -> f64 {
        f64::from(self.ordinal())
    }

    /// Number of ejecta particles spawned at impact.
    pub fn particle_count(self) -> usize {
        match self {
            Self::None => 0,
            Self::Low => 50,
            Self::Medium => 100,
            Self::High => 150,
        }
    }

    /// Label for the β control.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// The physical parameters a user can edit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    /// Impactor mass (kg).
    pub impactor_mass: f64,
    /// Closing velocity (m/s).
    pub impactor_velocity: f64,
    /// Target mass (kg). Not editable.
    pub target_mass: f64,
    /// Initial orbit radius (visual units).
    pub orbit_radius: f64,
    /// Impact angle from the tangent (degrees).
    pub impact_angle_deg: f64,
    /// Ejecta intensity (β).
    pub ejecta: EjectaLevel,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::dart()
    }
}

impl SimulationParameters {
    /// DART-like starting values.
    pub fn dart() -> Self {
        Self {
            impactor_mass: 500.0,
            impactor_velocity: 6100.0,
            target_mass: M_ASTEROID_PROXY,
            orbit_radius: REFERENCE_VISUAL_RADIUS,
            impact_angle_deg: 0.0,
            ejecta: EjectaLevel::Medium,
        }
    }

    /// Inputs for the deflection model.
    pub fn impact_input(&self) -> ImpactInput {
        ImpactInput {
            impactor_mass: self.impactor_mass,
            impactor_velocity: self.impactor_velocity,
            target_mass: self.target_mass,
            orbit_radius: self.orbit_radius,
            impact_angle_deg: self.impact_angle_deg,
            beta: self.ejecta.beta(),
        }
    }

    /// Validate and apply a single edit.
    ///
    /// Speed edits carry no physical meaning and leave the parameters as they
    /// are once validated. On error nothing changes.
    pub fn apply(&mut self, edit: ParameterEdit) -> Result<(), ParameterError> {
        match edit {
            ParameterEdit::ImpactorMass(value) => {
                self.impactor_mass = positive("impactor mass", value)?;
            }
            ParameterEdit::ImpactorVelocity(value) => {
                self.impactor_velocity = positive("impactor velocity", value)?;
            }
            ParameterEdit::OrbitRadius(value) => {
                self.orbit_radius = positive("orbit radius", value)?;
            }
            ParameterEdit::ImpactAngle(value) => {
                self.impact_angle_deg = finite("impact angle", value)?;
            }
            ParameterEdit::Ejecta(ordinal) => {
                self.ejecta = EjectaLevel::from_ordinal(ordinal)?;
            }
            ParameterEdit::Speed(value) => {
                positive("speed", value)?;
            }
        }
        Ok(())
    }
}

/// A single edit coming from the controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParameterEdit {
    ImpactorMass(f64),
    ImpactorVelocity(f64),
    OrbitRadius(f64),
    ImpactAngle(f64),
    /// β ordinal, 1-4.
    Ejecta(u8),
    /// Animation speed multiplier.
    Speed(f64),
}

impl ParameterEdit {
    /// Short name for log messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ImpactorMass(_) => "mass",
            Self::ImpactorVelocity(_) => "velocity",
            Self::OrbitRadius(_) => "radius",
            Self::ImpactAngle(_) => "phi",
            Self::Ejecta(_) => "beta",
            Self::Speed(_) => "speed",
        }
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::NonFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    let value = finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::NonPositive { name, value })
    }
}
