//! Kinetic-impactor momentum transfer and the resulting orbit change.
//!
//! Implements:
//! - Circular orbital velocity at the drawn radius: v = √(GM/r)
//! - Momentum transfer: |Δv| = (m·u / M)·(2 − β)
//! - Tangential component: Δv_t = |Δv|·cos φ
//! - Linearized vis-viva: Δa/a = 2·Δv_t / v
//! - Exaggerated, clamped radius for display

use crate::types::{
    GM_SUN, MAX_DISPLAY_RADIUS, METERS_PER_VISUAL_UNIT, MIN_DISPLAY_RADIUS,
    VISUAL_DEFLECTION_MULTIPLIER, normalize_degrees,
};

/// Range of orbit radii the scene can draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayRange {
    pub min: f64,
    pub max: f64,
}

impl Default for DisplayRange {
    fn default() -> Self {
        Self {
            min: MIN_DISPLAY_RADIUS,
            max: MAX_DISPLAY_RADIUS,
        }
    }
}

impl DisplayRange {
    /// Clamp a radius into the range.
    ///
    /// NaN maps to `min`, so a result computed from overflowing intermediates
    /// still lands on screen.
    pub fn clamp(&self, radius: f64) -> f64 {
        radius.max(self.min).min(self.max)
    }

    /// Whether the radius lies inside the range.
    pub fn contains(&self, radius: f64) -> bool {
        (self.min..=self.max).contains(&radius)
    }
}

/// Inputs for one impact evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactInput {
    /// Impactor mass (kg).
    pub impactor_mass: f64,
    /// Closing velocity (m/s).
    pub impactor_velocity: f64,
    /// Target mass (kg).
    pub target_mass: f64,
    /// Orbit radius before the impact (visual units).
    pub orbit_radius: f64,
    /// Impact angle from the tangent direction (degrees).
    pub impact_angle_deg: f64,
    /// Momentum-enhancement factor.
    pub beta: f64,
}

/// Output of the deflection model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeflectionResult {
    /// Circular orbital velocity before impact (m/s).
    pub orbital_velocity: f64,
    /// Tangential velocity change (m/s). Positive is prograde.
    pub delta_v_tangential: f64,
    /// Physical fractional semi-major-axis change.
    pub delta_a_over_a: f64,
    /// Orbit radius to draw after the impact (visual units).
    pub new_radius: f64,
}

impl DeflectionResult {
    /// Which way the orbit moves.
    pub fn direction(&self) -> DeflectionDirection {
        DeflectionDirection::from_delta_v(self.delta_v_tangential)
    }
}

/// Qualitative direction of a deflection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeflectionDirection {
    /// Prograde push, the orbit grows.
    Outward,
    /// Retrograde push, the orbit shrinks.
    Inward,
    /// No tangential change.
    None,
}

impl DeflectionDirection {
    /// Classify by the sign of the tangential Δv.
    pub fn from_delta_v(delta_v_tangential: f64) -> Self {
        if delta_v_tangential > 0.0 {
            Self::Outward
        } else if delta_v_tangential < 0.0 {
            Self::Inward
        } else {
            Self::None
        }
    }
}

/// Cosine of an angle in degrees.
///
/// The four quadrant angles return exact values, so a side-on hit
/// (90° or 270°) transfers exactly zero tangential momentum.
pub fn cos_degrees(deg: f64) -> f64 {
    let normalized = normalize_degrees(deg);
    if normalized == 0.0 {
        1.0
    } else if normalized == 90.0 || normalized == 270.0 {
        0.0
    } else if normalized == 180.0 {
        -1.0
    } else {
        normalized.to_radians().cos()
    }
}

/// Tunable constants of the deflection model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeflectionModel {
    /// Gravitational parameter of the central body (m³/s²).
    pub gm_central: f64,
    /// Meters represented by one visual unit.
    pub meters_per_unit: f64,
    /// Multiplier applied to Δa/a before it touches the drawn radius.
    pub visual_multiplier: f64,
    /// Radii the scene can draw.
    pub display: DisplayRange,
}

impl Default for DeflectionModel {
    fn default() -> Self {
        Self {
            gm_central: GM_SUN,
            meters_per_unit: METERS_PER_VISUAL_UNIT,
            visual_multiplier: VISUAL_DEFLECTION_MULTIPLIER,
            display: DisplayRange::default(),
        }
    }
}

impl DeflectionModel {
    /// Evaluate one impact.
    ///
    /// Inputs are not validated: NaN or infinite values flow through into
    /// the velocity and Δa/a fields. Only `new_radius` is guaranteed to stay
    /// inside the display range.
    pub fn compute(&self, input: &ImpactInput) -> DeflectionResult {
        // Circular orbit velocity at the physical distance of the drawn radius
        let r_physical = input.orbit_radius * self.meters_per_unit;
        let orbital_velocity = (self.gm_central / r_physical).sqrt();

        // Not clamped: β = 2 cancels the transfer and β > 2 reverses it
        let transfer = (input.impactor_mass * input.impactor_velocity / input.target_mass)
            * (2.0 - input.beta);
        let delta_v_tangential = transfer * cos_degrees(input.impact_angle_deg);

        let delta_a_over_a = 2.0 * delta_v_tangential / orbital_velocity;

        let visual_fraction = delta_a_over_a * self.visual_multiplier;
        let new_radius = self
            .display
            .clamp(input.orbit_radius * (1.0 + visual_fraction));

        DeflectionResult {
            orbital_velocity,
            delta_v_tangential,
            delta_a_over_a,
            new_radius,
        }
    }
}

/// Evaluate one impact with the default model.
///
/// # Arguments
/// * `impactor_mass` - Impactor mass (kg)
/// * `impactor_velocity` - Closing velocity (m/s)
/// * `target_mass` - Asteroid mass (kg)
/// * `orbit_radius` - Drawn orbit radius before impact (visual units)
/// * `impact_angle_deg` - Angle between impactor velocity and the tangent (degrees)
/// * `beta` - Momentum-enhancement factor
pub fn compute_deflection(
    impactor_mass: f64,
    impactor_velocity: f64,
    target_mass: f64,
    orbit_radius: f64,
    impact_angle_deg: f64,
    beta: f64,
) -> DeflectionResult {
    DeflectionModel::default().compute(&ImpactInput {
        impactor_mass,
        impactor_velocity,
        target_mass,
        orbit_radius,
        impact_angle_deg,
        beta,
    })
}
