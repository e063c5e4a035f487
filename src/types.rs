//! Physical constants, canvas geometry, and unit conversions.

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Mass of the Sun (kg)
pub const M_SUN: f64 = 1.989e30;

/// Standard gravitational parameter of the Sun (m³/s²)
pub const GM_SUN: f64 = G * M_SUN;

/// Astronomical unit in meters, as used by the visual calibration.
pub const AU_TO_METERS: f64 = 149.6e9;

/// Meters to AU
pub const METERS_TO_AU: f64 = 1.0 / AU_TO_METERS;

/// Proxy mass of the target asteroid (kg).
///
/// Held constant; the user never edits it.
pub const M_ASTEROID_PROXY: f64 = 4.3e10;

/// Scale applied to the physical Δa/a so a millimetre-per-second nudge shows
/// up as a visible change of the drawn orbit.
pub const VISUAL_DEFLECTION_MULTIPLIER: f64 = 1e8;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

// Visual calibration: a drawn radius of 250 units is 1.5 AU.

/// Reference drawn orbit radius (visual units).
pub const REFERENCE_VISUAL_RADIUS: f64 = 250.0;

/// Physical distance represented by the reference radius (meters).
pub const REFERENCE_DISTANCE_METERS: f64 = 1.5 * AU_TO_METERS;

/// Meters represented by one visual unit.
pub const METERS_PER_VISUAL_UNIT: f64 = REFERENCE_DISTANCE_METERS / REFERENCE_VISUAL_RADIUS;

/// AU represented by one visual unit (0.006 AU).
pub const AU_PER_VISUAL_UNIT: f64 = METERS_PER_VISUAL_UNIT * METERS_TO_AU;

/// Scene canvas width in visual units.
pub const CANVAS_WIDTH: f64 = 600.0;

/// Scene canvas height in visual units.
pub const CANVAS_HEIGHT: f64 = 400.0;

/// Smallest orbit radius the scene will draw.
pub const MIN_DISPLAY_RADIUS: f64 = 50.0;

/// Largest orbit radius the scene will draw (keeps a 10 unit margin).
pub const MAX_DISPLAY_RADIUS: f64 = CANVAS_WIDTH / 2.0 - 10.0;

/// Drawn radius of the target asteroid. Also the impactor contact distance.
pub const ASTEROID_VISUAL_RADIUS: f64 = 10.0;

/// Drawn radius of the Sun.
pub const SUN_VISUAL_RADIUS: f64 = 15.0;

/// Bearing (degrees, clockwise from screen-up) of the impact point on the orbit.
pub const IMPACT_BEARING_DEG: f64 = 90.0;

/// Convert a drawn radius to the physical orbital distance in meters.
pub fn visual_to_meters(visual: f64) -> f64 {
    visual * METERS_PER_VISUAL_UNIT
}

/// Convert a drawn radius to AU.
pub fn visual_to_au(visual: f64) -> f64 {
    visual * AU_PER_VISUAL_UNIT
}

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}
