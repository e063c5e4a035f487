//! Text formatting for the control and result panels.

use crate::types::visual_to_au;

/// Fold `-0.0` into `0.0` so a null result never prints a minus sign.
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Exponential notation with a fixed number of fraction digits and an
/// always-signed exponent, e.g. `-5.832e-7` or `9.000e+0`.
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let value = unsigned_zero(value);
    let formatted = format!("{value:.fraction_digits$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Orbital velocity in km/s with two decimals.
pub fn velocity_kms(meters_per_second: f64) -> String {
    format!("{:.2}", meters_per_second / 1000.0)
}

/// Tangential Δv in m/s with six decimals.
pub fn delta_v(meters_per_second: f64) -> String {
    format!("{:.6}", unsigned_zero(meters_per_second))
}

/// Fractional semi-major-axis change as a percentage.
pub fn delta_a_percent(delta_a_over_a: f64) -> String {
    to_exponential(delta_a_over_a * 100.0, 3)
}

/// Orbit radius slider value, in AU.
pub fn radius_au(visual_radius: f64) -> String {
    format!("{} AU", to_exponential(visual_to_au(visual_radius), 3))
}

/// Label for the animation speed multiplier.
pub fn speed_label(speed: f64) -> &'static str {
    if speed == 10.0 {
        "Fast"
    } else if speed == 5.0 {
        "Normal"
    } else {
        "Slow"
    }
}
