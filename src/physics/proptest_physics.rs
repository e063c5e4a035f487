//! Property-based tests for the deflection model using proptest.
//!
//! These tests verify the model's invariants across the whole input space the
//! controls can produce, and well beyond it.

use proptest::prelude::*;

use super::deflection::{
    DeflectionModel, DisplayRange, ImpactInput, compute_deflection, cos_degrees,
};
use crate::types::{MAX_DISPLAY_RADIUS, MIN_DISPLAY_RADIUS};

fn radius_in_display() -> impl Strategy<Value = f64> {
    MIN_DISPLAY_RADIUS..=MAX_DISPLAY_RADIUS
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// β = 2 cancels the transfer regardless of mass, velocity and angle.
    #[test]
    fn prop_beta_two_is_neutral(
        mass in 1.0f64..1e6,
        velocity in 1.0f64..1e5,
        target in 1e6f64..1e15,
        radius in radius_in_display(),
        phi in -720.0f64..720.0,
    ) {
        let result = compute_deflection(mass, velocity, target, radius, phi, 2.0);
        prop_assert_eq!(result.delta_v_tangential, 0.0);
        prop_assert_eq!(result.new_radius, radius);
    }

    /// A side-on hit transfers nothing along the track.
    #[test]
    fn prop_side_on_is_neutral(
        mass in 1.0f64..1e6,
        velocity in 1.0f64..1e5,
        radius in radius_in_display(),
        beta in 0.0f64..5.0,
        turns in -3i32..3,
        side in prop::bool::ANY,
    ) {
        let base = if side { 90.0 } else { 270.0 };
        let phi = base + 360.0 * f64::from(turns);
        let result = compute_deflection(mass, velocity, 4.3e10, radius, phi, beta);
        prop_assert_eq!(result.delta_v_tangential, 0.0);
        prop_assert_eq!(result.new_radius, radius);
    }

    /// The drawn radius never leaves the display range for finite inputs.
    #[test]
    fn prop_new_radius_always_on_screen(
        mass in 1e-300f64..1e300,
        velocity in 1e-300f64..1e300,
        target in 1e-300f64..1e300,
        radius in 1e-300f64..1e300,
        phi in -1e6f64..1e6,
        beta in -1e6f64..1e6,
    ) {
        let result = compute_deflection(mass, velocity, target, radius, phi, beta);
        prop_assert!(
            DisplayRange::default().contains(result.new_radius),
            "new radius {} escaped the display range", result.new_radius
        );
    }

    /// The sign of Δv_t follows cos φ below β = 2 and opposes it above.
    #[test]
    fn prop_sign_follows_cosine(
        mass in 1.0f64..1e4,
        velocity in 1.0f64..1e5,
        radius in radius_in_display(),
        phi in 0.0f64..360.0,
        below in 0.0f64..1.99,
        above in 2.01f64..6.0,
    ) {
        let cos = cos_degrees(phi);
        prop_assume!(cos.abs() > 1e-9);

        let low = compute_deflection(mass, velocity, 4.3e10, radius, phi, below);
        prop_assert_eq!(low.delta_v_tangential.signum(), cos.signum());

        let high = compute_deflection(mass, velocity, 4.3e10, radius, phi, above);
        prop_assert_eq!(high.delta_v_tangential.signum(), -cos.signum());
    }

    /// The model has no hidden state.
    #[test]
    fn prop_idempotent(
        mass in 1.0f64..1e4,
        velocity in 1.0f64..1e5,
        radius in radius_in_display(),
        phi in -360.0f64..360.0,
        beta in 1u8..=4,
    ) {
        let model = DeflectionModel::default();
        let input = ImpactInput {
            impactor_mass: mass,
            impactor_velocity: velocity,
            target_mass: 4.3e10,
            orbit_radius: radius,
            impact_angle_deg: phi,
            beta: f64::from(beta),
        };
        prop_assert_eq!(model.compute(&input), model.compute(&input));
    }

    /// Orbital velocity falls off as 1/√r.
    #[test]
    fn prop_velocity_scales_inverse_sqrt(radius in radius_in_display()) {
        let near = compute_deflection(500.0, 6100.0, 4.3e10, radius, 0.0, 3.0);
        let far = compute_deflection(500.0, 6100.0, 4.3e10, radius * 4.0, 0.0, 3.0);
        let ratio = near.orbital_velocity / far.orbital_velocity;
        prop_assert!((ratio - 2.0).abs() < 1e-9, "ratio = {}", ratio);
    }
}
