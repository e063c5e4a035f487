//! Deflection physics for a single kinetic impact.
//!
//! The model is a single-impulse, instantaneous momentum transfer on a
//! circular heliocentric orbit. It is pure: the same inputs always give the
//! same [`DeflectionResult`], which makes it safe to call from anywhere the
//! controller needs a fresh answer.

mod deflection;

#[cfg(test)]
mod proptest_physics;

pub use deflection::{
    DeflectionDirection, DeflectionModel, DeflectionResult, DisplayRange, ImpactInput,
    compute_deflection, cos_degrees,
};
