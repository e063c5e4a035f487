//! Deflecting - Kinetic Impactor Simulator
//!
//! A library crate providing the deflection model, the impact animation
//! controller, and the Bevy plugins that draw and drive them.

pub mod animation;
pub mod camera;
pub mod config;
pub mod ejecta;
pub mod input;
pub mod params;
pub mod physics;
pub mod render;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
