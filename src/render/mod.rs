//! Rendering of the deflection scene.
//!
//! The Sun, target asteroid, and impactor are 2D meshes whose transforms
//! are synced from the simulation snapshot each frame. Orbits, unit vectors,
//! the approach path, the impact flash, and ejecta are immediate-mode gizmo
//! line work. Vector labels are painted with egui.

pub mod bodies;
mod effects;
pub mod geometry;
mod labels;
mod orbits;
mod vectors;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::animation::SimulationSet;

pub use self::bodies::{ImpactorBody, SunBody, TargetAsteroid};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(palette::CANVAS))
            .add_systems(Startup, bodies::spawn_scene_bodies)
            // Bodies sync first so the line work matches this frame's positions
            .add_systems(
                Update,
                (
                    bodies::sync_scene_bodies,
                    (
                        orbits::draw_orbits,
                        bodies::draw_asteroid_outline,
                        vectors::draw_unit_vectors,
                        effects::draw_approach_path,
                        effects::draw_impact_flash,
                        effects::draw_ejecta,
                    ),
                )
                    .chain()
                    .after(SimulationSet),
            )
            .add_systems(EguiPrimaryContextPass, labels::draw_vector_labels);
    }
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// The Sun.
    pub const SUN: f32 = 1.0;
    /// Target asteroid.
    pub const ASTEROID: f32 = 2.0;
    /// Impactor spacecraft.
    pub const IMPACTOR: f32 = 3.0;
}

/// Scene colors.
pub mod palette {
    use bevy::prelude::*;

    /// Canvas background, #000080.
    pub const CANVAS: Color = Color::srgb(0.0, 0.0, 0.502);
    pub const SUN: Color = Color::srgb(1.0, 1.0, 0.0);
    /// Target asteroid fill, #6A0505.
    pub const ASTEROID: Color = Color::srgb(0.416, 0.020, 0.020);
    pub const ASTEROID_OUTLINE: Color = Color::srgba(1.0, 1.0, 1.0, 0.7);
    pub const IMPACTOR: Color = Color::srgb(0.0, 1.0, 1.0);
    pub const ORBIT: Color = Color::WHITE;
    pub const ORBIT_EXPANDED: Color = Color::srgb(0.0, 1.0, 0.0);
    pub const ORBIT_SHRUNK: Color = Color::srgb(1.0, 0.0, 0.0);
    pub const APPROACH_PATH: Color = Color::srgba(1.0, 1.0, 1.0, 0.3);
    /// Tangent t̂.
    pub const TANGENT: Color = Color::srgb(0.0, 1.0, 0.0);
    /// Normal n̂.
    pub const NORMAL: Color = Color::srgb(1.0, 1.0, 0.0);
    /// Impactor direction ŝ.
    pub const IMPACTOR_DIR: Color = Color::srgb(0.0, 1.0, 1.0);
    /// Ejecta direction ê.
    pub const EJECTA_DIR: Color = Color::srgb(1.0, 0.647, 0.0);

    /// Yellow impact flash at the given opacity.
    pub fn flash(alpha: f32) -> Color {
        Color::srgba(1.0, 1.0, 0.0, alpha)
    }

    /// Ejecta particle gray at the given opacity.
    pub fn ejecta(opacity: f64) -> Color {
        let gray = 200.0 / 255.0;
        Color::srgba(gray, gray, gray, opacity.clamp(0.0, 1.0) as f32)
    }
}
