//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts and the panel style.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    // Result colors are chosen for a light panel
    ctx.set_visuals(egui::Visuals::light());
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Run the impact
pub const PLAY: &str = egui_phosphor::regular::PLAY;
/// Run in progress
pub const IN_PROGRESS: &str = egui_phosphor::regular::HOURGLASS;
/// Replay after a finished run
pub const REPLAY: &str = egui_phosphor::regular::ARROW_CLOCKWISE;
/// Reset to defaults
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;

/// Kinetic impactor
pub const KINETIC: &str = egui_phosphor::regular::ROCKET;
/// Orbit
pub const ORBIT: &str = egui_phosphor::regular::PATH;
/// Impact angle
pub const ANGLE: &str = egui_phosphor::regular::COMPASS;
/// Ejecta plume
pub const EJECTA: &str = egui_phosphor::regular::SPARKLE;
/// Animation speed
pub const SPEED: &str = egui_phosphor::regular::GAUGE;

/// Orbit grew
pub const OUTWARD: &str = egui_phosphor::regular::ARROW_UP;
/// Orbit shrank
pub const INWARD: &str = egui_phosphor::regular::ARROW_DOWN;
/// No change
pub const NEUTRAL: &str = egui_phosphor::regular::MINUS;
