//! UI module providing the egui control and result panel.

mod controls;
pub mod format;
pub mod icons;
mod results;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use controls::{PlayButton, ejecta_caption, play_button};
pub use results::direction_color;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                controls::control_panel_system
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
