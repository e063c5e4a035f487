//! Deflecting - Kinetic Impactor Simulator
//!
//! A desktop application showing how a DART-style kinetic impact changes an
//! asteroid's heliocentric orbit.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use deflecting::animation::SimulationPlugin;
use deflecting::camera::CameraPlugin;
use deflecting::config::SimulationConfig;
use deflecting::input::InputPlugin;
use deflecting::render::RenderPlugin;
use deflecting::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Kinetic Impactor Deflection".into(),
                resolution: (1000, 560).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(SimulationConfig::default())
        .add_plugins((SimulationPlugin, CameraPlugin, RenderPlugin, UiPlugin, InputPlugin))
        .run();
}
