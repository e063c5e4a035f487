//! Camera for the deflection scene.
//!
//! A fixed 2D orthographic camera with the Sun at the world origin. The
//! scene is framed in a canvas of `CANVAS_WIDTH × CANVAS_HEIGHT` visual
//! units; the camera scale is refit whenever the window resizes so the whole
//! canvas stays visible beside the control panel.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::types::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Width of the egui control panel in logical pixels.
pub const CONTROL_PANEL_WIDTH: f32 = 320.0;

/// Margin kept around the canvas (logical pixels).
pub const CANVAS_MARGIN: f32 = 24.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing the scene camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, fit_canvas_on_resize);
    }
}

/// Orthographic scale that fits the canvas into a viewport of the given size.
///
/// The usable width excludes the control panel. Never returns less than a
/// small positive value so a minimized window does not collapse the view.
pub fn canvas_fit_scale(window_width: f32, window_height: f32) -> f32 {
    let usable_w = (window_width - CONTROL_PANEL_WIDTH - 2.0 * CANVAS_MARGIN).max(1.0);
    let usable_h = (window_height - 2.0 * CANVAS_MARGIN).max(1.0);
    let scale = (CANVAS_WIDTH as f32 / usable_w).max(CANVAS_HEIGHT as f32 / usable_h);
    scale.max(0.01)
}

/// Horizontal camera offset (world units) that centers the canvas to the
/// right of the control panel.
pub fn canvas_offset_x(scale: f32) -> f32 {
    -CONTROL_PANEL_WIDTH * 0.5 * scale
}

/// Spawn the main camera.
fn setup_camera(mut commands: Commands, windows: Query<&Window, With<PrimaryWindow>>) {
    let Ok(window) = windows.single() else {
        warn!("No primary window, deflection scene camera not spawned");
        return;
    };

    let scale = canvas_fit_scale(window.width(), window.height());
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(canvas_offset_x(scale), 0.0, 0.0),
        MainCamera,
    ));
}

/// Refit the canvas when the window size changes.
fn fit_canvas_on_resize(
    mut resized: MessageReader<WindowResized>,
    mut camera_query: Query<(&mut Projection, &mut Transform), With<MainCamera>>,
) {
    let Some(event) = resized.read().last() else {
        return;
    };

    let Ok((mut projection, mut transform)) = camera_query.single_mut() else {
        return;
    };

    let Projection::Orthographic(ref mut ortho) = *projection else {
        return;
    };

    ortho.scale = canvas_fit_scale(event.width, event.height);
    transform.translation.x = canvas_offset_x(ortho.scale);
}
