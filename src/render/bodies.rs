//! Mesh bodies of the scene: the Sun, the target asteroid, and the impactor.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::animation::DeflectionSimulation;
use crate::render::geometry::{circle_segments, to_render};
use crate::render::{palette, z_layers};
use crate::types::{ASTEROID_VISUAL_RADIUS, SUN_VISUAL_RADIUS};

/// Drawn radius of the impactor.
pub const IMPACTOR_VISUAL_RADIUS: f32 = 5.0;

/// Marker for the Sun mesh.
#[derive(Component)]
pub struct SunBody;

/// Marker for the target asteroid mesh.
#[derive(Component)]
pub struct TargetAsteroid;

/// Marker for the impactor mesh.
#[derive(Component)]
pub struct ImpactorBody;

/// Spawn the scene meshes.
///
/// Skipped with a warning when there is no window to draw into.
pub fn spawn_scene_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    windows: Query<(), With<PrimaryWindow>>,
) {
    if windows.is_empty() {
        warn!("No primary window, deflection scene not drawn");
        return;
    }

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(SUN_VISUAL_RADIUS as f32))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(palette::SUN))),
        Transform::from_xyz(0.0, 0.0, z_layers::SUN),
        SunBody,
    ));

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(ASTEROID_VISUAL_RADIUS as f32))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(palette::ASTEROID))),
        Transform::from_xyz(0.0, 0.0, z_layers::ASTEROID),
        TargetAsteroid,
    ));

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(IMPACTOR_VISUAL_RADIUS))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(palette::IMPACTOR))),
        Transform::from_xyz(0.0, 0.0, z_layers::IMPACTOR),
        Visibility::Hidden,
        ImpactorBody,
    ));

    info!("Spawned deflection scene bodies");
}

/// Move the asteroid and impactor to their snapshot positions.
///
/// The impactor is hidden once it has rebounded out of the scene.
pub fn sync_scene_bodies(
    simulation: Option<Res<DeflectionSimulation>>,
    mut asteroid: Query<&mut Transform, (With<TargetAsteroid>, Without<ImpactorBody>)>,
    mut impactor: Query<
        (&mut Transform, &mut Visibility),
        (With<ImpactorBody>, Without<TargetAsteroid>),
    >,
) {
    let Some(simulation) = simulation else {
        return;
    };
    let snapshot = simulation.snapshot();

    if let Ok(mut transform) = asteroid.single_mut() {
        let pos = to_render(snapshot.asteroid_position());
        transform.translation = pos.extend(z_layers::ASTEROID);
    }

    if let Ok((mut transform, mut visibility)) = impactor.single_mut() {
        match snapshot.impactor_position() {
            Some(pos) => {
                transform.translation = to_render(pos).extend(z_layers::IMPACTOR);
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

/// Thin outline around the target asteroid.
pub fn draw_asteroid_outline(simulation: Option<Res<DeflectionSimulation>>, mut gizmos: Gizmos) {
    let Some(simulation) = simulation else {
        return;
    };
    let center = to_render(simulation.snapshot().asteroid_position());
    for (a, b) in circle_segments(center, ASTEROID_VISUAL_RADIUS as f32, 32) {
        gizmos.line_2d(a, b, palette::ASTEROID_OUTLINE);
    }
}
