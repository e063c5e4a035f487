//! Impact effects: the impactor's approach path, the impact flash, and the
//! ejecta plume.

use bevy::prelude::*;

use crate::animation::{AnimationPhase, DeflectionSimulation};
use crate::ejecta::EjectaParticle;
use crate::render::geometry::{circle_segments, dashed_line, impact_flash_alpha, to_render};
use crate::render::palette;
use crate::types::ASTEROID_VISUAL_RADIUS;

/// Outer radius of the impact flash.
const FLASH_RADIUS: f32 = 25.0;

/// Spacing of the rings that fill the flash disc.
const FLASH_RING_STEP: f32 = 2.0;

/// Approach path dash pattern (visual units).
const PATH_DASH: f32 = 2.0;
const PATH_GAP: f32 = 4.0;

/// Dashed line from the approaching impactor to the impact point.
///
/// Drawn only while closing in, and only while the impactor is outside the
/// target.
pub fn draw_approach_path(simulation: Option<Res<DeflectionSimulation>>, mut gizmos: Gizmos) {
    let Some(simulation) = simulation else {
        return;
    };
    let snapshot = simulation.snapshot();
    if snapshot.phase != AnimationPhase::Initial {
        return;
    }
    let Some(distance) = snapshot.impactor_distance else {
        return;
    };
    if distance <= ASTEROID_VISUAL_RADIUS {
        return;
    }
    let Some(impactor) = snapshot.impactor_position() else {
        return;
    };

    let start = to_render(impactor);
    let end = to_render(snapshot.impact_position());
    for (a, b) in dashed_line(start, end, PATH_DASH, PATH_GAP) {
        gizmos.line_2d(a, b, palette::APPROACH_PATH);
    }
}

/// Yellow flash around the impact point while the impactor is in contact.
pub fn draw_impact_flash(simulation: Option<Res<DeflectionSimulation>>, mut gizmos: Gizmos) {
    let Some(simulation) = simulation else {
        return;
    };
    let snapshot = simulation.snapshot();
    let Some(distance) = snapshot.impactor_distance else {
        return;
    };
    let Some(alpha) = impact_flash_alpha(distance, ASTEROID_VISUAL_RADIUS) else {
        return;
    };

    let center = to_render(snapshot.impact_position());
    let color = palette::flash(alpha);
    let mut radius = FLASH_RING_STEP;
    while radius <= FLASH_RADIUS {
        draw_circle_segments(&mut gizmos, center, radius, color, 24);
        radius += FLASH_RING_STEP;
    }
}

/// Ejecta particles, each a small gray disc at its current opacity.
pub fn draw_ejecta(simulation: Option<Res<DeflectionSimulation>>, mut gizmos: Gizmos) {
    let Some(simulation) = simulation else {
        return;
    };

    for particle in simulation.snapshot().particles {
        draw_particle(&mut gizmos, particle);
    }
}

fn draw_particle(gizmos: &mut Gizmos, particle: &EjectaParticle) {
    let center = to_render(particle.pos);
    let color = palette::ejecta(particle.opacity);
    let size = particle.size as f32;
    draw_circle_segments(gizmos, center, size, color, 8);
    if size > 1.5 {
        draw_circle_segments(gizmos, center, size * 0.5, color, 6);
    }
}

fn draw_circle_segments(
    gizmos: &mut Gizmos,
    center: Vec2,
    radius: f32,
    color: Color,
    segments: u32,
) {
    for (a, b) in circle_segments(center, radius, segments) {
        gizmos.line_2d(a, b, color);
    }
}
