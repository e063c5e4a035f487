//! Orbit circles.
//!
//! Before the orbit change only the current orbit is drawn, solid white.
//! Once the orbit starts moving the original orbit turns dashed and the new
//! one is drawn solid: lime if it grew, red if it shrank.

use bevy::prelude::*;

use crate::animation::DeflectionSimulation;
use crate::render::geometry::{circle_segments, dashed_circle_segments};
use crate::render::palette;

/// Segments per orbit circle.
const ORBIT_SEGMENTS: u32 = 256;

/// Dash pattern for the original orbit, in segments.
const DASH_ON: u32 = 2;
const DASH_OFF: u32 = 2;

pub fn draw_orbits(simulation: Option<Res<DeflectionSimulation>>, mut gizmos: Gizmos) {
    let Some(simulation) = simulation else {
        return;
    };
    let snapshot = simulation.snapshot();

    if snapshot.shows_new_orbit() {
        let color = if snapshot.orbit_expanded() {
            palette::ORBIT_EXPANDED
        } else {
            palette::ORBIT_SHRUNK
        };
        for (a, b) in circle_segments(Vec2::ZERO, snapshot.target_radius as f32, ORBIT_SEGMENTS) {
            gizmos.line_2d(a, b, color);
        }

        for (a, b) in dashed_circle_segments(
            Vec2::ZERO,
            snapshot.initial_radius as f32,
            ORBIT_SEGMENTS,
            DASH_ON,
            DASH_OFF,
        ) {
            gizmos.line_2d(a, b, palette::ORBIT);
        }
    } else {
        for (a, b) in circle_segments(Vec2::ZERO, snapshot.current_radius as f32, ORBIT_SEGMENTS) {
            gizmos.line_2d(a, b, palette::ORBIT);
        }
    }
}
