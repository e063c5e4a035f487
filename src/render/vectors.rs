//! Unit vector arrows at the impact point.

use bevy::prelude::*;

use crate::animation::DeflectionSimulation;
use crate::render::geometry::{Arrow, arrow, to_render};
use crate::render::palette;

/// Shaft length of each unit vector arrow.
pub const VECTOR_LENGTH: f32 = 40.0;

/// Arrowhead side length.
pub const ARROWHEAD_LENGTH: f32 = 8.0;

/// One labelled unit vector.
#[derive(Clone, Copy, Debug)]
pub struct UnitVector {
    pub symbol: &'static str,
    pub bearing_deg: f32,
    pub color: Color,
}

/// The four unit vectors for an impact angle: t̂ (tangent), n̂ (outward
/// normal), ŝ (impactor direction), and ê (ejecta direction).
pub fn unit_vectors(impact_angle_deg: f64) -> [UnitVector; 4] {
    let phi = impact_angle_deg as f32;
    [
        UnitVector {
            symbol: "t",
            bearing_deg: 0.0,
            color: palette::TANGENT,
        },
        UnitVector {
            symbol: "n",
            bearing_deg: 90.0,
            color: palette::NORMAL,
        },
        UnitVector {
            symbol: "s",
            bearing_deg: phi,
            color: palette::IMPACTOR_DIR,
        },
        UnitVector {
            symbol: "e",
            bearing_deg: phi + 180.0,
            color: palette::EJECTA_DIR,
        },
    ]
}

/// Arrow geometry of a unit vector anchored at `origin`.
pub fn vector_arrow(origin: Vec2, vector: &UnitVector) -> Arrow {
    arrow(origin, vector.bearing_deg, VECTOR_LENGTH, ARROWHEAD_LENGTH)
}

pub fn draw_unit_vectors(simulation: Option<Res<DeflectionSimulation>>, mut gizmos: Gizmos) {
    let Some(simulation) = simulation else {
        return;
    };
    let snapshot = simulation.snapshot();
    let origin = to_render(snapshot.impact_position());

    for vector in unit_vectors(snapshot.params.impact_angle_deg) {
        let arrow = vector_arrow(origin, &vector);
        gizmos.line_2d(arrow.shaft.0, arrow.shaft.1, vector.color);
        let [tip, left, right] = arrow.head;
        gizmos.line_2d(tip, left, vector.color);
        gizmos.line_2d(left, right, vector.color);
        gizmos.line_2d(right, tip, vector.color);
    }
}
