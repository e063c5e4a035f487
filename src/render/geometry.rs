//! Pure 2D geometry used by the scene drawing systems.
//!
//! Bearings are in degrees, measured clockwise from screen-up (+y), matching
//! the convention of the simulation: bearing 0 is the orbit tangent t̂ at the
//! impact point and bearing 90 is the outward normal n̂.

use bevy::math::{DVec2, Vec2};

/// Distance between an arrow tip and its label.
pub const LABEL_GAP: f32 = 10.0;

/// Half-angle of an arrowhead (degrees).
pub const ARROWHEAD_HALF_ANGLE: f32 = 30.0;

/// Convert a simulation position to render coordinates.
pub fn to_render(pos: DVec2) -> Vec2 {
    pos.as_vec2()
}

/// Point at `distance` from `origin` along `bearing_deg`.
pub fn polar_offset(origin: Vec2, bearing_deg: f32, distance: f32) -> Vec2 {
    let rad = bearing_deg.to_radians();
    origin + Vec2::new(rad.sin(), rad.cos()) * distance
}

/// Chords approximating a circle.
pub fn circle_segments(
    center: Vec2,
    radius: f32,
    segments: u32,
) -> impl Iterator<Item = (Vec2, Vec2)> {
    let segments = segments.max(3);
    let angle_step = std::f32::consts::TAU / segments as f32;
    (0..segments).map(move |i| {
        let a1 = i as f32 * angle_step;
        let a2 = (i + 1) as f32 * angle_step;
        (
            center + Vec2::new(a1.cos(), a1.sin()) * radius,
            center + Vec2::new(a2.cos(), a2.sin()) * radius,
        )
    })
}

/// Chords of a dashed circle: `dash_on` segments drawn, then `dash_off` skipped.
pub fn dashed_circle_segments(
    center: Vec2,
    radius: f32,
    segments: u32,
    dash_on: u32,
    dash_off: u32,
) -> impl Iterator<Item = (Vec2, Vec2)> {
    let period = (dash_on + dash_off).max(1);
    circle_segments(center, radius, segments)
        .enumerate()
        .filter(move |(i, _)| (*i as u32) % period < dash_on)
        .map(|(_, seg)| seg)
}

/// Dashes along a straight line, starting with a dash at `start`.
pub fn dashed_line(start: Vec2, end: Vec2, dash: f32, gap: f32) -> Vec<(Vec2, Vec2)> {
    let length = start.distance(end);
    if length <= f32::EPSILON || dash <= 0.0 {
        return Vec::new();
    }

    let dir = (end - start) / length;
    let period = dash + gap.max(0.0);
    let mut dashes = Vec::with_capacity((length / period) as usize + 1);
    let mut t = 0.0;
    while t < length {
        let t_end = (t + dash).min(length);
        dashes.push((start + dir * t, start + dir * t_end));
        t += period;
    }
    dashes
}

/// Line work for a labelled vector arrow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrow {
    /// Shaft from start to tip.
    pub shaft: (Vec2, Vec2),
    /// Arrowhead triangle: tip, then the two wing points.
    pub head: [Vec2; 3],
    /// Where the label is centered.
    pub label: Vec2,
}

/// Build an arrow of `length` pointing along `bearing_deg`.
pub fn arrow(start: Vec2, bearing_deg: f32, length: f32, head_length: f32) -> Arrow {
    let tip = polar_offset(start, bearing_deg, length);
    let back = bearing_deg + 180.0;
    Arrow {
        shaft: (start, tip),
        head: [
            tip,
            polar_offset(tip, back - ARROWHEAD_HALF_ANGLE, head_length),
            polar_offset(tip, back + ARROWHEAD_HALF_ANGLE, head_length),
        ],
        label: polar_offset(start, bearing_deg, length + LABEL_GAP),
    }
}

/// Opacity of the impact flash, present while the impactor is inside the target.
pub fn impact_flash_alpha(impactor_distance: f64, target_radius: f64) -> Option<f32> {
    if impactor_distance < target_radius && target_radius > 0.0 {
        Some(((target_radius - impactor_distance) / target_radius * 0.8) as f32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_offset_cardinals() {
        let up = polar_offset(Vec2::ZERO, 0.0, 10.0);
        assert!((up - Vec2::new(0.0, 10.0)).length() < 1e-4);
        let right = polar_offset(Vec2::ZERO, 90.0, 10.0);
        assert!((right - Vec2::new(10.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_circle_segments_closed() {
        let segs: Vec<_> = circle_segments(Vec2::new(1.0, 2.0), 5.0, 16).collect();
        assert_eq!(segs.len(), 16);
        for (a, b) in &segs {
            assert!((a.distance(Vec2::new(1.0, 2.0)) - 5.0).abs() < 1e-4);
            assert!((b.distance(Vec2::new(1.0, 2.0)) - 5.0).abs() < 1e-4);
        }
        let first = segs[0].0;
        let last = segs[15].1;
        assert!(first.distance(last) < 1e-3);
    }

    #[test]
    fn test_dashed_circle_drops_gaps() {
        let count = dashed_circle_segments(Vec2::ZERO, 100.0, 100, 2, 3).count();
        assert_eq!(count, 40);
    }

    #[test]
    fn test_flash_alpha() {
        assert_eq!(impact_flash_alpha(10.0, 10.0), None);
        assert_eq!(impact_flash_alpha(12.0, 10.0), None);
        let alpha = impact_flash_alpha(5.0, 10.0).unwrap();
        assert!((alpha - 0.4).abs() < 1e-6);
    }
}
