//! Scene geometry: where things are drawn relative to the simulation state.

mod common;

use bevy::math::Vec2;
use deflecting::animation::{AnimationPhase, FrameQueue, impact_point};
use deflecting::params::ParameterEdit;
use deflecting::render::geometry::{arrow, dashed_line, impact_flash_alpha, polar_offset, to_render};

use common::{DEFAULT_TICK, seeded_simulation};

#[test]
fn test_impact_point_on_orbit_at_bearing_90() {
    let p = to_render(impact_point(200.0));
    assert!((p - Vec2::new(200.0, 0.0)).length() < 1e-4);
}

#[test]
fn test_impactor_approaches_along_ejecta_direction() {
    let mut sim = seeded_simulation();
    let mut queue = FrameQueue::default();
    // φ = 0: the impactor moves along +t̂, so it starts below the target
    sim.run(&mut queue);

    let snapshot = sim.snapshot();
    let impactor = snapshot.impactor_position().unwrap();
    let target = snapshot.impact_position();
    assert!((impactor.x - target.x).abs() < 1e-9);
    assert!((target.y - impactor.y - 375.0).abs() < 1e-9);
}

#[test]
fn test_impactor_follows_angle_edit() {
    let mut sim = seeded_simulation();
    let mut queue = FrameQueue::default();
    sim.edit(ParameterEdit::ImpactAngle(90.0), &mut queue).unwrap();
    sim.run(&mut queue);

    // Moving outward along n̂, the impactor comes from inside the orbit
    let snapshot = sim.snapshot();
    let impactor = snapshot.impactor_position().unwrap();
    assert!(impactor.x < snapshot.impact_position().x);
    assert!(impactor.y.abs() < 1e-9);
}

#[test]
fn test_asteroid_moves_with_interpolated_radius() {
    let mut sim = seeded_simulation();
    let mut queue = FrameQueue::default();
    sim.run(&mut queue);
    while sim.phase() != AnimationPhase::Shrinking {
        sim.step(DEFAULT_TICK);
    }
    sim.step(DEFAULT_TICK);

    let snapshot = sim.snapshot();
    let asteroid = snapshot.asteroid_position();
    assert!((asteroid.x - snapshot.current_radius).abs() < 1e-9);
    assert!(asteroid.x < snapshot.impact_position().x);
}

#[test]
fn test_arrowhead_wings_behind_tip() {
    let a = arrow(Vec2::ZERO, 0.0, 40.0, 8.0);
    let [tip, left, right] = a.head;
    assert!((tip - Vec2::new(0.0, 40.0)).length() < 1e-4);
    assert!(left.y < tip.y && right.y < tip.y);
    assert!((left.x + right.x).abs() < 1e-4);
    assert!((left.distance(tip) - 8.0).abs() < 1e-4);
}

#[test]
fn test_polar_offset_matches_bearing_convention() {
    let down = polar_offset(Vec2::ZERO, 180.0, 5.0);
    assert!((down - Vec2::new(0.0, -5.0)).length() < 1e-4);
}

#[test]
fn test_dashed_line_covers_path() {
    let dashes = dashed_line(Vec2::ZERO, Vec2::new(0.0, 60.0), 2.0, 4.0);
    assert_eq!(dashes.len(), 10);
    assert!(dashes.iter().all(|(a, b)| a.distance(*b) <= 2.0 + 1e-4));
    assert!(dashed_line(Vec2::ONE, Vec2::ONE, 2.0, 4.0).is_empty());
}

#[test]
fn test_flash_only_inside_target() {
    assert!(impact_flash_alpha(25.0, 10.0).is_none());
    let deep = impact_flash_alpha(2.0, 10.0).unwrap();
    let shallow = impact_flash_alpha(8.0, 10.0).unwrap();
    assert!(deep > shallow);
    assert!(deep <= 0.8);
}
