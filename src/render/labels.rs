//! Unit vector labels using egui for text rendering.
//!
//! Each arrow gets its letter near the tip with a small hat drawn above it.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::animation::DeflectionSimulation;
use crate::camera::MainCamera;
use crate::render::geometry::to_render;
use crate::render::vectors::{unit_vectors, vector_arrow};

const LABEL_FONT_SIZE: f32 = 18.0;
const HAT_WIDTH: f32 = 8.0;
const HAT_HEIGHT: f32 = 4.0;
/// Gap between the label's center and the hat's base, in screen pixels.
const HAT_OFFSET: f32 = 13.0;

fn to_color32(color: Color) -> egui::Color32 {
    let c = color.to_srgba();
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(c.red),
        channel(c.green),
        channel(c.blue),
        channel(c.alpha),
    )
}

/// Draw the t̂, n̂, ŝ, and ê labels.
pub fn draw_vector_labels(
    mut contexts: EguiContexts,
    simulation: Option<Res<DeflectionSimulation>>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) {
    let Some(simulation) = simulation else {
        return;
    };
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let snapshot = simulation.snapshot();
    let origin = to_render(snapshot.impact_position());
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("vector_labels"),
    ));

    for vector in unit_vectors(snapshot.params.impact_angle_deg) {
        let arrow = vector_arrow(origin, &vector);
        let Ok(screen_pos) = camera.world_to_viewport(camera_transform, arrow.label.extend(0.0))
        else {
            continue;
        };

        let color = to_color32(vector.color);
        let center = egui::pos2(screen_pos.x, screen_pos.y);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            vector.symbol,
            egui::FontId::proportional(LABEL_FONT_SIZE),
            color,
        );

        let base_y = center.y - HAT_OFFSET;
        let stroke = egui::Stroke::new(2.0, color);
        let apex = egui::pos2(center.x, base_y - HAT_HEIGHT);
        painter.line_segment([egui::pos2(center.x - HAT_WIDTH / 2.0, base_y), apex], stroke);
        painter.line_segment([apex, egui::pos2(center.x + HAT_WIDTH / 2.0, base_y)], stroke);
    }
}
