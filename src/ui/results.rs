//! Result display: orbital velocity, tangential Δv, and Δa/a.

use bevy_egui::egui;

use crate::physics::{DeflectionDirection, DeflectionResult};
use crate::ui::{format, icons};

/// Text color for a deflection direction.
pub fn direction_color(direction: DeflectionDirection) -> egui::Color32 {
    match direction {
        DeflectionDirection::Outward => egui::Color32::from_rgb(0x00, 0x80, 0x00),
        DeflectionDirection::Inward => egui::Color32::from_rgb(0xCC, 0x37, 0x00),
        DeflectionDirection::None => egui::Color32::from_rgb(0x00, 0x00, 0x80),
    }
}

fn direction_caption(direction: DeflectionDirection) -> String {
    match direction {
        DeflectionDirection::Outward => format!("{} Orbit expands", icons::OUTWARD),
        DeflectionDirection::Inward => format!("{} Orbit shrinks", icons::INWARD),
        DeflectionDirection::None => format!("{} No change", icons::NEUTRAL),
    }
}

pub fn render_results(ui: &mut egui::Ui, result: &DeflectionResult) {
    let direction = result.direction();
    let color = direction_color(direction);

    egui::Grid::new("deflection_results")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Orbital velocity v");
            ui.label(
                egui::RichText::new(format!(
                    "{} km/s",
                    format::velocity_kms(result.orbital_velocity)
                ))
                .monospace(),
            );
            ui.end_row();

            ui.label("Δv tangential");
            ui.label(
                egui::RichText::new(format!(
                    "{} m/s",
                    format::delta_v(result.delta_v_tangential)
                ))
                .monospace(),
            );
            ui.end_row();

            ui.label("Δa/a");
            ui.label(
                egui::RichText::new(format!("{} %", format::delta_a_percent(result.delta_a_over_a)))
                    .monospace()
                    .color(color)
                    .strong(),
            );
            ui.end_row();
        });

    ui.add_space(4.0);
    ui.label(egui::RichText::new(direction_caption(direction)).color(color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_colors_are_distinct() {
        let outward = direction_color(DeflectionDirection::Outward);
        let inward = direction_color(DeflectionDirection::Inward);
        let none = direction_color(DeflectionDirection::None);
        assert_ne!(outward, inward);
        assert_ne!(outward, none);
        assert_eq!(none, egui::Color32::from_rgb(0, 0, 128));
    }
}
