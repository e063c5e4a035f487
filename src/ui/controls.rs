//! Side panel with the parameter sliders and the run controls.
//!
//! Widgets never touch the simulation directly: every change is written as a
//! [`SimulationIntent`] and applied by the simulation systems.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::animation::{DeflectionSimulation, RunStatus, SimulationIntent};
use crate::camera::CONTROL_PANEL_WIDTH;
use crate::params::{EjectaLevel, ParameterEdit, SimulationParameters};
use crate::types::{MAX_DISPLAY_RADIUS, MIN_DISPLAY_RADIUS};
use crate::ui::{format, icons, results};

/// Slider ranges.
pub mod ranges {
    use std::ops::RangeInclusive;

    pub const IMPACTOR_MASS: RangeInclusive<f64> = 100.0..=1000.0;
    pub const IMPACTOR_MASS_STEP: f64 = 10.0;
    pub const IMPACTOR_VELOCITY: RangeInclusive<f64> = 1000.0..=10000.0;
    pub const IMPACTOR_VELOCITY_STEP: f64 = 100.0;
    pub const IMPACT_ANGLE: RangeInclusive<f64> = 0.0..=360.0;
    pub const EJECTA: RangeInclusive<u8> = 1..=4;
    pub const SPEED: RangeInclusive<f64> = 1.0..=10.0;
}

mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgb(245, 246, 250);
    pub const TITLE: Color32 = Color32::from_rgb(0, 0, 128);
    pub const RUN: Color32 = Color32::from_rgb(0, 128, 0);
    pub const BUSY: Color32 = Color32::from_rgb(150, 150, 160);
    pub const VALUE: Color32 = Color32::from_rgb(60, 60, 70);
}

/// What the play button shows for a run status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayButton {
    pub label: &'static str,
    pub icon: &'static str,
    pub enabled: bool,
}

pub fn play_button(status: RunStatus) -> PlayButton {
    match status {
        RunStatus::Ready => PlayButton {
            label: "RUN IMPACT SIMULATION",
            icon: icons::PLAY,
            enabled: true,
        },
        RunStatus::Running => PlayButton {
            label: "IMPACT IN PROGRESS...",
            icon: icons::IN_PROGRESS,
            enabled: false,
        },
        RunStatus::Finished => PlayButton {
            label: "REPLAY",
            icon: icons::REPLAY,
            enabled: true,
        },
    }
}

/// Ejecta slider caption, e.g. `3 (Medium Ejecta)`.
pub fn ejecta_caption(level: EjectaLevel) -> String {
    format!("{} ({} Ejecta)", level.ordinal(), level.label())
}

/// System that renders the control panel on the left.
pub fn control_panel_system(
    mut contexts: EguiContexts,
    simulation: Option<Res<DeflectionSimulation>>,
    mut intents: MessageWriter<SimulationIntent>,
) {
    let Some(simulation) = simulation else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("deflection_controls")
        .exact_width(CONTROL_PANEL_WIDTH)
        .resizable(false)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 12)),
        )
        .show(ctx, |ui| {
            ui.heading(
                egui::RichText::new(format!("{} Kinetic Impactor", icons::KINETIC))
                    .color(colors::TITLE)
                    .strong(),
            );
            ui.add_space(8.0);

            for edit in render_parameters(ui, simulation.params(), simulation.speed()) {
                intents.write(SimulationIntent::Edit(edit));
            }

            ui.add_space(12.0);
            if let Some(intent) = render_buttons(ui, &simulation) {
                intents.write(intent);
            }

            ui.add_space(12.0);
            ui.separator();
            results::render_results(ui, simulation.result());
        });
}

/// Draw the sliders and collect the edits made this frame.
fn render_parameters(
    ui: &mut egui::Ui,
    params: &SimulationParameters,
    speed: f64,
) -> Vec<ParameterEdit> {
    let mut edits = Vec::new();

    let mut mass = params.impactor_mass;
    if slider_row(
        ui,
        icons::KINETIC,
        "Impactor mass",
        format!("{mass} kg"),
        egui::Slider::new(&mut mass, ranges::IMPACTOR_MASS).step_by(ranges::IMPACTOR_MASS_STEP),
    ) {
        edits.push(ParameterEdit::ImpactorMass(mass));
    }

    let mut velocity = params.impactor_velocity;
    if slider_row(
        ui,
        icons::KINETIC,
        "Impactor velocity",
        format!("{velocity} m/s"),
        egui::Slider::new(&mut velocity, ranges::IMPACTOR_VELOCITY)
            .step_by(ranges::IMPACTOR_VELOCITY_STEP),
    ) {
        edits.push(ParameterEdit::ImpactorVelocity(velocity));
    }

    let mut radius = params.orbit_radius;
    if slider_row(
        ui,
        icons::ORBIT,
        "Orbit radius",
        format::radius_au(radius),
        egui::Slider::new(&mut radius, MIN_DISPLAY_RADIUS..=MAX_DISPLAY_RADIUS).step_by(1.0),
    ) {
        edits.push(ParameterEdit::OrbitRadius(radius));
    }

    let mut phi = params.impact_angle_deg;
    if slider_row(
        ui,
        icons::ANGLE,
        "Impact angle φ",
        format!("{phi}°"),
        egui::Slider::new(&mut phi, ranges::IMPACT_ANGLE).step_by(1.0),
    ) {
        edits.push(ParameterEdit::ImpactAngle(phi));
    }

    let mut beta = params.ejecta.ordinal();
    if slider_row(
        ui,
        icons::EJECTA,
        "Momentum enhancement β",
        ejecta_caption(params.ejecta),
        egui::Slider::new(&mut beta, ranges::EJECTA),
    ) {
        edits.push(ParameterEdit::Ejecta(beta));
    }

    let mut speed_value = speed;
    if slider_row(
        ui,
        icons::SPEED,
        "Animation speed",
        format::speed_label(speed).to_string(),
        egui::Slider::new(&mut speed_value, ranges::SPEED).step_by(1.0),
    ) {
        edits.push(ParameterEdit::Speed(speed_value));
    }

    edits
}

/// A titled slider with its formatted value. Returns whether it changed.
fn slider_row(
    ui: &mut egui::Ui,
    icon: &str,
    title: &str,
    value_text: String,
    slider: egui::Slider<'_>,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(format!("{icon} {title}"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(value_text).color(colors::VALUE).monospace());
        });
    });
    let changed = ui.add(slider.show_value(false)).changed();
    ui.add_space(4.0);
    changed
}

/// Play and reset buttons. Returns the intent of a clicked button.
fn render_buttons(
    ui: &mut egui::Ui,
    simulation: &DeflectionSimulation,
) -> Option<SimulationIntent> {
    let mut clicked = None;
    let play = play_button(simulation.status());
    let color = if play.enabled { colors::RUN } else { colors::BUSY };

    ui.vertical_centered_justified(|ui| {
        let button = egui::Button::new(
            egui::RichText::new(format!("{} {}", play.icon, play.label))
                .size(16.0)
                .color(color)
                .strong(),
        )
        .min_size(egui::vec2(0.0, 36.0));

        if ui
            .add_enabled(play.enabled, button)
            .on_hover_text("Space")
            .clicked()
        {
            clicked = simulation.primary_intent();
        }

        ui.add_space(4.0);
        if ui
            .button(format!("{} Reset to DART defaults", icons::RESET))
            .on_hover_text("R")
            .clicked()
        {
            clicked = Some(SimulationIntent::Reset);
        }
    });

    clicked
}
