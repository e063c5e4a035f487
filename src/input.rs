//! Keyboard shortcuts.
//!
//! Space presses the play button (run, or replay after a finished run).
//! R resets to the DART defaults. Keys are ignored while egui has keyboard
//! focus, so typing in a widget does not trigger them.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::animation::{DeflectionSimulation, SimulationIntent, SimulationSet};

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts.before(SimulationSet));
    }
}

/// Map a just-pressed key to an intent.
///
/// `primary` is the play button's current intent, `None` while it is disabled.
pub fn shortcut_intent(
    keys: &ButtonInput<KeyCode>,
    primary: Option<SimulationIntent>,
) -> Option<SimulationIntent> {
    if keys.just_pressed(KeyCode::KeyR) {
        return Some(SimulationIntent::Reset);
    }
    if keys.just_pressed(KeyCode::Space) {
        return primary;
    }
    None
}

fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    simulation: Option<Res<DeflectionSimulation>>,
    mut contexts: EguiContexts,
    mut intents: MessageWriter<SimulationIntent>,
) {
    let Some(simulation) = simulation else {
        return;
    };

    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    if let Some(intent) = shortcut_intent(&keys, simulation.primary_intent()) {
        info!("Shortcut: {:?}", intent);
        intents.write(intent);
    }
}
