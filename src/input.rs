//! Keyboard shortcuts.
//!
//! Digits 1-8 focus the body at that catalog position, Escape returns to the
//! overview, Space pauses orbital motion and R rewinds the orbits.

use bevy::prelude::*;

use crate::camera::SelectBodyRequest;
use crate::catalog::BodyCatalog;
use crate::kinematics::OrbitPhases;
use crate::types::SimulationClock;

/// Keys that select bodies by catalog position.
pub const BODY_KEYS: [KeyCode; 8] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
];

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<BodyCatalog>()
            .init_resource::<SimulationClock>()
            .init_resource::<OrbitPhases>()
            .add_message::<SelectBodyRequest>()
            .add_systems(Update, (selection_shortcuts, clock_shortcuts));
    }
}

/// Turn digit and Escape presses into selection requests.
fn selection_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    catalog: Res<BodyCatalog>,
    mut requests: MessageWriter<SelectBodyRequest>,
) {
    for (index, key) in BODY_KEYS.iter().enumerate() {
        if !keys.just_pressed(*key) {
            continue;
        }
        match catalog.nth(index) {
            Some(body) => {
                requests.write(SelectBodyRequest::body(body.name.clone()));
            }
            None => debug!("No body at position {}", index + 1),
        }
    }

    if keys.just_pressed(KeyCode::Escape) {
        requests.write(SelectBodyRequest::overview());
    }
}

/// Space toggles pause; R rewinds every orbit to its starting angle.
fn clock_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SimulationClock>,
    mut phases: ResMut<OrbitPhases>,
) {
    if keys.just_pressed(KeyCode::Space) {
        clock.paused = !clock.paused;
        info!("Orbits {}", if clock.paused { "paused" } else { "running" });
    }

    if keys.just_pressed(KeyCode::KeyR) {
        clock.reset();
        phases.reset();
        info!("Orbits reset");
    }
}
