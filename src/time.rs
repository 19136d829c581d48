//! Time advancement for the orbital simulation.
//!
//! Handles progression of simulation ticks based on scale and pause state.

use bevy::prelude::*;

use crate::types::SimulationClock;

/// Plugin providing time advancement functionality.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Update, advance_clock);
    }
}

/// Advance simulation ticks from the real frame delta.
pub fn advance_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.advance(time.delta_secs_f64());
}
