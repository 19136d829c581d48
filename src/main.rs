//! Orrery - a small solar system with a choreographed camera
//!
//! Pick a planet from the control panel (or press 1-8) and the camera flies
//! to it and follows it along its orbit. Escape returns to the overview.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::catalog::{BodyCatalog, BodyParameterRanges};
use orrery::choreography::ChoreographyConfig;
use orrery::input::InputPlugin;
use orrery::kinematics::KinematicsPlugin;
use orrery::render::RenderPlugin;
use orrery::time::TimePlugin;
use orrery::types::SimulationClock;
use orrery::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(BodyCatalog::default())
        .insert_resource(BodyParameterRanges::default())
        .insert_resource(ChoreographyConfig::default())
        .insert_resource(SimulationClock::default())
        .add_plugins((
            TimePlugin,
            KinematicsPlugin,
            CameraPlugin,
            RenderPlugin,
            InputPlugin,
            UiPlugin,
        ))
        .run();
}
