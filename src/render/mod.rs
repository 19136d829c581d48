//! Rendering systems for the orrery.
//!
//! Spawns the Sun, the planets and their rings, and the starfield, and keeps
//! planet transforms in step with the live body positions.

mod background;
pub mod bodies;
pub mod sync;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::{reconcile_body_entities, CelestialBodyPlugin};
use self::sync::sync_body_transforms;
use crate::kinematics::update_body_positions;

pub use self::background::{star_position, STAR_COUNT, STAR_SHELL_DEPTH, STAR_SHELL_RADIUS};
pub use self::bodies::{ring_transform, OrbitingBody, PlanetRing, Sun};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CelestialBodyPlugin, BackgroundPlugin))
            // Entities must exist before their transforms are written.
            .add_systems(
                Update,
                (reconcile_body_entities, sync_body_transforms)
                    .chain()
                    .after(update_body_positions),
            );
    }
}
