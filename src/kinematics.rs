//! Circular orbit kinematics.
//!
//! Each body carries an accumulated orbital angle, integrated as
//! `θ += angular_speed · dt` so speed edits never make a body jump.
//! The positions derived from these angles are published every frame in a
//! `BodyPositions` registry, which is what the camera reads.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::catalog::{Body, BodyCatalog};
use crate::time::advance_clock;
use crate::types::SimulationClock;

/// World position of a body at orbital angle `angle`.
pub fn orbit_position(body: &Body, angle: f32) -> Vec3 {
    Vec3::new(
        angle.cos() * body.orbit_radius,
        0.0,
        angle.sin() * body.orbit_radius,
    )
}

/// Live world positions of every body, keyed by name.
///
/// Rebuilt every frame; consumers must not hold on to it across frames.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct BodyPositions {
    positions: HashMap<String, Vec3>,
}

impl BodyPositions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, position: Vec3) {
        self.positions.insert(name.into(), position);
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec3> {
        self.positions.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<Vec3> {
        self.positions.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}

impl FromIterator<(String, Vec3)> for BodyPositions {
    fn from_iter<T: IntoIterator<Item = (String, Vec3)>>(iter: T) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

/// Accumulated orbital angle per body.
#[derive(Resource, Clone, Debug, Default)]
pub struct OrbitPhases {
    angles: HashMap<String, f32>,
    /// Clock tick the angles were last integrated to.
    synced_ticks: f64,
}

impl OrbitPhases {
    /// Current angle of a body; bodies start at angle zero.
    pub fn angle(&self, name: &str) -> f32 {
        self.angles.get(name).copied().unwrap_or(0.0)
    }

    /// Integrate every body's angle forward by `dt_ticks`.
    ///
    /// Angles of bodies no longer in the catalog are discarded.
    pub fn advance(&mut self, catalog: &BodyCatalog, dt_ticks: f32) {
        self.angles.retain(|name, _| catalog.contains(name));
        for body in catalog.iter() {
            let angle = self.angles.entry(body.name.clone()).or_insert(0.0);
            *angle = (*angle + body.angular_speed * dt_ticks).rem_euclid(std::f32::consts::TAU);
        }
    }

    /// Integrate up to the clock's current tick.
    pub fn sync_to(&mut self, catalog: &BodyCatalog, ticks: f64) {
        let dt = ticks - self.synced_ticks;
        self.synced_ticks = ticks;
        self.advance(catalog, dt as f32);
    }

    /// Rewind every body to angle zero at tick zero.
    pub fn reset(&mut self) {
        self.angles.clear();
        self.synced_ticks = 0.0;
    }

    /// Fill `positions` with every catalog body's current position.
    pub fn write_positions(&self, catalog: &BodyCatalog, positions: &mut BodyPositions) {
        positions.clear();
        for body in catalog.iter() {
            positions.insert(body.name.clone(), orbit_position(body, self.angle(&body.name)));
        }
    }
}

/// Plugin integrating orbits and publishing `BodyPositions`.
pub struct KinematicsPlugin;

impl Plugin for KinematicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyCatalog>()
            .init_resource::<OrbitPhases>()
            .init_resource::<BodyPositions>()
            .add_systems(Update, update_body_positions.after(advance_clock));
    }
}

/// Integrate orbits to the current tick and rebuild the position registry.
pub fn update_body_positions(
    catalog: Res<BodyCatalog>,
    clock: Res<SimulationClock>,
    mut phases: ResMut<OrbitPhases>,
    mut positions: ResMut<BodyPositions>,
) {
    phases.sync_to(&catalog, clock.ticks);
    phases.write_positions(&catalog, &mut positions);
}
