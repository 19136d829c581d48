//! Common test utilities for integration tests.

#![allow(dead_code)]

use orrery::catalog::BodyCatalog;
use orrery::choreography::{CameraChoreographer, ChoreographyConfig};
use orrery::kinematics::{BodyPositions, OrbitPhases};
use orrery::types::{Pose, TICKS_PER_SECOND};

/// One frame at 60 Hz, in seconds.
pub const FRAME: f64 = 1.0 / 60.0;

/// Catalog, kinematics and choreographer stepped together, without Bevy.
pub struct Harness {
    pub catalog: BodyCatalog,
    pub phases: OrbitPhases,
    pub positions: BodyPositions,
    pub engine: CameraChoreographer,
    pub now: f64,
}

impl Harness {
    pub fn new() -> Self {
        let catalog = BodyCatalog::default();
        let engine =
            CameraChoreographer::with_bodies(ChoreographyConfig::default(), catalog.iter().cloned());
        let mut harness = Self {
            catalog,
            phases: OrbitPhases::default(),
            positions: BodyPositions::new(),
            engine,
            now: 0.0,
        };
        harness.refresh_positions();
        harness
    }

    fn refresh_positions(&mut self) {
        self.phases
            .sync_to(&self.catalog, self.now * TICKS_PER_SECOND);
        self.phases
            .write_positions(&self.catalog, &mut self.positions);
    }

    /// Push catalog edits to the choreographer.
    pub fn sync_catalog(&mut self) {
        self.engine.sync_bodies(self.catalog.iter().cloned());
    }

    /// Advance one frame and return the rendered pose.
    pub fn step(&mut self) -> Pose {
        self.now += FRAME;
        self.refresh_positions();
        self.engine.tick(self.now, &self.positions)
    }

    /// Advance `seconds` worth of frames, returning every pose.
    pub fn run(&mut self, seconds: f64) -> Vec<Pose> {
        let frames = (seconds / FRAME).round() as usize;
        (0..frames).map(|_| self.step()).collect()
    }
}

/// Largest distance between consecutive poses.
pub fn max_step(poses: &[Pose]) -> f32 {
    poses
        .windows(2)
        .map(|pair| pair[0].distance(&pair[1]))
        .fold(0.0, f32::max)
}
