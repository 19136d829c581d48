//! Core value types and constants shared by the simulation and the camera.

use bevy::prelude::*;

/// Default camera position: high above the ecliptic, looking down at the Sun.
pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 20.0, 25.0);

/// Default look-at target (the central body).
pub const DEFAULT_LOOK_AT: Vec3 = Vec3::ZERO;

/// Simulation ticks per wall-clock second.
///
/// Angular speeds are expressed in radians per tick, so this is the
/// conversion between real seconds and orbital phase.
pub const TICKS_PER_SECOND: f64 = 60.0;

/// Camera pose: where the viewpoint sits and what it looks at.
///
/// Recomputed every frame, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// World-space camera position.
    pub camera_position: Vec3,
    /// World-space point the camera looks at.
    pub look_at: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Pose {
    /// The overview pose the camera returns to on deselection.
    pub const DEFAULT: Pose = Pose {
        camera_position: DEFAULT_CAMERA_POSITION,
        look_at: DEFAULT_LOOK_AT,
    };

    pub fn new(camera_position: Vec3, look_at: Vec3) -> Self {
        Self {
            camera_position,
            look_at,
        }
    }

    /// True when every component of both vectors is finite.
    pub fn is_finite(&self) -> bool {
        self.camera_position.is_finite() && self.look_at.is_finite()
    }

    /// Largest per-vector distance to another pose.
    pub fn distance(&self, other: &Pose) -> f32 {
        self.camera_position
            .distance(other.camera_position)
            .max(self.look_at.distance(other.look_at))
    }

    /// Transform for a camera at this pose.
    ///
    /// A camera sitting exactly on its target has no view direction; in that
    /// case it is lifted slightly so `looking_at` stays well defined.
    pub fn to_transform(&self) -> Transform {
        let mut eye = self.camera_position;
        if eye.distance_squared(self.look_at) < f32::EPSILON {
            eye += Vec3::Y * crate::choreography::MIN_VIEW_DISTANCE;
        }
        Transform::from_translation(eye).looking_at(self.look_at, Vec3::Y)
    }
}

/// Distance between two points projected onto the orbital (XZ) plane.
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}

/// Simulation clock resource tracking orbital time in ticks.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Ticks elapsed since start.
    pub ticks: f64,
    /// Time scale multiplier (1.0 = one tick per 1/60 s).
    pub scale: f64,
    /// Whether orbital motion is paused.
    pub paused: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            ticks: 0.0,
            scale: 1.0,
            paused: false,
        }
    }
}

impl SimulationClock {
    /// Advance by a wall-clock interval, honoring pause and scale.
    ///
    /// Returns the number of ticks actually advanced.
    pub fn advance(&mut self, delta_secs: f64) -> f64 {
        if self.paused {
            return 0.0;
        }
        let dt = delta_secs * TICKS_PER_SECOND * self.scale;
        self.ticks += dt;
        dt
    }

    /// Ticks advanced per wall-clock second at the current scale.
    pub fn tick_rate(&self) -> f64 {
        if self.paused {
            0.0
        } else {
            TICKS_PER_SECOND * self.scale
        }
    }

    /// Reset to tick zero and pause.
    pub fn reset(&mut self) {
        self.ticks = 0.0;
        self.paused = true;
    }
}
