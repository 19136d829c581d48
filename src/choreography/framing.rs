//! Framing: the camera pose that presents a body at a consistent
//! three-quarter angle.
//!
//! The view distance grows with body size so large bodies are framed
//! proportionally, and the camera sits π/4 ahead of the body's bearing from
//! the origin.

use std::f32::consts::FRAC_PI_4;

use bevy::prelude::*;

use crate::types::Pose;

/// Smallest view distance used for framing.
///
/// Bodies with non-positive size are a caller error; they get this distance
/// instead of a camera sitting inside the body.
pub const MIN_VIEW_DISTANCE: f32 = 1e-3;

/// Derived framing values for one body at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramingSpec {
    /// Planar distance from the body to the camera.
    pub view_distance: f32,
    /// Bearing used to place the camera, in radians.
    pub view_angle: f32,
    /// Camera height above the body.
    pub camera_height: f32,
    /// Resulting camera position.
    pub camera_position: Vec3,
    /// Resulting look-at target (the body itself).
    pub look_at: Vec3,
}

impl FramingSpec {
    pub fn pose(&self) -> Pose {
        Pose::new(self.camera_position, self.look_at)
    }
}

/// Compute the framing for a body of `body_size` at `body_position`.
///
/// Pure and deterministic. `body_size` is expected to be positive.
pub fn frame(body_position: Vec3, body_size: f32) -> FramingSpec {
    let view_distance = (body_size * 5.0 + 1.0).max(MIN_VIEW_DISTANCE);
    let view_angle = body_position.z.atan2(body_position.x) + FRAC_PI_4;
    let camera_height = body_size * 2.0 + 0.5;

    let camera_position = Vec3::new(
        body_position.x - view_angle.cos() * view_distance,
        body_position.y + camera_height,
        body_position.z - view_angle.sin() * view_distance,
    );

    FramingSpec {
        view_distance,
        view_angle,
        camera_height,
        camera_position,
        look_at: body_position,
    }
}
