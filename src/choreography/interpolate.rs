//! Pose interpolation along a raised arc.
//!
//! Camera positions follow a straight line between endpoints lifted by a
//! sine-shaped arc; look-at targets move linearly, optionally leading on the
//! horizontal axes. Progress is shaped by an asymmetric ease so motion
//! starts and ends slowly.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::types::{planar_distance, Pose};

/// Ease-in-out with a tunable exponent.
///
/// With `exponent = 2` this is `2u²` below the midpoint and `1 - 2(1-u)²`
/// above it. Always passes through (0, 0), (0.5, 0.5) and (1, 1).
pub fn ease_in_out(u: f32, exponent: f32) -> f32 {
    let u = clamp_unit(u);
    if u < 0.5 {
        2f32.powf(exponent - 1.0) * u.powf(exponent)
    } else {
        1.0 - (2.0 - 2.0 * u).powf(exponent) / 2.0
    }
}

/// Quadratic ease-out, `1 - (1-u)²`. Used by the hand-off blend.
pub fn ease_out(u: f32) -> f32 {
    let u = clamp_unit(u);
    1.0 - (1.0 - u) * (1.0 - u)
}

/// Peak arc height for a flight between two camera positions.
pub fn arc_height(start: Vec3, end: Vec3, factor: f32, max: f32) -> f32 {
    (planar_distance(start, end) * factor).min(max)
}

/// Blend two poses at eased progress `t`.
///
/// `target_lead` above 1.0 makes the look-at target's horizontal progress
/// run ahead of the camera's, saturating at the destination.
pub fn blend(start: &Pose, end: &Pose, t: f32, arc_height: f32, target_lead: f32) -> Pose {
    let t = clamp_unit(t);

    let lift = arc_height * (PI * t).sin();
    let camera_position = start.camera_position.lerp(end.camera_position, t) + Vec3::Y * lift;

    let lead_t = (t * target_lead.max(1.0)).min(1.0);
    let look_at = Vec3::new(
        lerp(start.look_at.x, end.look_at.x, lead_t),
        lerp(start.look_at.y, end.look_at.y, t),
        lerp(start.look_at.z, end.look_at.z, lead_t),
    );

    Pose::new(camera_position, look_at)
}

/// Straight linear blend of two poses without arc or lead.
pub fn lerp_pose(start: &Pose, end: &Pose, t: f32) -> Pose {
    let t = clamp_unit(t);
    Pose::new(
        start.camera_position.lerp(end.camera_position, t),
        start.look_at.lerp(end.look_at, t),
    )
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// Non-finite progress counts as finished.
fn clamp_unit(u: f32) -> f32 {
    if u.is_finite() {
        u.clamp(0.0, 1.0)
    } else {
        1.0
    }
}
