//! Closed-form motion prediction for bodies on circular orbits.
//!
//! Rotating the body's current bearing is exact for circular motion, unlike
//! extrapolating a sampled frame-to-frame velocity.

use bevy::prelude::*;

use crate::catalog::Body;

/// Predict where `body` will be `lookahead` ticks after `current_position`.
///
/// The height of `current_position` is kept. A zero offset (no lookahead or
/// a stationary body) returns the input unchanged.
pub fn predict(body: &Body, current_position: Vec3, lookahead: f32) -> Vec3 {
    let delta = body.angular_speed * lookahead;
    if delta == 0.0 || !delta.is_finite() {
        return current_position;
    }

    let angle = current_position.z.atan2(current_position.x) + delta;
    Vec3::new(
        angle.cos() * body.orbit_radius,
        current_position.y,
        angle.sin() * body.orbit_radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, TAU};

    fn earth() -> Body {
        Body::new("Earth", 8.0, 0.006, 0.6)
    }

    #[test]
    fn test_zero_lookahead_is_identity() {
        let pos = Vec3::new(8.0, 0.0, 0.0);
        assert_eq!(predict(&earth(), pos, 0.0), pos);
    }

    #[test]
    fn test_stationary_body_is_fixed_point() {
        let body = Body::new("Still", 5.0, 0.0, 0.3);
        let pos = Vec3::new(0.0, 0.0, 5.0);
        assert_eq!(predict(&body, pos, 1000.0), pos);
    }

    #[test]
    fn test_quarter_orbit() {
        let body = earth();
        let quarter = FRAC_PI_2 / body.angular_speed;
        let predicted = predict(&body, Vec3::new(8.0, 0.0, 0.0), quarter);
        assert_abs_diff_eq!(predicted.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(predicted.z, 8.0, epsilon = 1e-4);
    }

    #[test]
    fn test_full_orbit_returns_to_start() {
        let body = earth();
        let start = Vec3::new(0.0, 0.0, -8.0);
        let period = TAU / body.angular_speed;
        let predicted = predict(&body, start, period);
        assert_abs_diff_eq!(predicted.x, start.x, epsilon = 1e-3);
        assert_abs_diff_eq!(predicted.z, start.z, epsilon = 1e-3);
    }

    #[test]
    fn test_retrograde_orbit_moves_backwards() {
        let body = Body::new("Retro", 8.0, -0.01, 0.5);
        let predicted = predict(&body, Vec3::new(8.0, 0.0, 0.0), 10.0);
        assert!(predicted.z < 0.0);
    }

    #[test]
    fn test_height_preserved() {
        let predicted = predict(&earth(), Vec3::new(8.0, 2.5, 0.0), 30.0);
        assert_eq!(predicted.y, 2.5);
    }
}
