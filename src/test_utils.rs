//! Test utilities for camera choreography tests.
//!
//! Provides fixtures for body sets and live positions, frame-stepping helpers
//! for driving the choreographer, and assertions on pose continuity.

use bevy::prelude::*;

use crate::catalog::Body;
use crate::choreography::CameraChoreographer;
use crate::kinematics::{orbit_position, BodyPositions};
use crate::types::{Pose, TICKS_PER_SECOND};

/// Fixtures for bodies, positions and frame stepping.
pub mod fixtures {
    use super::*;

    /// One frame at 60 Hz, in seconds.
    pub const FRAME: f64 = 1.0 / 60.0;

    /// The default planet set.
    pub fn bodies() -> Vec<Body> {
        crate::catalog::default_bodies()
    }

    /// Earth as used in the framing examples.
    pub fn earth() -> Body {
        Body::new("Earth", 8.0, 0.006, 0.6)
    }

    /// Positions of `bodies` after `ticks` of motion from angle zero.
    pub fn positions_at(bodies: &[Body], ticks: f32) -> BodyPositions {
        bodies
            .iter()
            .map(|b| (b.name.clone(), orbit_position(b, b.angular_speed * ticks)))
            .collect()
    }

    /// Positions at wall-clock `seconds`, assuming the simulation runs in real time.
    pub fn positions_at_seconds(bodies: &[Body], seconds: f64) -> BodyPositions {
        positions_at(bodies, (seconds * TICKS_PER_SECOND) as f32)
    }

    /// Tick `engine` with fixed positions from `from` to `to` (inclusive) at
    /// frame rate. Returns the last pose.
    pub fn run_until(
        engine: &mut CameraChoreographer,
        positions: &BodyPositions,
        from: f64,
        to: f64,
    ) -> Pose {
        let mut now = from;
        while now < to {
            engine.tick(now, positions);
            now += FRAME;
        }
        engine.tick(to, positions)
    }

    /// Like `run_until`, but bodies move in real time. Returns every pose.
    pub fn run_moving(
        engine: &mut CameraChoreographer,
        bodies: &[Body],
        from: f64,
        to: f64,
    ) -> Vec<Pose> {
        let mut poses = Vec::new();
        let mut now = from;
        while now < to {
            poses.push(engine.tick(now, &positions_at_seconds(bodies, now)));
            now += FRAME;
        }
        poses.push(engine.tick(to, &positions_at_seconds(bodies, to)));
        poses
    }
}

/// Assertions on pose sequences.
pub mod assertions {
    use super::*;

    /// Assert that no two consecutive poses are further apart than `max_step`.
    ///
    /// # Panics
    /// Panics with the index of the first jump that exceeds `max_step`.
    pub fn assert_continuous(poses: &[Pose], max_step: f32) {
        for (i, pair) in poses.windows(2).enumerate() {
            let step = pair[0].distance(&pair[1]);
            assert!(
                step <= max_step,
                "Pose jump of {step:.4} at frame {i} exceeds {max_step:.4}: {:?} -> {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    /// Assert that every pose is finite.
    pub fn assert_all_finite(poses: &[Pose]) {
        for (i, pose) in poses.iter().enumerate() {
            assert!(pose.is_finite(), "Non-finite pose at frame {i}: {pose:?}");
        }
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_positions_at_zero_ticks_sit_on_x_axis() {
        let positions = fixtures::positions_at(&fixtures::bodies(), 0.0);
        assert_eq!(positions.get("Earth"), Some(Vec3::new(8.0, 0.0, 0.0)));
        assert_eq!(positions.len(), 8);
    }

    #[test]
    fn test_positions_at_seconds_uses_tick_rate() {
        let bodies = vec![fixtures::earth()];
        let positions = fixtures::positions_at_seconds(&bodies, 1.0);
        let angle = 0.006 * 60.0;
        let earth = positions.get("Earth").unwrap();
        assert_abs_diff_eq!(earth.x, 8.0 * f32::cos(angle), epsilon = 1e-5);
        assert_abs_diff_eq!(earth.z, 8.0 * f32::sin(angle), epsilon = 1e-5);
    }

    #[test]
    #[should_panic(expected = "Pose jump")]
    fn test_continuity_assertion_catches_jumps() {
        let a = Pose::DEFAULT;
        let b = Pose::new(Vec3::new(100.0, 0.0, 0.0), Vec3::ZERO);
        assertions::assert_continuous(&[a, b], 1.0);
    }
}
