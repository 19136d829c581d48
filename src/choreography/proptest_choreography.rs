//! Property-based tests for camera choreography using proptest.
//!
//! These tests verify that framing, prediction and the transition state
//! machine keep their guarantees across a wide range of bodies and inputs.

use proptest::prelude::*;
use std::f32::consts::TAU;

use super::framing::frame;
use super::interpolate::{blend, ease_in_out};
use super::predictor::predict;
use super::{CameraChoreographer, ChoreographyConfig};
use crate::catalog::Body;
use crate::kinematics::orbit_position;
use crate::test_utils::fixtures;
use crate::types::{planar_distance, Pose};
use bevy::math::Vec3;

fn arb_body(name: &'static str) -> impl Strategy<Value = Body> {
    (0.0f32..30.0, -0.05f32..0.05, 0.05f32..3.0)
        .prop_map(move |(radius, speed, size)| Body::new(name, radius, speed, size))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The camera always sits exactly `size·5 + 1` from the body in the orbital plane.
    #[test]
    fn prop_framing_distance(
        radius in 0.0f32..30.0,
        angle in 0.0f32..TAU,
        size in 0.01f32..3.0,
    ) {
        let body = Body::new("B", radius, 0.01, size);
        let position = orbit_position(&body, angle);
        let spec = frame(position, size);

        let expected = size * 5.0 + 1.0;
        prop_assert!((spec.view_distance - expected).abs() < 1e-5);
        let distance = planar_distance(spec.camera_position, position);
        prop_assert!(
            (distance - expected).abs() < 1e-3,
            "planar distance {} != view distance {}", distance, expected
        );
        prop_assert!((spec.camera_position.y - position.y - (size * 2.0 + 0.5)).abs() < 1e-5);
    }

    /// Zero lookahead returns the input position unchanged.
    #[test]
    fn prop_predict_zero_lookahead_identity(
        body in arb_body("B"),
        angle in 0.0f32..TAU,
    ) {
        let position = orbit_position(&body, angle);
        prop_assert_eq!(predict(&body, position, 0.0), position);
    }

    /// A full orbital period brings the body back to where it started.
    #[test]
    fn prop_predict_periodic(
        radius in 1.0f32..30.0,
        speed_magnitude in 0.0005f32..0.05,
        retrograde in any::<bool>(),
        angle in 0.0f32..TAU,
    ) {
        let speed = if retrograde { -speed_magnitude } else { speed_magnitude };
        let body = Body::new("B", radius, speed, 0.5);
        let position = orbit_position(&body, angle);
        let period = TAU / speed.abs();

        let predicted = predict(&body, position, period);
        let error = planar_distance(predicted, position);
        prop_assert!(error < radius * 1e-3, "period error {} at radius {}", error, radius);
    }

    /// Prediction agrees with integrating the orbit forward.
    #[test]
    fn prop_predict_matches_kinematics(
        body in arb_body("B"),
        angle in 0.0f32..TAU,
        ticks in 0.0f32..500.0,
    ) {
        let start = orbit_position(&body, angle);
        let predicted = predict(&body, start, ticks);
        let integrated = orbit_position(&body, angle + body.angular_speed * ticks);
        prop_assert!(planar_distance(predicted, integrated) < 1e-2 + body.orbit_radius * 1e-4);
    }

    /// Eased progress stays inside [0, 1] and never runs backwards.
    #[test]
    fn prop_ease_bounded_and_monotonic(
        a in 0.0f32..1.0,
        b in 0.0f32..1.0,
        exponent in 1.8f32..2.5,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let e_lo = ease_in_out(lo, exponent);
        let e_hi = ease_in_out(hi, exponent);
        prop_assert!((0.0..=1.0).contains(&e_lo));
        prop_assert!((0.0..=1.0).contains(&e_hi));
        prop_assert!(e_lo <= e_hi + 1e-6);
    }

    /// Blending never produces non-finite poses, even for coincident endpoints.
    #[test]
    fn prop_blend_finite(
        x in -50.0f32..50.0,
        z in -50.0f32..50.0,
        t in 0.0f32..1.0,
        arc in 0.0f32..8.0,
    ) {
        let start = Pose::new(Vec3::new(x, 1.0, z), Vec3::new(x, 0.0, z));
        let end = Pose::new(Vec3::new(z, 3.0, x), Vec3::ZERO);
        prop_assert!(blend(&start, &end, t, arc, 1.05).is_finite());
        prop_assert!(blend(&start, &start, t, arc, 1.05).is_finite());
    }

    /// Any interleaving of selections over moving bodies yields finite poses,
    /// including stationary bodies and bodies at the origin.
    #[test]
    fn prop_tick_never_non_finite(
        first in arb_body("A"),
        second in arb_body("B"),
        selections in prop::collection::vec((0usize..5, 1usize..120), 1..8),
    ) {
        let bodies = vec![
            first,
            second,
            Body::new("Still", 5.0, 0.0, 0.4),
            Body::new("Core", 0.0, 0.02, 0.4),
        ];
        let mut engine = CameraChoreographer::with_bodies(ChoreographyConfig::default(), bodies.clone());
        let choices = [Some("A"), Some("B"), Some("Still"), Some("Core"), None];

        let mut frame_index = 0usize;
        for (choice, frames) in selections {
            prop_assert!(engine.select_body(choices[choice]).is_ok());
            for _ in 0..frames {
                let now = frame_index as f64 * fixtures::FRAME;
                let pose = engine.tick(now, &fixtures::positions_at_seconds(&bodies, now));
                prop_assert!(pose.is_finite(), "non-finite pose {:?} at frame {}", pose, frame_index);
                frame_index += 1;
            }
        }
    }
}
