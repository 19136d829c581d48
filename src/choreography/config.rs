//! Tuning constants for camera choreography.

use bevy::prelude::*;

use crate::types::{Pose, TICKS_PER_SECOND};

/// Duration of a flight from the overview to a first selected body, in seconds.
pub const FLY_TO_DURATION: f64 = 1.5;

/// Duration of a flight between two bodies (or from a mid-flight pose).
pub const FLY_BETWEEN_DURATION: f64 = 2.0;

/// Duration of the flight back to the overview pose.
pub const RETURN_TO_DEFAULT_DURATION: f64 = 1.8;

/// Duration of the hand-off blend after a flight completes.
pub const BLEND_DURATION: f64 = 0.3;

/// Ease exponents per phase. Higher values feel heavier.
pub const FLY_TO_EASE_EXPONENT: f32 = 2.0;
pub const FLY_BETWEEN_EASE_EXPONENT: f32 = 2.2;
pub const RETURN_TO_DEFAULT_EASE_EXPONENT: f32 = 1.8;

/// Horizontal lead applied to look-at interpolation while chasing a moving body.
///
/// Empirical: keeps the target from visibly trailing the body mid-flight.
pub const TARGET_LEAD_FACTOR: f32 = 1.05;

/// Flight progress after which the motion predictor steers the destination.
pub const PREDICTION_WINDOW_START: f32 = 0.8;

/// Arc height as a fraction of the planar flight distance.
pub const ARC_HEIGHT_FACTOR: f32 = 0.25;

/// Upper bound on the arc height, in scene units.
pub const MAX_ARC_HEIGHT: f32 = 8.0;

/// Timing and shape of every camera transition.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ChoreographyConfig {
    pub fly_to_duration: f64,
    pub fly_between_duration: f64,
    pub return_to_default_duration: f64,
    pub blend_duration: f64,
    pub fly_to_ease_exponent: f32,
    pub fly_between_ease_exponent: f32,
    pub return_to_default_ease_exponent: f32,
    pub target_lead_factor: f32,
    pub prediction_window_start: f32,
    pub arc_height_factor: f32,
    pub max_arc_height: f32,
    /// Pose shown when nothing is selected.
    pub default_pose: Pose,
    /// Initial tick rate for converting wall-clock lookahead to the per-tick
    /// unit of angular speeds; replaced each frame by the live clock rate.
    pub ticks_per_second: f64,
}

impl Default for ChoreographyConfig {
    fn default() -> Self {
        Self {
            fly_to_duration: FLY_TO_DURATION,
            fly_between_duration: FLY_BETWEEN_DURATION,
            return_to_default_duration: RETURN_TO_DEFAULT_DURATION,
            blend_duration: BLEND_DURATION,
            fly_to_ease_exponent: FLY_TO_EASE_EXPONENT,
            fly_between_ease_exponent: FLY_BETWEEN_EASE_EXPONENT,
            return_to_default_ease_exponent: RETURN_TO_DEFAULT_EASE_EXPONENT,
            target_lead_factor: TARGET_LEAD_FACTOR,
            prediction_window_start: PREDICTION_WINDOW_START,
            arc_height_factor: ARC_HEIGHT_FACTOR,
            max_arc_height: MAX_ARC_HEIGHT,
            default_pose: Pose::DEFAULT,
            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}

