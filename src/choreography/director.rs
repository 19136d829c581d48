//! Transition director: the camera's state machine.
//!
//! Phases:
//! - `Idle`: resting. With a selection, the camera tracks that body directly.
//! - `FlyToTarget`: first flight from the overview to a body.
//! - `FlyBetween`: any flight started while a body is already selected or a
//!   transition is running. Always departs from the live camera pose.
//! - `ReturnToDefault`: flight back to the overview pose.
//! - `Blending`: short hand-off from a finished flight to live tracking.
//!
//! Phase ends are explicit timestamps compared against the tick time, so
//! nothing here is deferred or asynchronous. Destinations are looked up
//! again every frame because bodies keep moving during a flight.

use bevy::prelude::*;

use super::config::ChoreographyConfig;
use super::framing::frame;
use super::interpolate::{arc_height, blend, ease_in_out, ease_out, lerp_pose};
use super::predictor::predict;
use super::{BodyTable, ChoreographyError};
use crate::catalog::Body;
use crate::kinematics::BodyPositions;
use crate::types::Pose;

/// Phase of the director without its payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionPhase {
    #[default]
    Idle,
    FlyToTarget,
    FlyBetween,
    ReturnToDefault,
    Blending,
}

impl TransitionPhase {
    pub fn label(&self) -> &'static str {
        match self {
            TransitionPhase::Idle => "Idle",
            TransitionPhase::FlyToTarget => "Flying to target",
            TransitionPhase::FlyBetween => "Flying between targets",
            TransitionPhase::ReturnToDefault => "Returning to overview",
            TransitionPhase::Blending => "Settling",
        }
    }
}

/// A timed flight from a fixed start pose.
#[derive(Clone, Debug, PartialEq)]
pub struct Flight {
    /// Body the camera was tracking when the flight began, if any.
    pub source: Option<String>,
    /// Body to fly to; `None` means the overview pose.
    pub destination: Option<String>,
    /// Stamped by the first tick after the flight was requested.
    pub started_at: Option<f64>,
    pub duration: f64,
    pub start_pose: Pose,
    /// Framing of where the destination will be when the flight ends,
    /// filled during the prediction window.
    pub handoff: Option<Pose>,
}

impl Flight {
    fn new(source: Option<String>, destination: Option<String>, duration: f64, start_pose: Pose) -> Self {
        Self {
            source,
            destination,
            started_at: None,
            duration,
            start_pose,
            handoff: None,
        }
    }

    /// Linear progress in [0, 1], stamping the start time on first use.
    fn progress(&mut self, now: f64) -> f64 {
        let started = *self.started_at.get_or_insert(now);
        unit_progress(now - started, self.duration)
    }
}

/// The short post-flight correction toward live tracking.
#[derive(Clone, Debug, PartialEq)]
pub struct HandoffBlend {
    pub destination: String,
    pub started_at: f64,
    pub duration: f64,
    /// Final pose of the flight that just ended.
    pub start_pose: Pose,
    /// Most recent live framing of the destination.
    pub end_pose: Pose,
}

/// The one active transition, owned by the director.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    FlyToTarget(Flight),
    FlyBetween(Flight),
    ReturnToDefault(Flight),
    Blending(HandoffBlend),
}

impl TransitionState {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            TransitionState::Idle => TransitionPhase::Idle,
            TransitionState::FlyToTarget(_) => TransitionPhase::FlyToTarget,
            TransitionState::FlyBetween(_) => TransitionPhase::FlyBetween,
            TransitionState::ReturnToDefault(_) => TransitionPhase::ReturnToDefault,
            TransitionState::Blending(_) => TransitionPhase::Blending,
        }
    }
}

/// Drives camera transitions frame by frame.
#[derive(Clone, Debug)]
pub struct TransitionDirector {
    config: ChoreographyConfig,
    state: TransitionState,
    selection: Option<String>,
    /// Last pose written to the camera; every flight departs from here.
    current_pose: Pose,
    /// Simulation ticks per wall-clock second; zero while orbits are paused.
    tick_rate: f64,
}

impl Default for TransitionDirector {
    fn default() -> Self {
        Self::new(ChoreographyConfig::default())
    }
}

impl TransitionDirector {
    pub fn new(config: ChoreographyConfig) -> Self {
        let current_pose = config.default_pose;
        let tick_rate = config.ticks_per_second;
        Self {
            config,
            state: TransitionState::Idle,
            selection: None,
            current_pose,
            tick_rate,
        }
    }

    pub fn config(&self) -> &ChoreographyConfig {
        &self.config
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn phase(&self) -> TransitionPhase {
        self.state.phase()
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn current_pose(&self) -> Pose {
        self.current_pose
    }

    pub fn is_animating(&self) -> bool {
        self.phase() != TransitionPhase::Idle
    }

    pub fn tick_rate(&self) -> f64 {
        self.tick_rate
    }

    /// Set how fast simulation ticks pass per wall-clock second.
    ///
    /// Lookahead is converted at this rate, so a paused clock predicts no
    /// motion. Negative or non-finite rates count as paused.
    pub fn set_tick_rate(&mut self, ticks_per_second: f64) {
        self.tick_rate = if ticks_per_second.is_finite() {
            ticks_per_second.max(0.0)
        } else {
            0.0
        };
    }

    /// Start a flight to `destination`, cancelling any running transition.
    ///
    /// Returns false when `destination` is already the settled or pending
    /// target, in which case nothing changes.
    pub fn select(&mut self, destination: &str) -> bool {
        let already_targeted = self.selection.as_deref() == Some(destination)
            && self.phase() != TransitionPhase::ReturnToDefault;
        if already_targeted {
            return false;
        }

        let start = self.current_pose;
        let next = match (&self.state, self.selection.take()) {
            (TransitionState::Idle, None) => TransitionState::FlyToTarget(Flight::new(
                None,
                Some(destination.to_string()),
                self.config.fly_to_duration,
                start,
            )),
            (TransitionState::Idle, Some(previous)) => TransitionState::FlyBetween(Flight::new(
                Some(previous),
                Some(destination.to_string()),
                self.config.fly_between_duration,
                start,
            )),
            // Mid-transition: depart from the live pose, not the old source body.
            (_, _) => TransitionState::FlyBetween(Flight::new(
                None,
                Some(destination.to_string()),
                self.config.fly_between_duration,
                start,
            )),
        };

        self.selection = Some(destination.to_string());
        self.enter(next);
        true
    }

    /// Fly back to the overview pose. Returns false if already there or on the way.
    pub fn deselect(&mut self) -> bool {
        let settled = self.selection.is_none()
            && matches!(
                self.phase(),
                TransitionPhase::Idle | TransitionPhase::ReturnToDefault
            );
        if settled {
            return false;
        }
        self.begin_return();
        true
    }

    /// Advance the active transition and return this frame's pose.
    pub fn tick(&mut self, now: f64, bodies: &BodyTable, positions: &BodyPositions) -> Pose {
        let state = std::mem::take(&mut self.state);
        let previous = state.phase();
        let (next, pose) = match state {
            TransitionState::Idle => self.tick_idle(now, bodies, positions),
            TransitionState::FlyToTarget(flight) => {
                self.tick_flight(now, flight, TransitionPhase::FlyToTarget, bodies, positions)
            }
            TransitionState::FlyBetween(flight) => {
                self.tick_flight(now, flight, TransitionPhase::FlyBetween, bodies, positions)
            }
            TransitionState::ReturnToDefault(flight) => self.tick_return(now, flight),
            TransitionState::Blending(handoff) => self.tick_blend(now, handoff, bodies, positions),
        };

        if next.phase() != previous {
            debug!("Camera phase: {}", next.phase().label());
        }
        self.state = next;

        if !pose.is_finite() {
            warn!("{}", ChoreographyError::DegenerateGeometry);
            self.selection = None;
            self.state = TransitionState::Idle;
            self.current_pose = self.config.default_pose;
            return self.current_pose;
        }

        self.current_pose = pose;
        pose
    }

    fn tick_idle(
        &mut self,
        now: f64,
        bodies: &BodyTable,
        positions: &BodyPositions,
    ) -> (TransitionState, Pose) {
        let Some(name) = self.selection.clone() else {
            return (TransitionState::Idle, self.current_pose);
        };
        match live_target(&name, bodies, positions) {
            Some((body, position)) => (TransitionState::Idle, frame(position, body.size).pose()),
            None => self.reference_missing(&name, now),
        }
    }

    fn tick_flight(
        &mut self,
        now: f64,
        mut flight: Flight,
        kind: TransitionPhase,
        bodies: &BodyTable,
        positions: &BodyPositions,
    ) -> (TransitionState, Pose) {
        let Some(destination) = flight.destination.clone() else {
            return self.tick_return(now, flight);
        };
        let Some((body, position)) = live_target(&destination, bodies, positions) else {
            return self.reference_missing(&destination, now);
        };

        let progress = flight.progress(now);
        let live = frame(position, body.size).pose();

        let window = self.config.prediction_window_start as f64;
        let end = if progress >= window {
            // Aim at where the body will be when the flight ends. The blend
            // afterwards only absorbs prediction error.
            let remaining = ((1.0 - progress) * flight.duration).max(0.0);
            let predicted = predict(body, position, (remaining * self.tick_rate) as f32);
            let handoff = frame(predicted, body.size).pose();
            flight.handoff = Some(handoff);

            let weight = if window < 1.0 {
                ((progress - window) / (1.0 - window)) as f32
            } else {
                1.0
            };
            lerp_pose(&live, &handoff, weight)
        } else {
            flight.handoff = None;
            live
        };

        let exponent = if kind == TransitionPhase::FlyToTarget {
            self.config.fly_to_ease_exponent
        } else {
            self.config.fly_between_ease_exponent
        };
        let pose = self.flight_pose(
            &flight.start_pose,
            &end,
            progress,
            exponent,
            self.config.target_lead_factor,
        );

        if progress >= 1.0 {
            let next = TransitionState::Blending(HandoffBlend {
                destination,
                started_at: now,
                duration: self.config.blend_duration,
                start_pose: pose,
                end_pose: live,
            });
            return (next, pose);
        }
        let next = if kind == TransitionPhase::FlyToTarget {
            TransitionState::FlyToTarget(flight)
        } else {
            TransitionState::FlyBetween(flight)
        };
        (next, pose)
    }

    fn tick_return(&mut self, now: f64, mut flight: Flight) -> (TransitionState, Pose) {
        let progress = flight.progress(now);
        let end = self.config.default_pose;
        if progress >= 1.0 {
            return (TransitionState::Idle, end);
        }
        let pose = self.flight_pose(
            &flight.start_pose,
            &end,
            progress,
            self.config.return_to_default_ease_exponent,
            1.0,
        );
        (TransitionState::ReturnToDefault(flight), pose)
    }

    fn tick_blend(
        &mut self,
        now: f64,
        mut handoff: HandoffBlend,
        bodies: &BodyTable,
        positions: &BodyPositions,
    ) -> (TransitionState, Pose) {
        let Some((body, position)) = live_target(&handoff.destination, bodies, positions) else {
            let name = handoff.destination.clone();
            return self.reference_missing(&name, now);
        };

        let live = frame(position, body.size).pose();
        handoff.end_pose = live;

        let progress = unit_progress(now - handoff.started_at, handoff.duration);
        if progress >= 1.0 {
            return (TransitionState::Idle, live);
        }
        let pose = lerp_pose(&handoff.start_pose, &live, ease_out(progress as f32));
        (TransitionState::Blending(handoff), pose)
    }

    fn flight_pose(&self, start: &Pose, end: &Pose, progress: f64, exponent: f32, lead: f32) -> Pose {
        let t = ease_in_out(progress as f32, exponent);
        let arc = arc_height(
            start.camera_position,
            end.camera_position,
            self.config.arc_height_factor,
            self.config.max_arc_height,
        );
        blend(start, end, t, arc, lead)
    }

    /// The selected body vanished: drop it and head back to the overview.
    fn reference_missing(&mut self, name: &str, now: f64) -> (TransitionState, Pose) {
        warn!("{}", ChoreographyError::ReferenceMissing(name.to_string()));
        self.selection = None;
        let mut flight = Flight::new(
            Some(name.to_string()),
            None,
            self.config.return_to_default_duration,
            self.current_pose,
        );
        flight.started_at = Some(now);
        (TransitionState::ReturnToDefault(flight), self.current_pose)
    }

    fn begin_return(&mut self) {
        let source = self.selection.take();
        let flight = Flight::new(
            source,
            None,
            self.config.return_to_default_duration,
            self.current_pose,
        );
        self.enter(TransitionState::ReturnToDefault(flight));
    }

    fn enter(&mut self, next: TransitionState) {
        debug!("Camera phase: {}", next.phase().label());
        self.state = next;
    }
}

fn live_target<'a>(
    name: &str,
    bodies: &'a BodyTable,
    positions: &BodyPositions,
) -> Option<(&'a Body, Vec3)> {
    Some((bodies.get(name)?, positions.get(name)?))
}

fn unit_progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}
