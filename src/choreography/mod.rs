//! Camera choreography: where the camera is and what it looks at, every frame.
//!
//! `CameraChoreographer` is the facade the rest of the application talks to.
//! Selection changes go in through [`CameraChoreographer::select_body`]; each
//! rendered frame calls [`CameraChoreographer::tick`] with the current time
//! and the live body positions and gets back the pose to render.
//!
//! Internally:
//! - [`framing`] computes the ideal pose for viewing a body.
//! - [`predictor`] extrapolates circular motion in closed form.
//! - [`interpolate`] eases and arcs between poses.
//! - [`director`] owns the transition state machine.

pub mod config;
pub mod director;
pub mod framing;
pub mod interpolate;
pub mod predictor;

#[cfg(test)]
mod proptest_choreography;

use std::collections::HashMap;

use bevy::prelude::*;

pub use config::ChoreographyConfig;
pub use director::{TransitionDirector, TransitionPhase, TransitionState};
pub use framing::{frame, FramingSpec, MIN_VIEW_DISTANCE};
pub use predictor::predict;

use crate::catalog::{default_bodies, Body};
use crate::kinematics::BodyPositions;
use crate::types::Pose;

/// Body parameters by name, as the choreographer sees them.
pub type BodyTable = HashMap<String, Body>;

/// Problems the choreographer reports. All of them are recovered locally.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChoreographyError {
    #[error("cannot select unknown body '{0}'")]
    UnknownBody(String),

    #[error("selected body '{0}' has no live position, returning to overview")]
    ReferenceMissing(String),

    #[error("camera pose became non-finite, snapping to overview")]
    DegenerateGeometry,
}

/// Facade over the transition director and the body parameters it needs.
#[derive(Resource, Clone, Debug)]
pub struct CameraChoreographer {
    director: TransitionDirector,
    bodies: BodyTable,
}

impl Default for CameraChoreographer {
    fn default() -> Self {
        Self::with_bodies(ChoreographyConfig::default(), default_bodies())
    }
}

impl CameraChoreographer {
    pub fn new(config: ChoreographyConfig) -> Self {
        Self {
            director: TransitionDirector::new(config),
            bodies: BodyTable::new(),
        }
    }

    pub fn with_bodies(config: ChoreographyConfig, bodies: impl IntoIterator<Item = Body>) -> Self {
        let mut choreographer = Self::new(config);
        choreographer.sync_bodies(bodies);
        choreographer
    }

    /// Replace the known body parameters.
    ///
    /// A selected body that disappears here is dropped on the next tick.
    pub fn sync_bodies(&mut self, bodies: impl IntoIterator<Item = Body>) {
        self.bodies = bodies.into_iter().map(|b| (b.name.clone(), b)).collect();
    }

    pub fn upsert_body(&mut self, body: Body) {
        self.bodies.insert(body.name.clone(), body);
    }

    pub fn remove_body(&mut self, name: &str) -> Option<Body> {
        self.bodies.remove(name)
    }

    pub fn knows(&self, name: &str) -> bool {
        self.bodies.contains_key(name)
    }

    /// Select a body to fly to, or `None` to return to the overview.
    ///
    /// Returns whether a new transition started. Unknown names are rejected
    /// without touching the current transition.
    pub fn select_body(&mut self, name: Option<&str>) -> Result<bool, ChoreographyError> {
        match name {
            Some(name) => {
                if !self.knows(name) {
                    return Err(ChoreographyError::UnknownBody(name.to_string()));
                }
                let started = self.director.select(name);
                if started {
                    info!("Camera flying to {}", name);
                }
                Ok(started)
            }
            None => {
                let started = self.director.deselect();
                if started {
                    info!("Camera returning to overview");
                }
                Ok(started)
            }
        }
    }

    /// Compute this frame's pose.
    ///
    /// `now` is wall-clock seconds on any monotonic origin; `positions` must
    /// reflect the current simulation time.
    pub fn tick(&mut self, now: f64, positions: &BodyPositions) -> Pose {
        self.director.tick(now, &self.bodies, positions)
    }

    pub fn is_animating(&self) -> bool {
        self.director.is_animating()
    }

    /// Simulation ticks per wall-clock second used for lookahead.
    pub fn tick_rate(&self) -> f64 {
        self.director.tick_rate()
    }

    /// Follow the simulation clock: zero while paused, scaled otherwise.
    pub fn set_tick_rate(&mut self, ticks_per_second: f64) {
        self.director.set_tick_rate(ticks_per_second);
    }

    pub fn phase(&self) -> TransitionPhase {
        self.director.phase()
    }

    pub fn state(&self) -> &TransitionState {
        self.director.state()
    }

    pub fn selection(&self) -> Option<&str> {
        self.director.selection()
    }

    pub fn current_pose(&self) -> Pose {
        self.director.current_pose()
    }

    pub fn config(&self) -> &ChoreographyConfig {
        self.director.config()
    }
}
