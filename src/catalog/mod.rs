//! Body catalog: the parameter sets of every orbiting body.
//!
//! The catalog is the only place body parameters change. Everything
//! downstream (kinematics, rendering, the camera) reads it as input.

pub mod data;

use std::time::SystemTime;

use bevy::prelude::*;

pub use data::default_bodies;

/// Optional ring around a body, resolved when the body is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    /// Inner edge as a fraction of the ring's outer radius.
    pub inner_ratio: f32,
    /// Outer edge before scaling (unit ring = 1.0).
    pub outer_ratio: f32,
    /// Ring scale relative to the body's size.
    pub size_multiplier: f32,
    /// Tilt about the ring's local X axis, in radians.
    pub tilt: f32,
    /// Material opacity.
    pub opacity: f32,
}

impl RingSpec {
    /// Outer radius of the ring for a body of the given size.
    pub fn outer_radius(&self, body_size: f32) -> f32 {
        self.outer_ratio * self.size_multiplier * body_size
    }

    /// Inner radius of the ring for a body of the given size.
    pub fn inner_radius(&self, body_size: f32) -> f32 {
        self.inner_ratio * self.size_multiplier * body_size
    }
}

/// An orbiting body on a circular orbit around the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Unique identifier.
    pub name: String,
    /// Orbit radius in scene units.
    pub orbit_radius: f32,
    /// Signed angular speed in radians per tick.
    pub angular_speed: f32,
    /// Sphere radius in scene units.
    pub size: f32,
    /// Ring, for bodies that carry one.
    pub ring: Option<RingSpec>,
}

impl Body {
    pub fn new(name: impl Into<String>, orbit_radius: f32, angular_speed: f32, size: f32) -> Self {
        Self {
            name: name.into(),
            orbit_radius,
            angular_speed,
            size,
            ring: None,
        }
    }

    pub fn with_ring(mut self, ring: RingSpec) -> Self {
        self.ring = Some(ring);
        self
    }

    /// Current value of an editable parameter.
    pub fn parameter(&self, parameter: BodyParameter) -> f32 {
        match parameter {
            BodyParameter::Size => self.size,
            BodyParameter::AngularSpeed => self.angular_speed,
            BodyParameter::OrbitRadius => self.orbit_radius,
        }
    }
}

/// Editable body parameters exposed to the control panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyParameter {
    Size,
    AngularSpeed,
    OrbitRadius,
}

impl BodyParameter {
    pub const ALL: [BodyParameter; 3] = [
        BodyParameter::Size,
        BodyParameter::AngularSpeed,
        BodyParameter::OrbitRadius,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BodyParameter::Size => "Size",
            BodyParameter::AngularSpeed => "Speed",
            BodyParameter::OrbitRadius => "Orbit Radius",
        }
    }
}

/// Inclusive bounds and slider step for one parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParameterRange {
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Bounds applied to parameter edits.
#[derive(Resource, Clone, Debug)]
pub struct BodyParameterRanges {
    pub size: ParameterRange,
    pub angular_speed: ParameterRange,
    pub orbit_radius: ParameterRange,
}

impl Default for BodyParameterRanges {
    fn default() -> Self {
        Self {
            size: ParameterRange {
                min: 0.1,
                max: 2.0,
                step: 0.1,
            },
            angular_speed: ParameterRange {
                min: 0.001,
                max: 0.02,
                step: 0.001,
            },
            orbit_radius: ParameterRange {
                min: 3.0,
                max: 20.0,
                step: 0.5,
            },
        }
    }
}

impl BodyParameterRanges {
    pub fn get(&self, parameter: BodyParameter) -> ParameterRange {
        match parameter {
            BodyParameter::Size => self.size,
            BodyParameter::AngularSpeed => self.angular_speed,
            BodyParameter::OrbitRadius => self.orbit_radius,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("body '{0}' already exists")]
    DuplicateBody(String),

    #[error("unknown body '{0}'")]
    UnknownBody(String),

    #[error("invalid value {value} for {parameter:?}")]
    InvalidParameter { parameter: BodyParameter, value: f32 },

    #[error("no saved configuration")]
    NoSavedConfiguration,
}

/// A saved set of body parameters.
#[derive(Clone, Debug)]
pub struct ConfigurationSnapshot {
    pub bodies: Vec<Body>,
    pub saved_at: SystemTime,
}

/// Resource holding the ordered body set plus saved configurations.
#[derive(Resource, Clone, Debug)]
pub struct BodyCatalog {
    bodies: Vec<Body>,
    snapshots: Vec<ConfigurationSnapshot>,
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self::new(default_bodies())
    }
}

impl BodyCatalog {
    /// Build a catalog from a body list. Later duplicates are dropped.
    pub fn new(bodies: Vec<Body>) -> Self {
        let mut catalog = Self {
            bodies: Vec::with_capacity(bodies.len()),
            snapshots: Vec::new(),
        };
        for body in bodies {
            if let Err(err) = catalog.insert(body) {
                warn!("Skipping body: {}", err);
            }
        }
        catalog
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Body at a display index (0-based).
    pub fn nth(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn insert(&mut self, body: Body) -> Result<(), CatalogError> {
        if self.contains(&body.name) {
            return Err(CatalogError::DuplicateBody(body.name));
        }
        self.bodies.push(body);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Body, CatalogError> {
        let index = self
            .bodies
            .iter()
            .position(|b| b.name == name)
            .ok_or_else(|| CatalogError::UnknownBody(name.to_string()))?;
        Ok(self.bodies.remove(index))
    }

    /// Update one parameter of a body, clamped to `ranges`.
    ///
    /// Returns the value actually stored.
    pub fn set_parameter(
        &mut self,
        name: &str,
        parameter: BodyParameter,
        value: f32,
        ranges: &BodyParameterRanges,
    ) -> Result<f32, CatalogError> {
        if !value.is_finite() {
            return Err(CatalogError::InvalidParameter { parameter, value });
        }
        let body = self
            .bodies
            .iter_mut()
            .find(|b| b.name == name)
            .ok_or_else(|| CatalogError::UnknownBody(name.to_string()))?;

        let value = ranges.get(parameter).clamp(value);
        match parameter {
            BodyParameter::Size => body.size = value,
            BodyParameter::AngularSpeed => body.angular_speed = value,
            BodyParameter::OrbitRadius => body.orbit_radius = value,
        }
        Ok(value)
    }

    /// Record the current body set as a new snapshot.
    pub fn save_snapshot(&mut self) -> &ConfigurationSnapshot {
        self.snapshots.push(ConfigurationSnapshot {
            bodies: self.bodies.clone(),
            saved_at: SystemTime::now(),
        });
        info!("Configuration saved ({} stored)", self.snapshots.len());
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Replace the body set with the most recently saved snapshot.
    pub fn load_latest_snapshot(&mut self) -> Result<(), CatalogError> {
        let latest = self
            .snapshots
            .last()
            .ok_or(CatalogError::NoSavedConfiguration)?;
        self.bodies = latest.bodies.clone();
        info!("Configuration restored ({} bodies)", self.bodies.len());
        Ok(())
    }
}
