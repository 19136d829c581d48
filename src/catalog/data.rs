//! Default body set for the star system.
//!
//! Orbit radii and sizes are in scene units, angular speeds in radians per
//! simulation tick.

use std::f32::consts::FRAC_PI_6;

use super::{Body, RingSpec};

/// Radius of the central body (the Sun), in scene units.
pub const SUN_RADIUS: f32 = 2.0;

/// Intensity of the point light carried by the central body.
pub const SUN_LIGHT_INTENSITY: f32 = 1.5;

/// Reach of the central body's point light, in scene units.
pub const SUN_LIGHT_RANGE: f32 = 100.0;

/// Ring geometry for Saturn, relative to the planet size.
pub fn saturn_ring() -> RingSpec {
    RingSpec {
        inner_ratio: 0.4,
        outer_ratio: 1.0,
        size_multiplier: 2.5,
        tilt: FRAC_PI_6,
        opacity: 0.4,
    }
}

/// The eight planets in orbital order.
pub fn default_bodies() -> Vec<Body> {
    vec![
        Body::new("Mercury", 4.0, 0.01, 0.4),
        Body::new("Venus", 6.0, 0.008, 0.6),
        Body::new("Earth", 8.0, 0.006, 0.6),
        Body::new("Mars", 10.0, 0.004, 0.5),
        Body::new("Jupiter", 14.0, 0.002, 1.2),
        Body::new("Saturn", 18.0, 0.001, 1.0).with_ring(saturn_ring()),
        Body::new("Uranus", 22.0, 0.0005, 0.9),
        Body::new("Neptune", 26.0, 0.0003, 0.8),
    ]
}

/// Approximate display color for a body, by name.
pub fn body_color(name: &str) -> [f32; 3] {
    match name {
        "Mercury" => [0.6, 0.6, 0.6],
        "Venus" => [0.9, 0.85, 0.7],
        "Earth" => [0.2, 0.5, 0.8],
        "Mars" => [0.8, 0.4, 0.2],
        "Jupiter" => [0.8, 0.7, 0.6],
        "Saturn" => [0.9, 0.85, 0.6],
        "Uranus" => [0.6, 0.8, 0.9],
        "Neptune" => [0.3, 0.5, 0.9],
        _ => [0.7, 0.7, 0.7],
    }
}
