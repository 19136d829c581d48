//! Orrery - a small solar system with a choreographed camera
//!
//! A library crate providing the orbit simulation, camera choreography and
//! scene plugins, for testing and integration purposes.

pub mod camera;
pub mod catalog;
pub mod choreography;
pub mod input;
pub mod kinematics;
pub mod render;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
