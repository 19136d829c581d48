//! Background rendering: starfield and clear color.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

/// Number of background stars.
pub const STAR_COUNT: usize = 2000;

/// Inner radius of the shell stars are scattered in.
pub const STAR_SHELL_RADIUS: f32 = 100.0;

/// Thickness of the star shell.
pub const STAR_SHELL_DEPTH: f32 = 50.0;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, spawn_starfield);
    }
}

/// A random point in the star shell, uniformly distributed over directions.
pub fn star_position(rng: &mut impl Rng) -> Vec3 {
    let azimuth = rng.random_range(0.0..TAU);
    let height: f32 = rng.random_range(-1.0..1.0);
    let ring = (1.0 - height * height).sqrt();
    let distance = STAR_SHELL_RADIUS + rng.random_range(0.0..STAR_SHELL_DEPTH);
    Vec3::new(ring * azimuth.cos(), height, ring * azimuth.sin()) * distance
}

/// Spawn the starfield around the system.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(0.15));

    let mut rng = rand::rng();
    for _ in 0..STAR_COUNT {
        let scale = rng.random_range(0.5..1.5);
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(star_position(&mut rng)).with_scale(Vec3::splat(scale)),
        ));
    }

    info!("Spawned {} background stars", STAR_COUNT);
}
