//! Sun and planet rendering and spawning.
//!
//! Planets share one unit sphere mesh and are sized through their transform
//! scale, so size edits never rebuild meshes. Planet entities follow the
//! catalog: bodies added by a configuration load are spawned, removed bodies
//! are despawned.

use std::collections::HashSet;
use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::catalog::data::{body_color, SUN_LIGHT_INTENSITY, SUN_LIGHT_RANGE, SUN_RADIUS};
use crate::catalog::{Body, BodyCatalog, RingSpec};

/// Point light output, in lumens, for a unit light intensity.
const LUMENS_PER_INTENSITY: f32 = 1_000_000.0;

/// Marker for the central body.
#[derive(Component)]
pub struct Sun;

/// Component linking a rendered planet to its catalog entry.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitingBody {
    pub name: String,
}

/// Marker for a planet's ring, spawned as a child of the planet.
#[derive(Component)]
pub struct PlanetRing;

/// Mesh shared by every planet; scaled per entity.
#[derive(Resource, Clone)]
pub struct PlanetMesh(pub Handle<Mesh>);

/// Plugin providing Sun and planet spawning.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyCatalog>()
            .add_systems(PreStartup, create_planet_mesh)
            .add_systems(Startup, spawn_sun);
    }
}

fn create_planet_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(PlanetMesh(meshes.add(Sphere::new(1.0))));
}

/// Spawn the glowing central body with its point light.
fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let color = Color::srgb(1.0, 0.95, 0.4);
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color,
            emissive: color.to_linear() * 2.0,
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
        PointLight {
            intensity: SUN_LIGHT_INTENSITY * LUMENS_PER_INTENSITY,
            range: SUN_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Sun,
    ));
}

/// Local transform of a ring relative to its (unit-scaled) planet.
///
/// The annulus mesh lies in the XY plane; it is laid flat into the orbital
/// plane and then tilted about X.
pub fn ring_transform(ring: &RingSpec) -> Transform {
    Transform::from_rotation(Quat::from_rotation_x(ring.tilt - FRAC_PI_2))
}

fn spawn_planet(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    sphere: &Handle<Mesh>,
    body: &Body,
) {
    let [r, g, b] = body_color(&body.name);
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(r, g, b),
        perceptual_roughness: 0.8,
        ..default()
    });

    let mut planet = commands.spawn((
        Mesh3d(sphere.clone()),
        MeshMaterial3d(material),
        Transform::from_scale(Vec3::splat(body.size)),
        OrbitingBody {
            name: body.name.clone(),
        },
    ));

    if let Some(ring) = body.ring {
        // Radii are in the planet's local units; the parent scale supplies size.
        let mesh = meshes.add(Annulus::new(ring.inner_radius(1.0), ring.outer_radius(1.0)));
        let material = materials.add(StandardMaterial {
            base_color: Color::srgba(r, g, b, ring.opacity),
            alpha_mode: AlphaMode::Blend,
            double_sided: true,
            cull_mode: None,
            ..default()
        });
        planet.with_children(|parent| {
            parent.spawn((
                Mesh3d(mesh),
                MeshMaterial3d(material),
                ring_transform(&ring),
                PlanetRing,
            ));
        });
    }
}

/// Spawn entities for new catalog bodies and despawn those that left.
pub fn reconcile_body_entities(
    mut commands: Commands,
    catalog: Res<BodyCatalog>,
    planet_mesh: Res<PlanetMesh>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing: Query<(Entity, &OrbitingBody)>,
) {
    if !catalog.is_changed() {
        return;
    }

    let mut present = HashSet::new();
    for (entity, body) in existing.iter() {
        if catalog.contains(&body.name) {
            present.insert(body.name.clone());
        } else {
            commands.entity(entity).despawn();
            debug!("Despawned {}", body.name);
        }
    }

    let mut spawned = 0;
    for body in catalog.iter().filter(|b| !present.contains(&b.name)) {
        spawn_planet(
            &mut commands,
            &mut meshes,
            &mut materials,
            &planet_mesh.0,
            body,
        );
        spawned += 1;
    }
    if spawned > 0 {
        info!("Spawned {} orbiting bodies", spawned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::saturn_ring;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_untilted_ring_lies_in_orbital_plane() {
        let ring = RingSpec {
            tilt: 0.0,
            ..saturn_ring()
        };
        let normal = ring_transform(&ring).rotation * Vec3::Z;
        assert_abs_diff_eq!(normal.y.abs(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_saturn_ring_is_tilted() {
        let ring = saturn_ring();
        let normal = ring_transform(&ring).rotation * Vec3::Z;
        let angle_from_vertical = normal.angle_between(Vec3::Y);
        assert_abs_diff_eq!(angle_from_vertical, ring.tilt, epsilon = 1e-4);
    }
}
