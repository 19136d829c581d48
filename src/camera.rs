//! Camera plugin: wires the choreographer into the frame loop.
//!
//! Selection requests are applied before the frame's pose is computed, so a
//! request is either fully visible this frame or not at all.

use bevy::prelude::*;

use crate::catalog::BodyCatalog;
use crate::choreography::{CameraChoreographer, ChoreographyConfig};
use crate::kinematics::{update_body_positions, BodyPositions};
use crate::types::SimulationClock;

/// Vertical field of view of the main camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 60.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Request to focus a body, or `None` to return to the overview.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct SelectBodyRequest {
    pub name: Option<String>,
}

impl SelectBodyRequest {
    pub fn body(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn overview() -> Self {
        Self { name: None }
    }
}

/// Ordering of the camera's per-frame work.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CameraSystemSet {
    /// Body sync and selection requests.
    ApplyRequests,
    /// Pose computation and transform write.
    Drive,
}

/// Plugin providing the choreographed camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChoreographyConfig>()
            .init_resource::<BodyCatalog>()
            .init_resource::<BodyPositions>()
            .init_resource::<SimulationClock>()
            .add_message::<SelectBodyRequest>()
            .configure_sets(
                Update,
                (CameraSystemSet::ApplyRequests, CameraSystemSet::Drive)
                    .chain()
                    .after(update_body_positions),
            )
            .add_systems(Startup, (setup_choreographer, setup_camera))
            .add_systems(
                Update,
                (
                    (sync_catalog_bodies, apply_selection_requests)
                        .chain()
                        .in_set(CameraSystemSet::ApplyRequests),
                    drive_camera.in_set(CameraSystemSet::Drive),
                ),
            );
    }
}

/// Build the choreographer from the configured tuning and current catalog.
fn setup_choreographer(
    mut commands: Commands,
    config: Res<ChoreographyConfig>,
    catalog: Res<BodyCatalog>,
) {
    commands.insert_resource(CameraChoreographer::with_bodies(
        config.clone(),
        catalog.iter().cloned(),
    ));
}

/// Spawn the main camera at the overview pose.
fn setup_camera(mut commands: Commands, config: Res<ChoreographyConfig>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        AmbientLight {
            color: Color::WHITE,
            brightness: 150.0,
            ..default()
        },
        config.default_pose.to_transform(),
        MainCamera,
    ));
}

/// Keep the choreographer's body parameters in step with catalog edits.
fn sync_catalog_bodies(catalog: Res<BodyCatalog>, mut choreographer: ResMut<CameraChoreographer>) {
    if catalog.is_changed() {
        choreographer.sync_bodies(catalog.iter().cloned());
    }
}

/// Apply pending selection requests in arrival order.
fn apply_selection_requests(
    mut requests: MessageReader<SelectBodyRequest>,
    mut choreographer: ResMut<CameraChoreographer>,
) {
    for request in requests.read() {
        if let Err(err) = choreographer.select_body(request.name.as_deref()) {
            warn!("{}", err);
        }
    }
}

/// Compute this frame's pose and write it to the main camera.
fn drive_camera(
    time: Res<Time>,
    clock: Res<SimulationClock>,
    positions: Res<BodyPositions>,
    mut choreographer: ResMut<CameraChoreographer>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    choreographer.set_tick_rate(clock.tick_rate());
    let pose = choreographer.tick(time.elapsed_secs_f64(), &positions);

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = pose.to_transform();
}
