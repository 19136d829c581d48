//! Position synchronization between kinematics and rendering.

use bevy::prelude::*;

use crate::catalog::BodyCatalog;
use crate::kinematics::BodyPositions;
use crate::render::bodies::OrbitingBody;

/// Move each planet to its live position and scale it to its current size.
///
/// Planets without a published position keep their last transform.
pub fn sync_body_transforms(
    positions: Res<BodyPositions>,
    catalog: Res<BodyCatalog>,
    mut query: Query<(&OrbitingBody, &mut Transform)>,
) {
    for (body, mut transform) in query.iter_mut() {
        if let Some(position) = positions.get(&body.name) {
            transform.translation = position;
        }
        if let Some(entry) = catalog.get(&body.name) {
            transform.scale = Vec3::splat(entry.size);
        }
    }
}
