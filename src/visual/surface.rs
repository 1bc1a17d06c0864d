use bevy::prelude::*;

use crate::attraction::TargetSurface;
use crate::camera::viewport_to_board;
use crate::visual::magnet::MagnetTargets;

/// Attraction backend for board entities seen through the main camera
///
/// Centres come from the layout anchor projected to the viewport; offsets
/// are mapped back onto the anchor's plane and written to `Transform`.
pub struct CameraSurface<'a, 'w, 's> {
    pub camera: &'a Camera,
    pub camera_transform: &'a GlobalTransform,
    pub targets: &'a mut MagnetTargets<'w, 's>,
}

impl CameraSurface<'_, '_, '_> {
    fn anchor_to_viewport(&self, anchor: Vec3) -> Option<Vec2> {
        self.camera
            .world_to_viewport(self.camera_transform, anchor)
            .ok()
    }
}

impl TargetSurface<Entity> for CameraSurface<'_, '_, '_> {
    fn bounds_center(&self, target: &Entity) -> Option<Vec2> {
        let (anchor, _) = self.targets.get(*target).ok()?;
        self.anchor_to_viewport(anchor.0)
    }

    fn apply_offset(&mut self, target: &Entity, offset: Vec2) {
        let Ok((anchor, _)) = self.targets.get(*target) else {
            return;
        };
        let anchor = anchor.0;
        let Some(center) = self.anchor_to_viewport(anchor) else {
            return;
        };

        let (Some(from), Some(to)) = (
            viewport_to_board(self.camera, self.camera_transform, center, anchor.y),
            viewport_to_board(
                self.camera,
                self.camera_transform,
                center + offset,
                anchor.y,
            ),
        ) else {
            return;
        };

        let Ok((_, mut transform)) = self.targets.get_mut(*target) else {
            return;
        };
        let next = anchor + (to - from);
        // Elements at rest keep their change ticks
        if transform.translation != next {
            transform.translation = next;
        }
    }
}
