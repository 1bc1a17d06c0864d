use bevy::prelude::*;

use crate::{
    attraction::CursorFollower,
    camera::{MainCamera, viewport_to_board},
    input::CursorPos,
};

/// Height of the cursor overlay above the board so it draws on top
const CURSOR_HEIGHT: f32 = 0.5;

/// The custom cursor overlay entity
#[derive(Component)]
pub struct CursorMarker;

#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct CursorOverlay(pub CursorFollower);

/// System: ease the cursor overlay toward the real pointer
pub fn follow_cursor(
    cursor: Res<CursorPos>,
    mut overlay: ResMut<CursorOverlay>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut markers: Query<(&mut Transform, &mut Visibility), With<CursorMarker>>,
) {
    let Some(pointer) = cursor.0 else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let screen = overlay.step(pointer);
    let Some(world) = viewport_to_board(camera, camera_transform, screen, CURSOR_HEIGHT) else {
        return;
    };

    for (mut transform, mut visibility) in &mut markers {
        transform.translation = world;
        visibility.set_if_neq(Visibility::Visible);
    }
}
