use crate::input::PointerInputSet;
use crate::visual::cursor::{CursorOverlay, follow_cursor};
use crate::visual::magnet::{MagnetPlugin, register_magnets, unregister_magnets};
use crate::visual::setup::{relayout_targets, setup_scene, toggle_magnets};
use bevy::prelude::*;

/// Demo scene: placeholder targets, cursor overlay and the Space toggle
pub struct PortfolioPlugin;

impl Plugin for PortfolioPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MagnetPlugin)
            .init_resource::<CursorOverlay>()
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    // Mount/unmount before the magnet systems see the frame
                    (toggle_magnets, relayout_targets)
                        .chain()
                        .before(unregister_magnets)
                        .before(register_magnets),
                    follow_cursor.after(PointerInputSet),
                ),
            );
    }
}
