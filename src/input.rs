use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorPos>()
            .add_message::<PointerMoved>()
            .add_systems(Update, collect_pointer_moves.in_set(PointerInputSet));
    }
}

/// Systems that turn platform input into `PointerMoved`
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointerInputSet;

/// Raw pointer movement, one per platform event (not per frame)
#[derive(Message, Debug, Clone, Copy)]
pub struct PointerMoved {
    /// Window (logical) coordinates: pixels from top-left
    pub position: Vec2,
}

/// Last pointer position seen (mouse or touch), if any
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct CursorPos(pub Option<Vec2>);

pub fn collect_pointer_moves(
    mut ev_cursor: MessageReader<CursorMoved>,
    mut touch_events: MessageReader<TouchInput>,
    mut pos: ResMut<CursorPos>,
    mut out: MessageWriter<PointerMoved>,
) {
    for e in ev_cursor.read() {
        pos.0 = Some(e.position);
        out.write(PointerMoved {
            position: e.position,
        });
    }

    for ev in touch_events.read() {
        match ev.phase {
            TouchPhase::Started | TouchPhase::Moved => {
                pos.0 = Some(ev.position);
                out.write(PointerMoved {
                    position: ev.position,
                });
            }
            TouchPhase::Ended | TouchPhase::Canceled => {}
        }
    }
}
