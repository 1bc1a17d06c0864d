use bevy::math::Vec2;

use super::falloff::{SMOOTHING, smooth_toward};

/// Custom cursor overlay that trails the real pointer
#[derive(Debug, Clone, Copy)]
pub struct CursorFollower {
    pub position: Option<Vec2>,
    pub smoothing: f32,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self {
            position: None,
            smoothing: SMOOTHING,
        }
    }
}

impl CursorFollower {
    pub fn with_smoothing(smoothing: f32) -> Self {
        Self {
            smoothing,
            ..Self::default()
        }
    }

    /// Advance one frame toward `pointer`. The first sample snaps.
    pub fn step(&mut self, pointer: Vec2) -> Vec2 {
        let next = match self.position {
            Some(current) => smooth_toward(current, pointer, self.smoothing),
            None => pointer,
        };
        self.position = Some(next);
        next
    }
}
