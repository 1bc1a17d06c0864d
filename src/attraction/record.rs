use bevy::math::Vec2;
use serde::Deserialize;

pub const DEFAULT_STRENGTH: f32 = 0.3;
pub const DEFAULT_RADIUS: f32 = 100.0;

/// Identifies one registration; never reused within a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttractionHandle(pub u64);

/// Opt-in parameters an element passes at registration
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct AttractionOptions {
    pub strength: Option<f32>,
    pub radius: Option<f32>,
}

impl AttractionOptions {
    pub fn new(strength: f32, radius: f32) -> Self {
        Self {
            strength: Some(strength),
            radius: Some(radius),
        }
    }

    pub fn strength(&self) -> f32 {
        self.strength.unwrap_or(DEFAULT_STRENGTH)
    }

    pub fn radius(&self) -> f32 {
        self.radius.unwrap_or(DEFAULT_RADIUS)
    }
}

/// Per-element attraction state
///
/// `target` is a non-owning key into whatever holds the real element.
/// `current_offset` is only written by the animator's frame step.
#[derive(Debug, Clone)]
pub struct AttractionRecord<T> {
    pub target: T,
    pub strength: f32,
    pub radius: f32,
    pub current_offset: Vec2,
    pub target_offset: Vec2,
}

impl<T> AttractionRecord<T> {
    pub fn new(target: T, options: AttractionOptions) -> Self {
        Self {
            target,
            strength: options.strength(),
            radius: options.radius(),
            current_offset: Vec2::ZERO,
            target_offset: Vec2::ZERO,
        }
    }
}
