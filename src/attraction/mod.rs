//! Pointer attraction ("magnetic hover") core.
//!
//! Backend-agnostic: elements are identified by an opaque key `T` and
//! reached through a [`TargetSurface`]. The Bevy side lives in
//! `visual::magnet`.

pub mod animator;
pub mod falloff;
pub mod follower;
pub mod lifecycle;
pub mod pointer;
pub mod record;
pub mod registry;

pub use animator::{FrameReport, MagneticField, TargetSurface};
pub use follower::CursorFollower;
pub use lifecycle::AnimatorState;
pub use record::{AttractionHandle, AttractionOptions};
