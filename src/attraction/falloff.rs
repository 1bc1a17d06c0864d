// ============================================================================
// ATTRACTION MATH - falloff, offset and smoothing
// ============================================================================

use bevy::math::Vec2;

/// Fixed per-frame blend factor for chasing the target offset.
/// Not scaled by frame time, so higher refresh rates respond faster.
pub const SMOOTHING: f32 = 0.15;

/// Linear falloff: 1.0 at the centre, 0.0 at (and beyond) `radius`
pub fn falloff(distance: f32, radius: f32) -> f32 {
    if distance < radius {
        (radius - distance) / radius
    } else {
        0.0
    }
}

/// Desired offset for an element centred at `center` given the pointer position
///
/// Zero outside the radius. At the exact centre the force is 1.0 but the
/// delta is zero, so the offset is zero too.
pub fn attraction_offset(pointer: Vec2, center: Vec2, strength: f32, radius: f32) -> Vec2 {
    let delta = pointer - center;
    let distance = delta.length();

    if distance < radius {
        delta * strength * falloff(distance, radius)
    } else {
        Vec2::ZERO
    }
}

/// Exponential smoothing step: move `current` a fixed fraction toward `target`
pub fn smooth_toward(current: Vec2, target: Vec2, coefficient: f32) -> Vec2 {
    current + (target - current) * coefficient
}
