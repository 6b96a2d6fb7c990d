use serde::Serialize;

use crate::{Vec3, utils::horizontal_speed};

/// Per-character movement state, mutated once per tick by the step function.
///
/// `wish_direction`, `top_horizontal_speed` and `friction_result` are diagnostic outputs for
/// the camera/HUD. Nothing in the physics reads them back.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovementState {
    /// World-space velocity (meters/second). `y` is vertical.
    pub velocity: Vec3,

    /// Supplied by the character controller before the step runs, so it reflects the
    /// previous tick's resolved position.
    pub grounded: bool,

    /// Last steering direction (unit length, or zero without input).
    pub wish_direction: Vec3,

    /// Highest horizontal speed seen so far. Never decreases.
    pub top_horizontal_speed: f32,

    /// Latched jump request, consumed by the grounded branch on takeoff.
    pub wish_jump: bool,

    /// Pre-clamp speed computed by the last friction pass (may be negative).
    pub friction_result: f32,
}

impl Default for MovementState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MovementState {
    /// Spawn state: at rest, no queued jump.
    pub fn new(grounded: bool) -> Self {
        Self {
            velocity: Vec3::zeros(),
            grounded,
            wish_direction: Vec3::zeros(),
            top_horizontal_speed: 0.0,
            wish_jump: false,
            friction_result: 0.0,
        }
    }

    /// Horizontal (XZ) speed of the current velocity.
    #[inline]
    pub fn horizontal_speed(&self) -> f32 {
        horizontal_speed(self.velocity)
    }

    /// Raise the top-speed high-water mark from the current velocity.
    #[inline]
    pub fn record_top_speed(&mut self) {
        self.top_horizontal_speed = self.top_horizontal_speed.max(self.horizontal_speed());
    }
}
