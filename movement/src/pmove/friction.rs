use crate::{MovementConfig, MovementState};

/// Decay horizontal speed toward zero while grounded.
///
/// `t` scales the loss: the grounded branch passes 0.0 on the tick a jump is about to fire
/// and 1.0 otherwise. Airborne states keep their speed, and vertical velocity is untouched.
pub fn apply_friction(config: &MovementConfig, state: &mut MovementState, t: f32, dt: f32) {
    let speed = state.horizontal_speed();

    let drop = if state.grounded {
        let control = speed.max(config.ground_deacceleration);
        control * config.friction * dt * t
    } else {
        0.0
    };

    let new_speed = speed - drop;
    state.friction_result = new_speed;

    if speed > 0.0 {
        let scale = new_speed.max(0.0) / speed;
        state.velocity.x *= scale;
        state.velocity.z *= scale;
    }
}
