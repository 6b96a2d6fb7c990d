use crate::{
    MoveCommand, MovementConfig, MovementState, Quat,
    pmove::{accelerate, apply_friction},
    utils::{normalize_or_zero, wish_vector},
};

/// Grounded branch.
///
/// Friction is computed before the jump latch is consulted so a jump tick loses no speed.
/// Vertical velocity is set, not integrated: a small `-gravity * dt` bias keeps the
/// controller glued to slopes, and a takeoff overwrites it with `jump_speed`.
///
/// Returns `true` if a jump fired this tick.
pub fn ground_move(
    config: &MovementConfig,
    command: &MoveCommand,
    facing: &Quat,
    dt: f32,
    state: &mut MovementState,
) -> bool {
    let t = if state.wish_jump { 0.0 } else { 1.0 };
    apply_friction(config, state, t, dt);

    let raw = wish_vector(facing, command.forward, command.rightward);
    let wish_dir = normalize_or_zero(raw);
    state.wish_direction = wish_dir;
    let wish_speed = raw.norm() * config.move_speed;

    accelerate(wish_dir, wish_speed, config.ground_acceleration, dt, state);

    state.velocity.y = -config.gravity * dt;

    if !state.wish_jump {
        return false;
    }

    state.velocity.y = config.jump_speed;
    state.wish_jump = false;
    log::debug!(
        "takeoff: vy={:.3} hspeed={:.3}",
        state.velocity.y,
        state.horizontal_speed()
    );
    true
}
