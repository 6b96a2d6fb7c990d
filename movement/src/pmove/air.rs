use crate::{
    MoveCommand, MovementConfig, MovementState, Quat, Vec3,
    constants::{AIR_CONTROL_EPS, AIR_CONTROL_GAIN, SPEED_EPS},
    pmove::accelerate,
    utils::{normalize_or_zero, wish_vector},
};

/// Airborne branch.
///
/// Accelerates toward the wish direction (with the strafe-jump special case), steers with
/// air control using the unclamped wish speed, then integrates gravity.
pub fn air_move(
    config: &MovementConfig,
    command: &MoveCommand,
    facing: &Quat,
    dt: f32,
    state: &mut MovementState,
) {
    let raw = wish_vector(facing, command.forward, command.rightward);
    let wish_dir = normalize_or_zero(raw);
    state.wish_direction = wish_dir;
    let wish_speed = raw.norm() * config.move_speed;

    let (accel_wish_speed, accel) =
        air_acceleration_params(config, command, state.velocity, wish_dir, wish_speed);

    accelerate(wish_dir, accel_wish_speed, accel, dt, state);

    if config.air_control > 0.0 {
        air_control(config, command, dt, wish_dir, wish_speed, state);
    }

    state.velocity.y -= config.gravity * dt;
}

/// Wish speed and acceleration that `air_move` hands to `accelerate`.
///
/// Moving against the current velocity uses `air_deacceleration`. Pure side-strafing
/// (`forward == 0`, `rightward != 0`) caps the wish speed at `strafe_speed` and uses
/// `strafe_acceleration` instead, which is the fast way to build speed in the air.
pub fn air_acceleration_params(
    config: &MovementConfig,
    command: &MoveCommand,
    velocity: Vec3,
    wish_dir: Vec3,
    wish_speed: f32,
) -> (f32, f32) {
    let mut wish_speed = wish_speed;
    let mut accel = if velocity.dot(&wish_dir) < 0.0 {
        config.air_deacceleration
    } else {
        config.air_acceleration
    };

    if command.forward == 0.0 && command.rightward != 0.0 {
        wish_speed = wish_speed.min(config.strafe_speed);
        accel = config.strafe_acceleration;
    }

    (wish_speed, accel)
}

/// Curve horizontal velocity toward `wish_dir` without changing its magnitude.
///
/// Only active while holding forward with a nonzero wish speed. The turn rate grows with the
/// square of the alignment between velocity and the wish direction, and nothing happens when
/// they point apart. On a turn, `state.wish_direction` is set to the new heading.
pub fn air_control(
    config: &MovementConfig,
    command: &MoveCommand,
    dt: f32,
    wish_dir: Vec3,
    wish_speed: f32,
    state: &mut MovementState,
) {
    if command.forward.abs() < AIR_CONTROL_EPS || wish_speed.abs() < AIR_CONTROL_EPS {
        return;
    }

    let z_speed = state.velocity.y;
    let planar = Vec3::new(state.velocity.x, 0.0, state.velocity.z);
    let speed = planar.norm();
    if speed < SPEED_EPS {
        return;
    }

    let mut heading = planar / speed;
    let dot = heading.dot(&wish_dir);
    let k = AIR_CONTROL_GAIN * config.air_control * dot * dot * dt;

    if dot > 0.0 {
        heading = normalize_or_zero(heading * speed + wish_dir * k);
        state.wish_direction = heading;
    }

    state.velocity = Vec3::new(heading.x * speed, z_speed, heading.z * speed);
}
