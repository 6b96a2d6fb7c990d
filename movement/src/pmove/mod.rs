/*!
Player movement root module.

Turns one tick of player intent into a velocity update. The code is split the way the
tick flows:

- jump:       jump-intent latch (hold-to-jump or one jump per press)
- friction:   ground-only horizontal speed decay
- accelerate: clamped acceleration toward a wish direction, shared by both branches
- ground:     grounded branch (friction, accelerate, vertical bias, takeoff)
- air:        airborne branch (strafe-jump case, air control, gravity)

Everything here is a total, deterministic function of config + command + facing + dt + state.
Collision and the grounded flag belong to the character controller.
*/

pub mod accelerate;
pub mod air;
pub mod friction;
pub mod ground;
pub mod jump;

pub use accelerate::accelerate;
pub use air::{air_acceleration_params, air_control, air_move};
pub use friction::apply_friction;
pub use ground::ground_move;
pub use jump::update_jump_queue;

use crate::{MoveCommand, MovementConfig, MovementState, Quat};

/// Advance one tick and return the new state, leaving `prior` untouched.
pub fn step(
    config: &MovementConfig,
    command: &MoveCommand,
    facing: &Quat,
    dt: f32,
    prior: &MovementState,
) -> MovementState {
    let mut next = prior.clone();
    step_in_place(config, command, facing, dt, &mut next);
    next
}

/// Advance one tick, mutating `state`.
///
/// Order: jump queue, then the ground or air branch chosen by `state.grounded`, then the
/// top-speed bookkeeping. `state.grounded` must already hold the controller's answer for
/// the previous tick.
///
/// Returns `true` if the character took off this tick.
pub fn step_in_place(
    config: &MovementConfig,
    command: &MoveCommand,
    facing: &Quat,
    dt: f32,
    state: &mut MovementState,
) -> bool {
    update_jump_queue(
        config,
        command.jump_held,
        command.jump_pressed,
        command.jump_released,
        state,
    );

    let jumped = if state.grounded {
        ground_move(config, command, facing, dt, state)
    } else {
        air_move(config, command, facing, dt, state);
        false
    };

    state.record_top_speed();

    log::trace!(
        "pmove: grounded={} vel=({:.3}, {:.3}, {:.3}) hspeed={:.3}",
        state.grounded,
        state.velocity.x,
        state.velocity.y,
        state.velocity.z,
        state.horizontal_speed()
    );

    jumped
}
