//! Jump-intent latch.
//!
//! In bunnyhop mode the latch simply mirrors the held state, so holding jump re-arms on every
//! landing. Otherwise a press arms it and a release disarms it, which gives exactly one jump
//! per physical press even when the press outlasts the landing.

use crate::{MovementConfig, MovementState};

/// Update `state.wish_jump` from this tick's jump control state and edges.
#[inline]
pub fn update_jump_queue(
    config: &MovementConfig,
    jump_held: bool,
    jump_pressed: bool,
    jump_released: bool,
    state: &mut MovementState,
) -> bool {
    if config.bunnyhop_mode {
        state.wish_jump = jump_held;
        return state.wish_jump;
    }

    if jump_pressed && !state.wish_jump {
        state.wish_jump = true;
    }
    if jump_released {
        state.wish_jump = false;
    }

    state.wish_jump
}
