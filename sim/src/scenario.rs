//! Scripted command sources.
//!
//! Each scenario plays a perfect player: it reads the character's state before the tick and
//! produces the stick, jump and mouse input for it.

use clap::ValueEnum;
use movement::{
    JumpButton, LookSensitivity, MoveCommand, MovementState, ViewAngles, constants::LOOK_SCALE,
    yaw_from_xz,
};

/// Seconds of plain running before the airborne scenarios start jumping.
const RUN_UP_SECS: f32 = 1.0;

/// Yaw rate for the air-turn scenario (degrees/second).
const AIR_TURN_RATE_DEG: f32 = 90.0;

/// Produces one `MoveCommand` per tick and may turn the view.
pub trait CommandSource {
    /// `grounded` is the controller's answer from the previous tick.
    fn next(
        &mut self,
        grounded: bool,
        state: &MovementState,
        view: &mut ViewAngles,
        dt: f32,
    ) -> MoveCommand;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Hold forward on the ground.
    Run,
    /// Hold forward and keep jumping.
    Bhop,
    /// Side-strafe in the air, alternating direction each jump.
    Strafe,
    /// One jump, then forward + strafe while turning, steered by air control.
    AirTurn,
}

impl Scenario {
    pub fn source(self) -> Box<dyn CommandSource> {
        match self {
            Scenario::Run => Box::new(Run),
            Scenario::Bhop => Box::new(Bhop::default()),
            Scenario::Strafe => Box::new(Strafe::default()),
            Scenario::AirTurn => Box::new(AirTurn::default()),
        }
    }
}

/// Holds jump, but lets go for the first airborne tick after every takeoff.
///
/// That re-press arms the latch again in one-jump-per-press mode, so the next landing fires
/// immediately. In hold-to-jump mode the single released airborne tick changes nothing.
#[derive(Default)]
struct Retap {
    button: JumpButton,
    was_grounded: bool,
}

impl Retap {
    fn command(&mut self, forward: f32, rightward: f32, grounded: bool) -> MoveCommand {
        let just_left_ground = self.was_grounded && !grounded;
        self.was_grounded = grounded;
        MoveCommand::new(forward, rightward, !just_left_ground, &mut self.button)
    }
}

/// Turn the view by `delta_deg` through the mouse, as a player would.
fn turn(view: &mut ViewAngles, delta_deg: f32) {
    let sensitivity = LookSensitivity::default();
    view.apply_look(delta_deg / (sensitivity.x * LOOK_SCALE), 0.0, sensitivity);
}

struct Run;

impl CommandSource for Run {
    fn next(&mut self, _: bool, _: &MovementState, _: &mut ViewAngles, _: f32) -> MoveCommand {
        MoveCommand::axes(1.0, 0.0)
    }
}

#[derive(Default)]
struct Bhop {
    jump: Retap,
}

impl CommandSource for Bhop {
    fn next(&mut self, grounded: bool, _: &MovementState, _: &mut ViewAngles, _: f32) -> MoveCommand {
        self.jump.command(1.0, 0.0, grounded)
    }
}

struct Strafe {
    jump: Retap,
    elapsed: f32,
    side: f32,
    jumps: u32,
}

impl Default for Strafe {
    fn default() -> Self {
        Self {
            jump: Retap::default(),
            elapsed: 0.0,
            side: 1.0,
            jumps: 0,
        }
    }
}

impl CommandSource for Strafe {
    fn next(
        &mut self,
        grounded: bool,
        state: &MovementState,
        view: &mut ViewAngles,
        dt: f32,
    ) -> MoveCommand {
        self.elapsed += dt;
        if self.elapsed < RUN_UP_SECS {
            return MoveCommand::axes(1.0, 0.0);
        }

        if grounded {
            // Flip sides on each landing so the path zig-zags instead of circling.
            self.jumps += 1;
            self.side = if self.jumps % 2 == 0 { 1.0 } else { -1.0 };
            return self.jump.command(1.0, 0.0, grounded);
        }

        // Look along the current heading, so the strafe key pushes perpendicular to it.
        if let Some(heading) = yaw_from_xz(state.velocity) {
            let delta = heading.to_degrees() - view.yaw_deg;
            let delta = (delta + 180.0).rem_euclid(360.0) - 180.0;
            turn(view, delta);
        }

        self.jump.command(0.0, self.side, grounded)
    }
}

#[derive(Default)]
struct AirTurn {
    jump: Retap,
    elapsed: f32,
    jumped: bool,
}

impl CommandSource for AirTurn {
    fn next(
        &mut self,
        grounded: bool,
        _: &MovementState,
        view: &mut ViewAngles,
        dt: f32,
    ) -> MoveCommand {
        self.elapsed += dt;
        if self.elapsed < RUN_UP_SECS {
            return MoveCommand::axes(1.0, 0.0);
        }

        if grounded {
            if self.jumped {
                return MoveCommand::axes(1.0, 1.0);
            }
            self.jumped = true;
            return self.jump.command(1.0, 0.0, grounded);
        }

        turn(view, AIR_TURN_RATE_DEG * dt);
        MoveCommand::axes(1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn retap_releases_once_per_takeoff() {
        let mut retap = Retap::default();

        let on_ground = retap.command(0.0, 0.0, true);
        assert!(on_ground.jump_held && on_ground.jump_pressed);

        let first_air = retap.command(0.0, 0.0, false);
        assert!(!first_air.jump_held && first_air.jump_released);

        let second_air = retap.command(0.0, 0.0, false);
        assert!(second_air.jump_held && second_air.jump_pressed);

        let third_air = retap.command(0.0, 0.0, false);
        assert!(third_air.jump_held && !third_air.jump_pressed);
    }

    #[test]
    fn turn_moves_yaw_by_the_requested_amount() {
        let mut view = ViewAngles::default();
        turn(&mut view, 37.5);
        assert!((view.yaw_deg - 37.5).abs() < 1.0e-3);
        assert_eq!(view.pitch_deg, 0.0);
    }

    #[test]
    fn strafe_runs_up_before_strafing() {
        let mut source = Scenario::Strafe.source();
        let mut view = ViewAngles::default();
        let state = MovementState::default();

        let first = source.next(true, &state, &mut view, DT);
        assert_eq!(first.forward, 1.0);
        assert_eq!(first.rightward, 0.0);
        assert!(!first.jump_held);
    }

    #[test]
    fn strafe_in_the_air_has_no_forward_input() {
        let mut source = Scenario::Strafe.source();
        let mut view = ViewAngles::default();
        let mut state = MovementState::new(false);
        state.velocity = movement::Vec3::new(5.0, 0.0, 5.0);

        let mut command = MoveCommand::default();
        for _ in 0..=(RUN_UP_SECS / DT) as usize + 1 {
            command = source.next(false, &state, &mut view, DT);
        }

        assert_eq!(command.forward, 0.0);
        assert!(command.rightward != 0.0);
        // Looking along the heading.
        assert!((view.yaw_deg - 45.0).abs() < 1.0e-2);
    }
}
