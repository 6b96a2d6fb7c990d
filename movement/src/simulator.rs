use serde::Serialize;

use crate::{
    CharacterController, MoveCommand, MovementConfig, MovementState, Vec3, ViewAngles,
    pmove::step_in_place, view::default_eye_position,
};

/// One tick of simulation output.
#[derive(Clone, Debug, Serialize)]
pub struct TickSample {
    pub tick: u64,
    pub position: Vec3,
    pub velocity: Vec3,
    pub horizontal_speed: f32,
    /// Grounded flag the movement step ran with.
    pub grounded: bool,
    /// A jump fired this tick.
    pub jumped: bool,
    pub top_horizontal_speed: f32,
    pub yaw_deg: f32,
    pub pitch_deg: f32,
    /// Camera position following the body.
    pub eye_position: Vec3,
    /// Unit camera forward, pitch included.
    pub look_direction: Vec3,
}

/// Drives one character: movement step, then controller move, then grounded hand-off.
pub struct Simulator<C: CharacterController> {
    pub config: MovementConfig,
    pub state: MovementState,
    pub view: ViewAngles,
    controller: C,
    tick: u64,
}

impl<C: CharacterController> Simulator<C> {
    /// Spawn state takes its grounded flag from the controller's placement.
    pub fn new(config: MovementConfig, controller: C) -> Self {
        let state = MovementState::new(controller.is_grounded());
        Self {
            config,
            state,
            view: ViewAngles::default(),
            controller,
            tick: 0,
        }
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Run one tick.
    ///
    /// The grounded flag is read from the controller before the step, which is the result of
    /// the previous tick's move. The new flag is only observed by the next tick.
    pub fn tick(&mut self, command: &MoveCommand, dt: f32) -> TickSample {
        self.state.grounded = self.controller.is_grounded();
        let grounded = self.state.grounded;

        let facing = self.view.facing();
        let jumped = step_in_place(&self.config, command, &facing, dt, &mut self.state);

        self.controller.move_by(self.state.velocity * dt, dt);

        let position = self.controller.position();
        let sample = TickSample {
            tick: self.tick,
            position,
            velocity: self.state.velocity,
            horizontal_speed: self.state.horizontal_speed(),
            grounded,
            jumped,
            top_horizontal_speed: self.state.top_horizontal_speed,
            yaw_deg: self.view.yaw_deg,
            pitch_deg: self.view.pitch_deg,
            eye_position: default_eye_position(position),
            look_direction: self.view.camera_rotation() * Vec3::z(),
        };
        self.tick += 1;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JumpButton, constants::DEFAULT_CAMERA_Y_OFFSET};

    const DT: f32 = 1.0 / 60.0;

    /// Infinite floor at y = 0, no other geometry.
    struct FlatFloor {
        position: Vec3,
        grounded: bool,
        moves: Vec<Vec3>,
    }

    impl FlatFloor {
        fn at(position: Vec3) -> Self {
            Self {
                position,
                grounded: position.y <= 0.0,
                moves: Vec::new(),
            }
        }
    }

    impl CharacterController for FlatFloor {
        fn is_grounded(&self) -> bool {
            self.grounded
        }

        fn move_by(&mut self, displacement: Vec3, _dt: f32) {
            self.moves.push(displacement);
            self.position += displacement;
            if self.position.y <= 0.0 {
                self.position.y = 0.0;
                self.grounded = true;
            } else {
                self.grounded = false;
            }
        }

        fn position(&self) -> Vec3 {
            self.position
        }
    }

    #[test]
    fn displacement_is_velocity_times_dt() {
        let mut sim = Simulator::new(MovementConfig::default(), FlatFloor::at(Vec3::zeros()));
        let sample = sim.tick(&MoveCommand::axes(1.0, 0.0), DT);

        let moved = sim.controller().moves[0];
        assert!((moved - sample.velocity * DT).norm() < 1.0e-6);
        assert_eq!(sim.ticks(), 1);
    }

    #[test]
    fn spawn_in_the_air_falls_then_lands() {
        let mut sim = Simulator::new(
            MovementConfig::default(),
            FlatFloor::at(Vec3::new(0.0, 1.0, 0.0)),
        );
        assert!(!sim.state.grounded);

        let mut landed_at = None;
        for i in 0..120 {
            let sample = sim.tick(&MoveCommand::default(), DT);
            if sample.grounded {
                landed_at = Some(i);
                break;
            }
        }

        let landed_at = landed_at.expect("never landed");
        assert!(landed_at > 1);
        assert_eq!(sim.controller().position().y, 0.0);
    }

    #[test]
    fn landing_is_seen_one_tick_late() {
        let mut sim = Simulator::new(MovementConfig::default(), FlatFloor::at(Vec3::zeros()));
        let mut button = JumpButton::default();

        let takeoff = sim.tick(&MoveCommand::new(0.0, 0.0, true, &mut button), DT);
        assert!(takeoff.grounded && takeoff.jumped);

        // The controller is airborne now, so the next step runs the air branch.
        let next = sim.tick(&MoveCommand::new(0.0, 0.0, true, &mut button), DT);
        assert!(!next.grounded);
        assert!(next.velocity.y < sim.config.jump_speed);
    }

    #[test]
    fn zero_jump_speed_without_input_reports_no_jumps() {
        let config = MovementConfig {
            jump_speed: 0.0,
            gravity: 0.0,
            ..MovementConfig::default()
        };
        let mut sim = Simulator::new(config, FlatFloor::at(Vec3::zeros()));

        for _ in 0..30 {
            let sample = sim.tick(&MoveCommand::axes(1.0, 0.0), DT);
            assert!(sample.grounded);
            assert!(!sample.jumped);
        }
    }

    #[test]
    fn sample_carries_the_camera() {
        let mut sim = Simulator::new(MovementConfig::default(), FlatFloor::at(Vec3::zeros()));
        sim.view = ViewAngles::from_yaw(90.0);
        sim.view.pitch_deg = 30.0;

        let sample = sim.tick(&MoveCommand::default(), DT);

        let above = sample.eye_position - sample.position;
        assert!((above - Vec3::new(0.0, DEFAULT_CAMERA_Y_OFFSET, 0.0)).norm() < 1.0e-5);
        assert_eq!(sample.pitch_deg, 30.0);
        assert!((sample.look_direction.norm() - 1.0).abs() < 1.0e-5);
        // Yaw 90 looks along +X; positive pitch tilts the view off the horizontal.
        assert!(sample.look_direction.x > 0.5);
        assert!(sample.look_direction.y.abs() > 0.4);
    }

    #[test]
    fn held_bunnyhop_jumps_on_every_landing() {
        let mut sim = Simulator::new(MovementConfig::bunnyhop(), FlatFloor::at(Vec3::zeros()));
        let mut button = JumpButton::default();

        let mut jumps = 0;
        let mut grounded_ticks = 0;
        for _ in 0..300 {
            let sample = sim.tick(&MoveCommand::new(1.0, 0.0, true, &mut button), DT);
            if sample.grounded {
                grounded_ticks += 1;
                assert!(sample.jumped);
            }
            if sample.jumped {
                jumps += 1;
            }
        }

        assert!(jumps > 1);
        assert_eq!(jumps, grounded_ticks);
    }
}
