pub mod command;
pub mod config;
pub mod constants;
pub mod controller;
pub mod pmove;
pub mod rapier_world;
pub mod simulator;
pub mod state;
pub mod timestep;
pub mod types;
pub mod utils;
pub mod view;

pub use command::{JumpButton, MoveCommand};
pub use config::{ConfigError, MovementConfig};
pub use controller::CharacterController;
pub use pmove::{
    accelerate, air_control, air_move, apply_friction, ground_move, step, step_in_place,
    update_jump_queue,
};
pub use rapier_world::{
    CapsuleSpec, ColliderShapeDef, RapierCharacter, RapierQueryWorld, WorldStaticDef,
};
pub use simulator::{Simulator, TickSample};
pub use state::MovementState;
pub use timestep::FixedTimestep;
pub use types::{Quat, Vec3};
pub use utils::{facing_from_yaw, horizontal, horizontal_speed, wish_vector, yaw_from_xz};
pub use view::{LookSensitivity, ViewAngles, default_eye_position, eye_position};
