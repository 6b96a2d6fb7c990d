use std::time::Duration;

/// Gravity magnitude in meters per second squared (positive value).
///
/// The grounded branch uses it as a per-tick downward bias, the air branch integrates it.
pub const DEFAULT_GRAVITY: f32 = 20.0;

/// Ground friction coefficient.
pub const DEFAULT_FRICTION: f32 = 6.0;

/// Ground wish speed for full stick deflection on one axis (meters/second).
pub const DEFAULT_MOVE_SPEED: f32 = 7.0;

pub const DEFAULT_GROUND_ACCELERATION: f32 = 14.0;

/// Floor for the friction "control" speed, so slow movers still stop quickly.
pub const DEFAULT_GROUND_DEACCELERATION: f32 = 10.0;

pub const DEFAULT_AIR_ACCELERATION: f32 = 2.0;
pub const DEFAULT_AIR_DEACCELERATION: f32 = 2.0;

/// Air-control steering strength.
///
/// Convention:
/// - 0.0 = no steering correction while airborne
/// - larger values curve the trajectory toward the wish direction faster
///
/// Typical values: 0.1 .. 0.5
pub const DEFAULT_AIR_CONTROL: f32 = 0.3;

/// Acceleration used while strafing in the air with no forward input.
pub const DEFAULT_STRAFE_ACCELERATION: f32 = 50.0;

/// Wish speed cap while strafing in the air with no forward input (meters/second).
pub const DEFAULT_STRAFE_SPEED: f32 = 1.0;

/// Vertical takeoff speed (meters/second).
pub const DEFAULT_JUMP_SPEED: f32 = 8.0;

/// Gain applied to the squared alignment in air control.
pub const AIR_CONTROL_GAIN: f32 = 32.0;

/// Below this, forward input or wish speed counts as zero for air control.
pub const AIR_CONTROL_EPS: f32 = 0.001;

/// Smallest horizontal speed we are willing to normalize (meters/second).
pub const SPEED_EPS: f32 = 1.0e-6;

/// Mouse delta scale applied on top of the look sensitivity.
pub const LOOK_SCALE: f32 = 0.02;

pub const DEFAULT_LOOK_SENSITIVITY: f32 = 30.0;

/// Pitch limit in degrees, both up and down.
pub const PITCH_LIMIT_DEG: f32 = 90.0;

/// Camera height above the body origin (meters).
pub const DEFAULT_CAMERA_Y_OFFSET: f32 = 0.6;

/// Default simulation rate.
pub const DEFAULT_TICK: Duration = Duration::from_micros(16_667);

/// Longest frame delta the fixed-timestep accumulator will accept.
pub const MAX_FRAME_DT: Duration = Duration::from_millis(125);

/// Shortest fixed tick the accumulator will run (10 kHz).
pub const MIN_TICK: Duration = Duration::from_micros(100);

/// Upper bound on catch-up steps per frame.
pub const DEFAULT_MAX_STEPS_PER_FRAME: u32 = 8;

/// Character capsule used by the Rapier-backed controller (meters).
pub const DEFAULT_CAPSULE_RADIUS: f32 = 0.3;
pub const DEFAULT_CAPSULE_HALF_HEIGHT: f32 = 0.6;
