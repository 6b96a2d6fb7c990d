//! Movement tunables.
//!
//! One `MovementConfig` exists per character archetype and is read-only while the simulation
//! runs. The step functions never validate it; loading from disk does.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_AIR_ACCELERATION, DEFAULT_AIR_CONTROL, DEFAULT_AIR_DEACCELERATION, DEFAULT_FRICTION,
    DEFAULT_GRAVITY, DEFAULT_GROUND_ACCELERATION, DEFAULT_GROUND_DEACCELERATION,
    DEFAULT_JUMP_SPEED, DEFAULT_MOVE_SPEED, DEFAULT_STRAFE_ACCELERATION, DEFAULT_STRAFE_SPEED,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read movement config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse movement config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {value}")]
    Invalid { field: &'static str, value: f32 },
}

/// Configuration for air-strafe movement physics.
///
/// All values use metric units (meters, seconds). Missing fields in a config file fall back
/// to [`MovementConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Gravity acceleration (meters/second²).
    pub gravity: f32,

    /// Ground friction coefficient.
    pub friction: f32,

    /// Wish speed for a unit-length input (meters/second).
    pub move_speed: f32,

    pub ground_acceleration: f32,

    /// Minimum control speed used by friction, so slow movers still come to rest.
    pub ground_deacceleration: f32,

    pub air_acceleration: f32,

    /// Used instead of `air_acceleration` when the wish direction opposes velocity.
    pub air_deacceleration: f32,

    /// Air-control steering strength (0.0 disables it).
    pub air_control: f32,

    /// Acceleration for pure side-strafing in the air.
    pub strafe_acceleration: f32,

    /// Wish speed cap for pure side-strafing in the air.
    pub strafe_speed: f32,

    /// Vertical takeoff speed (meters/second).
    pub jump_speed: f32,

    /// Hold-to-jump when true, one jump per press when false.
    pub bunnyhop_mode: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            move_speed: DEFAULT_MOVE_SPEED,
            ground_acceleration: DEFAULT_GROUND_ACCELERATION,
            ground_deacceleration: DEFAULT_GROUND_DEACCELERATION,
            air_acceleration: DEFAULT_AIR_ACCELERATION,
            air_deacceleration: DEFAULT_AIR_DEACCELERATION,
            air_control: DEFAULT_AIR_CONTROL,
            strafe_acceleration: DEFAULT_STRAFE_ACCELERATION,
            strafe_speed: DEFAULT_STRAFE_SPEED,
            jump_speed: DEFAULT_JUMP_SPEED,
            bunnyhop_mode: false,
        }
    }
}

impl MovementConfig {
    /// Default tunables with hold-to-jump enabled.
    pub fn bunnyhop() -> Self {
        Self {
            bunnyhop_mode: true,
            ..Default::default()
        }
    }

    /// Parse a JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("loaded movement config from {}", path.display());
        Ok(config)
    }

    /// Every tunable must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("move_speed", self.move_speed),
            ("ground_acceleration", self.ground_acceleration),
            ("ground_deacceleration", self.ground_deacceleration),
            ("air_acceleration", self.air_acceleration),
            ("air_deacceleration", self.air_deacceleration),
            ("air_control", self.air_control),
            ("strafe_acceleration", self.strafe_acceleration),
            ("strafe_speed", self.strafe_speed),
            ("jump_speed", self.jump_speed),
        ];

        match fields
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((field, value)) => Err(ConfigError::Invalid { field, value }),
            None => Ok(()),
        }
    }
}
