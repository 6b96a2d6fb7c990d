use serde::Serialize;

use crate::{
    Quat, Vec3,
    constants::{DEFAULT_CAMERA_Y_OFFSET, DEFAULT_LOOK_SENSITIVITY, LOOK_SCALE, PITCH_LIMIT_DEG},
    utils::facing_from_yaw,
};

/// Mouse-look angles in degrees.
///
/// Only yaw feeds movement (through [`ViewAngles::facing`]). Pitch is for the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ViewAngles {
    /// Positive looks down, clamped to ±90.
    pub pitch_deg: f32,
    /// Positive turns right, unbounded.
    pub yaw_deg: f32,
}

/// Look sensitivity per mouse axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LookSensitivity {
    pub x: f32,
    pub y: f32,
}

impl Default for LookSensitivity {
    fn default() -> Self {
        Self {
            x: DEFAULT_LOOK_SENSITIVITY,
            y: DEFAULT_LOOK_SENSITIVITY,
        }
    }
}

impl ViewAngles {
    pub fn from_yaw(yaw_deg: f32) -> Self {
        Self {
            pitch_deg: 0.0,
            yaw_deg,
        }
    }

    /// Apply a raw mouse delta. Moving the mouse up (`dy > 0`) looks up.
    pub fn apply_look(&mut self, mouse_dx: f32, mouse_dy: f32, sensitivity: LookSensitivity) {
        self.pitch_deg -= mouse_dy * sensitivity.y * LOOK_SCALE;
        self.yaw_deg += mouse_dx * sensitivity.x * LOOK_SCALE;
        self.pitch_deg = self.pitch_deg.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }

    /// Yaw-only rotation that maps local wish vectors into world space.
    pub fn facing(&self) -> Quat {
        facing_from_yaw(self.yaw_deg.to_radians())
    }

    /// Full camera rotation: yaw about +Y, then pitch about the local +X.
    pub fn camera_rotation(&self) -> Quat {
        self.facing() * Quat::from_axis_angle(&Vec3::x_axis(), self.pitch_deg.to_radians())
    }
}

/// Camera position for a body origin.
#[inline]
pub fn eye_position(body: Vec3, camera_y_offset: f32) -> Vec3 {
    body + Vec3::new(0.0, camera_y_offset, 0.0)
}

/// [`eye_position`] with the default camera offset.
#[inline]
pub fn default_eye_position(body: Vec3) -> Vec3 {
    eye_position(body, DEFAULT_CAMERA_Y_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_is_clamped_both_ways() {
        let mut view = ViewAngles::default();
        let sens = LookSensitivity::default();

        view.apply_look(0.0, 10_000.0, sens);
        assert_eq!(view.pitch_deg, -PITCH_LIMIT_DEG);

        view.apply_look(0.0, -10_000.0, sens);
        assert_eq!(view.pitch_deg, PITCH_LIMIT_DEG);
    }

    #[test]
    fn yaw_accumulates_with_sensitivity_scale() {
        let mut view = ViewAngles::default();
        view.apply_look(10.0, 0.0, LookSensitivity::default());
        // 10 * 30 * 0.02
        assert!((view.yaw_deg - 6.0).abs() < 1.0e-5);

        view.apply_look(1000.0, 0.0, LookSensitivity::default());
        assert!(view.yaw_deg > 360.0);
    }

    #[test]
    fn pitch_does_not_tilt_the_movement_facing() {
        let mut view = ViewAngles::from_yaw(30.0);
        view.pitch_deg = 60.0;

        let forward = view.facing() * Vec3::z();
        assert!(forward.y.abs() < 1.0e-6);
        assert!((forward.norm() - 1.0).abs() < 1.0e-5);

        let look = view.camera_rotation() * Vec3::z();
        assert!(look.y.abs() > 0.5);
    }

    #[test]
    fn eye_sits_above_the_body() {
        let body = Vec3::new(1.0, 2.0, 3.0);
        let eye = default_eye_position(body);
        assert!((eye - Vec3::new(1.0, 2.6, 3.0)).norm() < 1.0e-5);
    }
}
