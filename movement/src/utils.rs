use crate::{Quat, Vec3, constants::SPEED_EPS};

/// Copy of `v` with the vertical component zeroed.
#[inline]
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Planar (XZ) length of `v`.
#[inline]
pub fn horizontal_speed(v: Vec3) -> f32 {
    (v.x * v.x + v.z * v.z).sqrt()
}

/// Unit vector along `v`, or zero when `v` is too short to normalize.
#[inline]
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    v.try_normalize(SPEED_EPS).unwrap_or_else(Vec3::zeros)
}

/// World-space wish vector for the given stick input, before normalization.
///
/// The local vector is `(rightward, 0, forward)`, rotated by the yaw-only `facing`.
/// Its length is what the ground and air branches scale by `move_speed`.
#[inline]
pub fn wish_vector(facing: &Quat, forward: f32, rightward: f32) -> Vec3 {
    facing * Vec3::new(rightward, 0.0, forward)
}

/// Yaw (radians) whose forward axis points along the planar part of `dir`.
///
/// Returns `None` if the planar part is too small.
pub fn yaw_from_xz(dir: Vec3) -> Option<f32> {
    if dir.x * dir.x + dir.z * dir.z > SPEED_EPS {
        return Some(dir.x.atan2(dir.z));
    }

    None
}

/// Yaw-only rotation about +Y.
#[inline]
pub fn facing_from_yaw(yaw_radians: f32) -> Quat {
    Quat::from_axis_angle(&Vec3::y_axis(), yaw_radians)
}
