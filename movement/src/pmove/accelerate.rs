use crate::{MovementState, Vec3};

/// Accelerate horizontal velocity toward `wish_dir`, never past `wish_speed` along it.
///
/// - The projection of velocity on `wish_dir` is signed, so moving against the wish
///   direction accelerates at the full rate.
/// - Once the projection reaches `wish_speed` nothing is added. This caps plain forward
///   running at `wish_speed` while velocity perpendicular to `wish_dir` is left alone,
///   which is what lets strafe-jumping exceed it.
/// - Only `x`/`z` are written.
#[inline]
pub fn accelerate(wish_dir: Vec3, wish_speed: f32, accel: f32, dt: f32, state: &mut MovementState) {
    let current_speed = state.velocity.dot(&wish_dir);
    let add_speed = wish_speed - current_speed;
    if add_speed <= 0.0 {
        return;
    }

    let accel_speed = (accel * dt * wish_speed).min(add_speed);

    state.velocity.x += accel_speed * wish_dir.x;
    state.velocity.z += accel_speed * wish_dir.z;
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const TOL: f32 = 1.0e-4;

    fn state_with(velocity: Vec3) -> MovementState {
        MovementState {
            velocity,
            ..MovementState::default()
        }
    }

    #[test]
    fn projection_never_overshoots_wish_speed() {
        let dirs = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, 1.0).normalize(),
            Vec3::new(-0.6, 0.0, 0.8),
        ];
        let velocities = [
            Vec3::zeros(),
            Vec3::new(3.0, 0.0, -2.0),
            Vec3::new(-9.0, 4.0, 1.0),
            Vec3::new(0.5, 0.0, 0.5),
        ];

        for dir in dirs {
            for velocity in velocities {
                for (wish_speed, accel) in [(7.0, 14.0), (1.0, 50.0), (7.0, 1000.0), (0.0, 14.0)] {
                    let mut state = state_with(velocity);
                    let before = state.velocity.dot(&dir);
                    accelerate(dir, wish_speed, accel, DT, &mut state);
                    let after = state.velocity.dot(&dir);

                    if before < wish_speed {
                        assert!(after <= wish_speed + TOL, "{after} > {wish_speed}");
                        assert!(after >= before - TOL);
                    } else {
                        assert!((after - before).abs() < TOL);
                    }
                }
            }
        }
    }

    #[test]
    fn huge_acceleration_lands_exactly_on_wish_speed() {
        let mut state = state_with(Vec3::new(2.0, 0.0, 0.0));
        accelerate(Vec3::x(), 7.0, 10_000.0, DT, &mut state);
        assert!((state.velocity.x - 7.0).abs() < TOL);
    }

    #[test]
    fn acceleration_is_rate_limited() {
        let mut state = state_with(Vec3::zeros());
        accelerate(Vec3::z(), 7.0, 14.0, DT, &mut state);
        // 14 * (1/60) * 7
        assert!((state.velocity.z - 14.0 * 7.0 / 60.0).abs() < TOL);
    }

    #[test]
    fn vertical_velocity_is_untouched() {
        let mut state = state_with(Vec3::new(0.0, -3.0, 0.0));
        accelerate(Vec3::x(), 7.0, 14.0, DT, &mut state);
        assert_eq!(state.velocity.y, -3.0);
    }

    #[test]
    fn perpendicular_speed_is_kept() {
        let mut state = state_with(Vec3::new(0.0, 0.0, 20.0));
        accelerate(Vec3::x(), 1.0, 50.0, DT, &mut state);
        assert_eq!(state.velocity.z, 20.0);
        assert!(state.velocity.x > 0.0);
        assert!(state.horizontal_speed() > 20.0);
    }
}
