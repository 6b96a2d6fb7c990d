//! Static arena for the headless driver.

use movement::{ColliderShapeDef, Quat, Vec3, WorldStaticDef};

/// Half-width of the walled arena (meters).
pub const ARENA_HALF_EXTENT: f32 = 400.0;

const WALL_HEIGHT: f32 = 4.0;
const WALL_THICKNESS: f32 = 1.0;

/// Flat floor at y = 0 fenced in by four walls.
pub fn arena() -> Vec<WorldStaticDef> {
    let mut defs = vec![WorldStaticDef::floor(1)];

    let long = Vec3::new(ARENA_HALF_EXTENT, WALL_HEIGHT, WALL_THICKNESS);
    let offset = ARENA_HALF_EXTENT + WALL_THICKNESS;
    let walls = [
        (Vec3::new(0.0, WALL_HEIGHT, offset), 0.0),
        (Vec3::new(0.0, WALL_HEIGHT, -offset), 0.0),
        (Vec3::new(offset, WALL_HEIGHT, 0.0), std::f32::consts::FRAC_PI_2),
        (Vec3::new(-offset, WALL_HEIGHT, 0.0), std::f32::consts::FRAC_PI_2),
    ];

    for (id, (translation, yaw)) in (2..).zip(walls) {
        defs.push(WorldStaticDef {
            id,
            translation,
            rotation: Quat::from_axis_angle(&Vec3::y_axis(), yaw),
            shape: ColliderShapeDef::Cuboid { half_extents: long },
        });
    }

    defs
}
