use crate::Vec3;

/// Collision-resolving body that owns the character's position.
///
/// The movement step never sees collision geometry. Each tick it reads `is_grounded` (the
/// result of the previous `move_by`) and hands back `velocity * dt` as the desired
/// displacement.
pub trait CharacterController {
    /// Whether the last resolved move ended standing on a walkable surface.
    fn is_grounded(&self) -> bool;

    /// Apply a desired world-space displacement, clamped by collision.
    ///
    /// `dt` is the tick duration the displacement was computed for.
    fn move_by(&mut self, displacement: Vec3, dt: f32);

    /// Current world position of the character origin.
    fn position(&self) -> Vec3;
}
