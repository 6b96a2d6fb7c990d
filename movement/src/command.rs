use serde::{Deserialize, Serialize};

/// Player intent for one tick. Produced once per tick and immutable while the tick runs.
///
/// Axis values are taken as supplied; clamping to [-1, 1] is the sampler's job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveCommand {
    /// Intent along the facing axis.
    pub forward: f32,
    /// Intent along the strafe axis.
    pub rightward: f32,
    /// Current physical state of the jump control.
    pub jump_held: bool,
    /// Jump went down since the last tick.
    pub jump_pressed: bool,
    /// Jump went up since the last tick.
    pub jump_released: bool,
}

impl MoveCommand {
    /// Build a command, deriving the jump edges from `button`.
    ///
    /// Call exactly once per tick: the edges are consumed by the sample.
    pub fn new(forward: f32, rightward: f32, jump_held: bool, button: &mut JumpButton) -> Self {
        let (jump_pressed, jump_released) = button.sample(jump_held);
        Self {
            forward,
            rightward,
            jump_held,
            jump_pressed,
            jump_released,
        }
    }

    /// Axis-only command with the jump control up.
    pub fn axes(forward: f32, rightward: f32) -> Self {
        Self {
            forward,
            rightward,
            ..Default::default()
        }
    }
}

/// Edge detector for the jump control.
#[derive(Clone, Copy, Debug, Default)]
pub struct JumpButton {
    prev_held: bool,
}

impl JumpButton {
    /// Returns `(pressed, released)` relative to the previous sample.
    pub fn sample(&mut self, held: bool) -> (bool, bool) {
        let pressed = held && !self.prev_held;
        let released = !held && self.prev_held;
        self.prev_held = held;
        (pressed, released)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_hold_release_produces_one_edge_each() {
        let mut button = JumpButton::default();

        assert_eq!(button.sample(true), (true, false));
        for _ in 0..5 {
            assert_eq!(button.sample(true), (false, false));
        }
        assert_eq!(button.sample(false), (false, true));
        assert_eq!(button.sample(false), (false, false));
    }

    #[test]
    fn command_carries_edges_from_button() {
        let mut button = JumpButton::default();

        let first = MoveCommand::new(1.0, -1.0, true, &mut button);
        assert!(first.jump_held && first.jump_pressed && !first.jump_released);

        let second = MoveCommand::new(1.0, -1.0, true, &mut button);
        assert!(second.jump_held && !second.jump_pressed);

        let third = MoveCommand::new(0.0, 0.0, false, &mut button);
        assert!(third.jump_released);
    }

    #[test]
    fn axes_are_not_clamped() {
        let cmd = MoveCommand::axes(3.0, -2.0);
        assert_eq!(cmd.forward, 3.0);
        assert_eq!(cmd.rightward, -2.0);
        assert!(!cmd.jump_held);
    }
}
