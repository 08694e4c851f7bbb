use crate::Action;
use glint_camera::MovementInput;

/// Held-key and pointer state accumulated between frames.
///
/// The windowing layer feeds edge events in; the render loop drains deltas
/// once per frame. Draining resets the accumulators, so a frame never sees
/// another frame's motion.
#[derive(Debug, Default)]
pub struct InputState {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    mouse_look: bool,
    mouse_delta: (f32, f32),
    scroll_delta: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release for a bound action. Non-movement actions
    /// are edge-triggered and handled by the caller; this keeps only the
    /// level-triggered movement state.
    pub fn set_action(&mut self, action: Action, pressed: bool) {
        match action {
            Action::MoveForward => self.forward = pressed,
            Action::MoveBackward => self.backward = pressed,
            Action::MoveLeft => self.left = pressed,
            Action::MoveRight => self.right = pressed,
            Action::ToggleMouseLook if pressed => self.toggle_mouse_look(),
            _ => {}
        }
    }

    pub fn movement(&self) -> MovementInput {
        MovementInput {
            forward: self.forward,
            backward: self.backward,
            left: self.left,
            right: self.right,
        }
    }

    pub fn mouse_look(&self) -> bool {
        self.mouse_look
    }

    pub fn toggle_mouse_look(&mut self) {
        self.mouse_look = !self.mouse_look;
        tracing::debug!(enabled = self.mouse_look, "mouse look toggled");
    }

    pub fn set_mouse_look(&mut self, enabled: bool) {
        if self.mouse_look != enabled {
            self.toggle_mouse_look();
        }
    }

    /// Raw pointer motion; ignored while mouse look is off.
    pub fn push_mouse_delta(&mut self, dx: f32, dy: f32) {
        if self.mouse_look {
            self.mouse_delta.0 += dx;
            self.mouse_delta.1 += dy;
        }
    }

    pub fn push_scroll(&mut self, amount: f32) {
        self.scroll_delta += amount;
    }

    /// Accumulated look delta since the last call, then reset.
    pub fn take_mouse_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.mouse_delta)
    }

    /// Accumulated scroll since the last call, then reset.
    pub fn take_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_reflects_held_actions() {
        let mut state = InputState::new();
        state.set_action(Action::MoveForward, true);
        state.set_action(Action::MoveLeft, true);
        let movement = state.movement();
        assert!(movement.forward && movement.left);
        assert!(!movement.backward && !movement.right);

        state.set_action(Action::MoveForward, false);
        assert!(!state.movement().forward);
    }

    #[test]
    fn mouse_delta_requires_mouse_look() {
        let mut state = InputState::new();
        state.push_mouse_delta(3.0, -2.0);
        assert_eq!(state.take_mouse_delta(), (0.0, 0.0));

        state.set_mouse_look(true);
        state.push_mouse_delta(3.0, -2.0);
        state.push_mouse_delta(1.0, 1.0);
        assert_eq!(state.take_mouse_delta(), (4.0, -1.0));
        assert_eq!(state.take_mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn scroll_accumulates_and_drains() {
        let mut state = InputState::new();
        state.push_scroll(1.0);
        state.push_scroll(0.5);
        assert_eq!(state.take_scroll(), 1.5);
        assert_eq!(state.take_scroll(), 0.0);
    }

    #[test]
    fn toggle_action_flips_mouse_look_on_press_only() {
        let mut state = InputState::new();
        state.set_action(Action::ToggleMouseLook, true);
        assert!(state.mouse_look());
        state.set_action(Action::ToggleMouseLook, false);
        assert!(state.mouse_look());
    }
}
