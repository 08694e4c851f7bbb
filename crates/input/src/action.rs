/// A high-level action the viewer can bind a key or button to.
///
/// Camera and scene code consume actions, never raw window events, so the
/// windowing toolkit stays confined to the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the camera along its front vector.
    MoveForward,
    /// Move the camera against its front vector.
    MoveBackward,
    /// Strafe along the negative right vector.
    MoveLeft,
    /// Strafe along the right vector.
    MoveRight,
    /// Grab or release the cursor for mouse look.
    ToggleMouseLook,
    /// Close the viewer.
    Exit,
    /// Bound key with no effect yet.
    Noop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_compare_by_value() {
        assert_eq!(Action::MoveForward, Action::MoveForward);
        assert_ne!(Action::MoveForward, Action::MoveBackward);
        assert!(matches!(Action::Noop, Action::Noop));
    }
}
