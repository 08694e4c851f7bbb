//! Input layer: high-level actions and per-frame accumulated input state.
//!
//! # Invariants
//! - Scenes and the camera consume [`Action`]s and drained deltas, never raw
//!   window events.
//! - Mouse motion only accumulates while mouse look is active.
//! - `take_*` drains reset their accumulator; each frame sees its own motion.

pub mod action;
pub mod state;

pub use action::Action;
pub use state::InputState;

pub fn crate_info() -> &'static str {
    "glint-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
