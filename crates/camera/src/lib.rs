//! Fly camera: accumulates input deltas into a pose and derives
//! view/projection matrices.
//!
//! # Invariants
//! - front/right/up are always derived from yaw/pitch, never set directly.
//! - Pitch stays inside [-89, 89] degrees when constrained (gimbal guard).
//! - Scroll zoom saturates the fov at [1, 45] degrees.

pub mod camera;

pub use camera::{Camera, MovementInput};

pub fn crate_info() -> &'static str {
    "glint-camera v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("camera"));
    }
}
