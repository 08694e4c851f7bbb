//! Draw interface: backend-agnostic draw commands.
//!
//! # Invariants
//! - One mesh draw is exactly one indexed draw command.
//! - The interface never touches a graphics API; backends implement
//!   `DrawDevice`. The recorder is the test double; the GL backend issues
//!   the same commands against a live context.

mod draw;
mod view;

pub use draw::{DrawCommand, DrawDevice, DrawRecorder, MeshBinding, PrimitiveMode};
pub use view::FrameView;

pub fn crate_info() -> &'static str {
    "glint-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
