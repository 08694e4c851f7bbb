//! OpenGL render backend built on glow.
//!
//! Wraps vertex/index storage, vertex-array layout, GPU meshes, and shader
//! programs. All calls must happen on the thread owning the GL context.
//!
//! # Invariants
//! - GPU objects are created against an explicit `glow::Context` and released
//!   explicitly with `destroy`; destruction is idempotent.
//! - Shader compile/link failure leaves the program inert (`is_valid()`
//!   false) instead of failing the caller; diagnostics go through `tracing`.
//! - Bind-before-use discipline is the caller's responsibility.

mod buffer;
mod error;
mod mesh;
mod shader;
pub mod shaders;

pub use buffer::{IndexBuffer, VertexArray, VertexBuffer};
pub use error::RenderError;
pub use mesh::GpuMesh;
pub use shader::ShaderProgram;

pub fn crate_info() -> &'static str {
    "glint-render-gl v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render-gl"));
    }
}
