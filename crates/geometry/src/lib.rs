//! Mesh data: CPU-side vertex/index sequences and a procedural factory.
//!
//! # Invariants
//! - Every index in a valid `MeshData` is `< vertex count`.
//! - Factory meshes always pass `validate()`; this is tested.

pub mod factory;
pub mod mesh;

pub use mesh::{GeometryError, MeshData};

pub fn crate_info() -> &'static str {
    "glint-geometry v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("geometry"));
    }
}
