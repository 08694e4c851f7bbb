//! Shared types: the interleaved vertex record and its attribute layout.
//!
//! # Invariants
//! - `Vertex::layout()` offsets are derived from the record itself.
//! - Everything here is CPU-side and graphics-API-agnostic.

pub mod types;

pub use types::{ComponentType, Vertex, VertexAttribute, VertexLayout};

pub fn crate_info() -> &'static str {
    "glint-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
