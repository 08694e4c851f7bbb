use glint_common::Vertex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("index {index} at position {position} out of range (vertex count {vertex_count})")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("mesh has no vertices")]
    Empty,
}

/// Ordered vertices plus triangle (or line-pair) indices, not yet uploaded.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Check the index-range invariant. The GL upload path calls this before
    /// touching the GPU; an out-of-range index would otherwise render garbage
    /// or fault in the driver.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.vertices.is_empty() {
            return Err(GeometryError::Empty);
        }
        let vertex_count = self.vertices.len();
        for (position, &index) in self.indices.iter().enumerate() {
            if index as usize >= vertex_count {
                return Err(GeometryError::IndexOutOfRange {
                    position,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    fn vert(x: f32) -> Vertex {
        Vertex::new(Vec3::new(x, 0.0, 0.0), Vec3::ONE, Vec3::Z, Vec2::ZERO)
    }

    #[test]
    fn valid_mesh_passes() {
        let mesh = MeshData::new(vec![vert(0.0), vert(1.0), vert(2.0)], vec![0, 1, 2]);
        assert!(mesh.validate().is_ok());
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.index_count(), 3);
    }

    #[test]
    fn out_of_range_index_rejected() {
        let mesh = MeshData::new(vec![vert(0.0), vert(1.0)], vec![0, 1, 2]);
        match mesh.validate() {
            Err(GeometryError::IndexOutOfRange {
                position,
                index,
                vertex_count,
            }) => {
                assert_eq!(position, 2);
                assert_eq!(index, 2);
                assert_eq!(vertex_count, 2);
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn empty_mesh_rejected() {
        let mesh = MeshData::default();
        assert!(matches!(mesh.validate(), Err(GeometryError::Empty)));
    }
}
