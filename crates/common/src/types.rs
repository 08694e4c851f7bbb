use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Interleaved vertex record shared by every mesh in the workspace.
///
/// The field order is the wire layout the GPU sees; `VertexLayout` offsets
/// are derived from it with `offset_of!` so the two cannot drift apart.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub normal: [f32; 3],
    pub texcoord: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec3, color: Vec3, normal: Vec3, texcoord: Vec2) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
            normal: normal.to_array(),
            texcoord: texcoord.to_array(),
        }
    }

    /// The canonical attribute layout for this record: slots 0..=3 are
    /// position, color, normal, texcoord.
    pub fn layout() -> VertexLayout {
        VertexLayout {
            attributes: vec![
                VertexAttribute {
                    slot: 0,
                    components: 3,
                    component_type: ComponentType::F32,
                    offset: core::mem::offset_of!(Vertex, position),
                },
                VertexAttribute {
                    slot: 1,
                    components: 3,
                    component_type: ComponentType::F32,
                    offset: core::mem::offset_of!(Vertex, color),
                },
                VertexAttribute {
                    slot: 2,
                    components: 3,
                    component_type: ComponentType::F32,
                    offset: core::mem::offset_of!(Vertex, normal),
                },
                VertexAttribute {
                    slot: 3,
                    components: 2,
                    component_type: ComponentType::F32,
                    offset: core::mem::offset_of!(Vertex, texcoord),
                },
            ],
            stride: core::mem::size_of::<Vertex>(),
        }
    }
}

/// Scalar type of one attribute component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    F32,
    U8,
}

impl ComponentType {
    pub fn size_bytes(self) -> usize {
        match self {
            ComponentType::F32 => 4,
            ComponentType::U8 => 1,
        }
    }
}

/// One vertex attribute: where it lives inside the interleaved record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAttribute {
    /// Attribute slot index the shader binds to (`layout (location = N)`).
    pub slot: u32,
    /// Number of components (1..=4).
    pub components: i32,
    pub component_type: ComponentType,
    /// Byte offset of the first component inside the record.
    pub offset: usize,
}

/// Full layout of one interleaved vertex record.
///
/// Offsets and stride must match the record the buffer actually holds; the
/// pipeline reads garbage otherwise, and nothing downstream validates this.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexLayout {
    pub attributes: Vec<VertexAttribute>,
    pub stride: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(core::mem::size_of::<Vertex>(), 11 * 4);
        let layout = Vertex::layout();
        assert_eq!(layout.stride, core::mem::size_of::<Vertex>());
    }

    #[test]
    fn layout_offsets_match_record() {
        let layout = Vertex::layout();
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[2].offset, 24);
        assert_eq!(layout.attributes[3].offset, 36);
        assert_eq!(layout.attributes[3].components, 2);
    }

    /// Reading the raw buffer back through the layout must reproduce the
    /// original records bit-for-bit.
    #[test]
    fn layout_round_trip_bit_exact() {
        let verts = [
            Vertex::new(
                glam::Vec3::new(0.5, -0.5, 0.0),
                glam::Vec3::new(1.0, 0.0, 0.0),
                glam::Vec3::Z,
                glam::Vec2::new(1.0, 0.0),
            ),
            Vertex::new(
                glam::Vec3::new(-0.5, -0.5, 0.25),
                glam::Vec3::new(0.0, 1.0, 0.0),
                glam::Vec3::Y,
                glam::Vec2::new(0.0, 0.0),
            ),
        ];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        let layout = Vertex::layout();

        for (i, v) in verts.iter().enumerate() {
            let record = &bytes[i * layout.stride..(i + 1) * layout.stride];
            let expected: [&[f32]; 4] = [&v.position, &v.color, &v.normal, &v.texcoord];
            for (attr, field) in layout.attributes.iter().zip(expected) {
                assert_eq!(attr.component_type, ComponentType::F32);
                let len = attr.components as usize * attr.component_type.size_bytes();
                let raw = &record[attr.offset..attr.offset + len];
                let read: &[f32] = bytemuck::cast_slice(raw);
                for (a, b) in read.iter().zip(field) {
                    assert_eq!(a.to_bits(), b.to_bits());
                }
            }
        }
    }
}
