use crate::RenderError;
use glint_common::{ComponentType, Vertex, VertexLayout};
use glow::HasContext;

pub(crate) fn gl_component_type(component_type: ComponentType) -> u32 {
    match component_type {
        ComponentType::F32 => glow::FLOAT,
        ComponentType::U8 => glow::UNSIGNED_BYTE,
    }
}

/// GPU-resident vertex storage (VBO). Contents are immutable after creation.
#[derive(Debug)]
pub struct VertexBuffer {
    raw: Option<glow::Buffer>,
}

impl VertexBuffer {
    pub fn create(gl: &glow::Context, vertices: &[Vertex]) -> Result<Self, RenderError> {
        let raw = unsafe { gl.create_buffer() }.map_err(RenderError::Allocation)?;
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(raw));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );
        }
        Ok(Self { raw: Some(raw) })
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_buffer(glow::ARRAY_BUFFER, self.raw) }
    }

    pub fn unbind(&self, gl: &glow::Context) {
        unsafe { gl.bind_buffer(glow::ARRAY_BUFFER, None) }
    }

    /// Idempotent: a moved-from or already-destroyed buffer is a no-op.
    pub fn destroy(&mut self, gl: &glow::Context) {
        if let Some(raw) = self.raw.take() {
            unsafe { gl.delete_buffer(raw) }
        }
    }
}

/// GPU-resident index storage (EBO), u32 indices.
#[derive(Debug)]
pub struct IndexBuffer {
    raw: Option<glow::Buffer>,
    count: u32,
}

impl IndexBuffer {
    pub fn create(gl: &glow::Context, indices: &[u32]) -> Result<Self, RenderError> {
        let raw = unsafe { gl.create_buffer() }.map_err(RenderError::Allocation)?;
        unsafe {
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(raw));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );
        }
        Ok(Self {
            raw: Some(raw),
            count: indices.len() as u32,
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, self.raw) }
    }

    pub fn destroy(&mut self, gl: &glow::Context) {
        if let Some(raw) = self.raw.take() {
            unsafe { gl.delete_buffer(raw) }
        }
    }
}

/// Vertex array object: remembers attribute layout and the bound EBO.
#[derive(Debug)]
pub struct VertexArray {
    raw: Option<glow::VertexArray>,
}

impl VertexArray {
    pub fn create(gl: &glow::Context) -> Result<Self, RenderError> {
        let raw = unsafe { gl.create_vertex_array() }.map_err(RenderError::Allocation)?;
        Ok(Self { raw: Some(raw) })
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_vertex_array(self.raw) }
    }

    pub fn unbind(&self, gl: &glow::Context) {
        unsafe { gl.bind_vertex_array(None) }
    }

    /// Associate each attribute slot with its offset inside the interleaved
    /// record currently bound to `ARRAY_BUFFER`. Nothing checks the layout
    /// against the buffer; a mismatched stride reads garbage.
    pub fn apply_layout(&self, gl: &glow::Context, layout: &VertexLayout) {
        for attr in &layout.attributes {
            unsafe {
                gl.enable_vertex_attrib_array(attr.slot);
                gl.vertex_attrib_pointer_f32(
                    attr.slot,
                    attr.components,
                    gl_component_type(attr.component_type),
                    false,
                    layout.stride as i32,
                    attr.offset as i32,
                );
            }
        }
    }

    pub fn destroy(&mut self, gl: &glow::Context) {
        if let Some(raw) = self.raw.take() {
            unsafe { gl.delete_vertex_array(raw) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_type_maps_to_gl_enums() {
        assert_eq!(gl_component_type(ComponentType::F32), glow::FLOAT);
        assert_eq!(gl_component_type(ComponentType::U8), glow::UNSIGNED_BYTE);
    }
}
