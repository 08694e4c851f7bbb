use crate::buffer::{IndexBuffer, VertexArray, VertexBuffer};
use crate::RenderError;
use glint_common::Vertex;
use glint_geometry::MeshData;
use glint_render::{MeshBinding, PrimitiveMode};
use glow::HasContext;

fn gl_primitive_mode(mode: PrimitiveMode) -> u32 {
    match mode {
        PrimitiveMode::Triangles => glow::TRIANGLES,
        PrimitiveMode::Lines => glow::LINES,
    }
}

/// A drawable unit: VAO + vertex/index storage + the canonical layout.
///
/// `draw` assumes a shader program is already active; nothing here checks.
#[derive(Debug)]
pub struct GpuMesh {
    vao: VertexArray,
    vbo: VertexBuffer,
    ebo: IndexBuffer,
    binding: MeshBinding,
}

impl GpuMesh {
    /// Validate and upload mesh data as static buffers, then record the
    /// attribute layout in the VAO.
    pub fn upload(gl: &glow::Context, mesh: &MeshData) -> Result<Self, RenderError> {
        mesh.validate()?;

        let vao = VertexArray::create(gl)?;
        let vbo = VertexBuffer::create(gl, &mesh.vertices)?;
        let ebo = IndexBuffer::create(gl, &mesh.indices)?;

        vao.bind(gl);
        vbo.bind(gl);
        ebo.bind(gl);
        vao.apply_layout(gl, &Vertex::layout());
        vao.unbind(gl);

        Ok(Self {
            vao,
            vbo,
            ebo,
            binding: MeshBinding::new(mesh),
        })
    }

    pub fn index_count(&self) -> u32 {
        self.binding.index_count()
    }

    /// One indexed triangle-list draw call.
    pub fn draw(&self, gl: &glow::Context) {
        self.execute(gl, PrimitiveMode::Triangles);
    }

    /// One indexed line-list draw call (axis/debug meshes).
    pub fn draw_lines(&self, gl: &glow::Context) {
        self.execute(gl, PrimitiveMode::Lines);
    }

    fn execute(&self, gl: &glow::Context, mode: PrimitiveMode) {
        let command = self.binding.command(mode);
        self.vao.bind(gl);
        unsafe {
            gl.draw_elements(
                gl_primitive_mode(command.mode),
                command.index_count as i32,
                glow::UNSIGNED_INT,
                0,
            );
        }
    }

    pub fn destroy(&mut self, gl: &glow::Context) {
        self.vao.destroy(gl);
        self.vbo.destroy(gl);
        self.ebo.destroy(gl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_modes_map_to_gl_enums() {
        assert_eq!(gl_primitive_mode(PrimitiveMode::Triangles), glow::TRIANGLES);
        assert_eq!(gl_primitive_mode(PrimitiveMode::Lines), glow::LINES);
    }
}
