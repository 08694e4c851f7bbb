use crate::scene::Scene;
use glam::{Mat4, Vec3};
use glint_camera::Camera;
use glint_geometry::factory;
use glint_render::FrameView;
use glint_render_gl::{shaders, GpuMesh, RenderError, ShaderProgram};

/// Every factory mesh in a row, plus the axes and grid line meshes.
pub struct MeshesScene {
    program: ShaderProgram,
    meshes: Vec<GpuMesh>,
    axes: GpuMesh,
    grid: GpuMesh,
    spin: bool,
    show_axes: bool,
    show_grid: bool,
}

impl MeshesScene {
    pub fn new(gl: &glow::Context) -> Result<Self, RenderError> {
        let meshes = vec![
            GpuMesh::upload(gl, &factory::triangle())?,
            GpuMesh::upload(gl, &factory::quad())?,
            GpuMesh::upload(gl, &factory::cube())?,
            GpuMesh::upload(gl, &factory::sphere(0.6, 32, 16))?,
            GpuMesh::upload(gl, &factory::cylinder(0.5, 1.2, 24))?,
            GpuMesh::upload(gl, &factory::cone(0.5, 1.2, 24))?,
            GpuMesh::upload(gl, &factory::plane(1.5, 1.5, 4, 4))?,
        ];
        Ok(Self {
            program: ShaderProgram::from_sources(gl, shaders::FLAT_VERT, shaders::FLAT_FRAG),
            meshes,
            axes: GpuMesh::upload(gl, &factory::axes(2.0))?,
            grid: GpuMesh::upload(gl, &factory::grid(10, 1.0))?,
            spin: true,
            show_axes: true,
            show_grid: true,
        })
    }
}

impl Scene for MeshesScene {
    fn name(&self) -> &'static str {
        "meshes"
    }

    fn draw(&mut self, gl: &glow::Context, frame: &FrameView) {
        if !self.program.is_valid() {
            return;
        }
        self.program.use_program(gl);
        self.program.set_mat4(gl, "view", &frame.view);
        self.program.set_mat4(gl, "projection", &frame.projection);

        let angle = if self.spin { frame.time * 0.6 } else { 0.0 };
        let span = self.meshes.len() as f32 - 1.0;
        for (i, mesh) in self.meshes.iter().enumerate() {
            let x = (i as f32 - span / 2.0) * 2.0;
            let model = Mat4::from_translation(Vec3::new(x, 0.6, 0.0))
                * Mat4::from_rotation_y(angle + i as f32 * 0.4);
            self.program.set_mat4(gl, "model", &model);
            mesh.draw(gl);
        }

        self.program.set_mat4(gl, "model", &Mat4::IDENTITY);
        if self.show_grid {
            self.grid.draw_lines(gl);
        }
        if self.show_axes {
            self.axes.draw_lines(gl);
        }
    }

    fn ui(&mut self, ui: &mut egui::Ui, _camera: &mut Camera) {
        ui.checkbox(&mut self.spin, "Spin meshes");
        ui.checkbox(&mut self.show_axes, "Show axes");
        ui.checkbox(&mut self.show_grid, "Show grid");
    }

    fn destroy(&mut self, gl: &glow::Context) {
        for mesh in &mut self.meshes {
            mesh.destroy(gl);
        }
        self.axes.destroy(gl);
        self.grid.destroy(gl);
        self.program.destroy(gl);
    }
}
