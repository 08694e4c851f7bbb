use crate::scene::Scene;
use glam::{Mat4, Vec3};
use glint_camera::Camera;
use glint_geometry::factory;
use glint_render::FrameView;
use glint_render_gl::{shaders, GpuMesh, RenderError, ShaderProgram};

const CUBE_POSITIONS: [Vec3; 7] = [
    Vec3::new(0.0, 0.5, 0.0),
    Vec3::new(2.0, 0.5, -3.0),
    Vec3::new(-2.5, 0.5, -2.0),
    Vec3::new(4.0, 0.5, 2.0),
    Vec3::new(-4.0, 0.5, 3.0),
    Vec3::new(1.5, 0.5, 4.5),
    Vec3::new(-1.0, 0.5, -6.0),
];

/// A field of cubes for flying around, with the camera's tunables exposed
/// in the overlay. The fov slider deliberately reaches 90 even though
/// scroll zoom saturates at 45.
pub struct CameraScene {
    program: ShaderProgram,
    cube: GpuMesh,
    grid: GpuMesh,
}

impl CameraScene {
    pub fn new(gl: &glow::Context) -> Result<Self, RenderError> {
        Ok(Self {
            program: ShaderProgram::from_sources(gl, shaders::FLAT_VERT, shaders::FLAT_FRAG),
            cube: GpuMesh::upload(gl, &factory::cube())?,
            grid: GpuMesh::upload(gl, &factory::grid(12, 1.0))?,
        })
    }
}

impl Scene for CameraScene {
    fn name(&self) -> &'static str {
        "camera"
    }

    fn draw(&mut self, gl: &glow::Context, frame: &FrameView) {
        if !self.program.is_valid() {
            return;
        }
        self.program.use_program(gl);
        self.program.set_mat4(gl, "view", &frame.view);
        self.program.set_mat4(gl, "projection", &frame.projection);

        for (i, position) in CUBE_POSITIONS.iter().enumerate() {
            let model = Mat4::from_translation(*position)
                * Mat4::from_rotation_y(i as f32 * 0.7);
            self.program.set_mat4(gl, "model", &model);
            self.cube.draw(gl);
        }

        self.program.set_mat4(gl, "model", &Mat4::IDENTITY);
        self.grid.draw_lines(gl);
    }

    fn ui(&mut self, ui: &mut egui::Ui, camera: &mut Camera) {
        let mut fov = camera.fov();
        if ui
            .add(egui::Slider::new(&mut fov, 1.0..=90.0).text("Field of view"))
            .changed()
        {
            camera.set_fov(fov);
        }
        ui.add(
            egui::Slider::new(&mut camera.movement_speed, 0.5..=10.0).text("Movement speed"),
        );
        ui.add(
            egui::Slider::new(&mut camera.mouse_sensitivity, 0.0001..=0.01)
                .logarithmic(true)
                .text("Mouse sensitivity"),
        );
        ui.separator();
        let position = camera.position();
        ui.label(format!(
            "Position: ({:.2}, {:.2}, {:.2})",
            position.x, position.y, position.z
        ));
        ui.label(format!(
            "Yaw: {:.1}  Pitch: {:.1}",
            camera.yaw(),
            camera.pitch()
        ));
        if ui.button("Reset camera").clicked() {
            *camera = Camera::at(Vec3::new(0.0, 1.5, 8.0));
        }
    }

    fn destroy(&mut self, gl: &glow::Context) {
        self.cube.destroy(gl);
        self.grid.destroy(gl);
        self.program.destroy(gl);
    }
}
