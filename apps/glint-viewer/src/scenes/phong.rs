use crate::scene::Scene;
use glam::{Mat4, Vec3};
use glint_camera::Camera;
use glint_geometry::factory;
use glint_render::FrameView;
use glint_render_gl::{shaders, GpuMesh, RenderError, ShaderProgram};

/// One point light orbiting a cube and a sphere, with every Phong term on
/// a slider.
pub struct PhongScene {
    lit: ShaderProgram,
    marker: ShaderProgram,
    cube: GpuMesh,
    sphere: GpuMesh,
    light_cube: GpuMesh,
    light_color: [f32; 3],
    object_color: [f32; 3],
    ambient: f32,
    diffuse: f32,
    specular: f32,
    shininess: f32,
    orbit: bool,
    orbit_angle: f32,
}

impl PhongScene {
    pub fn new(gl: &glow::Context) -> Result<Self, RenderError> {
        Ok(Self {
            lit: ShaderProgram::from_sources(gl, shaders::PHONG_VERT, shaders::PHONG_FRAG),
            marker: ShaderProgram::from_sources(
                gl,
                shaders::LIGHT_CUBE_VERT,
                shaders::LIGHT_CUBE_FRAG,
            ),
            cube: GpuMesh::upload(gl, &factory::cube())?,
            sphere: GpuMesh::upload(gl, &factory::sphere(0.7, 48, 24))?,
            light_cube: GpuMesh::upload(gl, &factory::cube())?,
            light_color: [1.0, 1.0, 1.0],
            object_color: [1.0, 0.5, 0.31],
            ambient: 0.1,
            diffuse: 1.0,
            specular: 0.5,
            shininess: 32.0,
            orbit: true,
            orbit_angle: 0.0,
        })
    }

    fn light_position(&self) -> Vec3 {
        Vec3::new(
            2.0 * self.orbit_angle.cos(),
            1.2,
            2.0 * self.orbit_angle.sin(),
        )
    }
}

impl Scene for PhongScene {
    fn name(&self) -> &'static str {
        "phong"
    }

    fn draw(&mut self, gl: &glow::Context, frame: &FrameView) {
        if !self.lit.is_valid() {
            return;
        }
        if self.orbit {
            self.orbit_angle += frame.dt;
        }
        let light_pos = self.light_position();
        let light_color = Vec3::from_array(self.light_color);

        self.lit.use_program(gl);
        self.lit.set_mat4(gl, "view", &frame.view);
        self.lit.set_mat4(gl, "projection", &frame.projection);
        self.lit.set_vec3(gl, "lightPos", light_pos);
        self.lit.set_vec3(gl, "viewPos", frame.view_pos);
        self.lit.set_vec3(gl, "lightColor", light_color);
        self.lit
            .set_vec3(gl, "objectColor", Vec3::from_array(self.object_color));
        self.lit.set_float(gl, "ambientStrength", self.ambient);
        self.lit.set_float(gl, "diffuseStrength", self.diffuse);
        self.lit.set_float(gl, "specularStrength", self.specular);
        self.lit.set_float(gl, "shininess", self.shininess);

        let cube_model = Mat4::from_translation(Vec3::new(-1.2, 0.5, 0.0));
        self.lit.set_mat4(gl, "model", &cube_model);
        self.cube.draw(gl);

        let sphere_model = Mat4::from_translation(Vec3::new(1.2, 0.7, 0.0));
        self.lit.set_mat4(gl, "model", &sphere_model);
        self.sphere.draw(gl);

        if self.marker.is_valid() {
            self.marker.use_program(gl);
            self.marker.set_mat4(gl, "view", &frame.view);
            self.marker.set_mat4(gl, "projection", &frame.projection);
            let model = Mat4::from_translation(light_pos) * Mat4::from_scale(Vec3::splat(0.2));
            self.marker.set_mat4(gl, "model", &model);
            self.marker.set_vec3(gl, "lightColor", light_color);
            self.light_cube.draw(gl);
        }
    }

    fn ui(&mut self, ui: &mut egui::Ui, _camera: &mut Camera) {
        ui.add(egui::Slider::new(&mut self.ambient, 0.0..=1.0).text("Ambient"));
        ui.add(egui::Slider::new(&mut self.diffuse, 0.0..=1.0).text("Diffuse"));
        ui.add(egui::Slider::new(&mut self.specular, 0.0..=1.0).text("Specular"));
        ui.add(
            egui::Slider::new(&mut self.shininess, 1.0..=256.0)
                .logarithmic(true)
                .text("Shininess"),
        );
        ui.horizontal(|ui| {
            ui.color_edit_button_rgb(&mut self.object_color);
            ui.label("Object color");
        });
        ui.horizontal(|ui| {
            ui.color_edit_button_rgb(&mut self.light_color);
            ui.label("Light color");
        });
        ui.checkbox(&mut self.orbit, "Orbit light");
    }

    fn destroy(&mut self, gl: &glow::Context) {
        self.cube.destroy(gl);
        self.sphere.destroy(gl);
        self.light_cube.destroy(gl);
        self.lit.destroy(gl);
        self.marker.destroy(gl);
    }
}
