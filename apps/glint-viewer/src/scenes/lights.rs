use crate::scene::Scene;
use glam::{Mat4, Vec3};
use glint_camera::Camera;
use glint_geometry::factory;
use glint_render::FrameView;
use glint_render_gl::{shaders, GpuMesh, RenderError, ShaderProgram};

const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

const POINT_LIGHT_POSITIONS: [Vec3; 4] = [
    Vec3::new(0.7, 0.2, 2.0),
    Vec3::new(2.3, -3.3, -4.0),
    Vec3::new(-4.0, 2.0, -12.0),
    Vec3::new(0.0, 0.0, -3.0),
];

/// One directional light, four attenuated point lights, and a spot light
/// riding the camera.
pub struct MultiLightScene {
    lit: ShaderProgram,
    marker: ShaderProgram,
    cube: GpuMesh,
    light_cube: GpuMesh,
    shininess: f32,
    flashlight: bool,
}

impl MultiLightScene {
    pub fn new(gl: &glow::Context) -> Result<Self, RenderError> {
        Ok(Self {
            lit: ShaderProgram::from_sources(
                gl,
                shaders::MULTI_LIGHT_VERT,
                shaders::MULTI_LIGHT_FRAG,
            ),
            marker: ShaderProgram::from_sources(
                gl,
                shaders::LIGHT_CUBE_VERT,
                shaders::LIGHT_CUBE_FRAG,
            ),
            cube: GpuMesh::upload(gl, &factory::cube())?,
            light_cube: GpuMesh::upload(gl, &factory::cube())?,
            shininess: 32.0,
            flashlight: true,
        })
    }

    fn set_light_uniforms(&mut self, gl: &glow::Context, frame: &FrameView) {
        self.lit
            .set_vec3(gl, "dirLight.direction", Vec3::new(-0.2, -1.0, -0.3));
        self.lit
            .set_vec3(gl, "dirLight.ambient", Vec3::splat(0.05));
        self.lit.set_vec3(gl, "dirLight.diffuse", Vec3::splat(0.4));
        self.lit
            .set_vec3(gl, "dirLight.specular", Vec3::splat(0.5));

        for (i, position) in POINT_LIGHT_POSITIONS.iter().enumerate() {
            self.lit
                .set_vec3(gl, &format!("pointLights[{i}].position"), *position);
            self.lit
                .set_vec3(gl, &format!("pointLights[{i}].ambient"), Vec3::splat(0.05));
            self.lit
                .set_vec3(gl, &format!("pointLights[{i}].diffuse"), Vec3::splat(0.8));
            self.lit
                .set_vec3(gl, &format!("pointLights[{i}].specular"), Vec3::ONE);
            self.lit
                .set_float(gl, &format!("pointLights[{i}].constant"), 1.0);
            self.lit
                .set_float(gl, &format!("pointLights[{i}].linear"), 0.09);
            self.lit
                .set_float(gl, &format!("pointLights[{i}].quadratic"), 0.032);
        }

        let spot_strength = if self.flashlight { 1.0 } else { 0.0 };
        self.lit.set_vec3(gl, "spotLight.position", frame.view_pos);
        self.lit
            .set_vec3(gl, "spotLight.direction", frame.view_front);
        self.lit.set_vec3(gl, "spotLight.ambient", Vec3::ZERO);
        self.lit
            .set_vec3(gl, "spotLight.diffuse", Vec3::splat(spot_strength));
        self.lit
            .set_vec3(gl, "spotLight.specular", Vec3::splat(spot_strength));
        self.lit.set_float(gl, "spotLight.constant", 1.0);
        self.lit.set_float(gl, "spotLight.linear", 0.09);
        self.lit.set_float(gl, "spotLight.quadratic", 0.032);
        self.lit
            .set_float(gl, "spotLight.cutOff", 12.5f32.to_radians().cos());
        self.lit
            .set_float(gl, "spotLight.outerCutOff", 15.0f32.to_radians().cos());
    }
}

impl Scene for MultiLightScene {
    fn name(&self) -> &'static str {
        "multi-light"
    }

    fn draw(&mut self, gl: &glow::Context, frame: &FrameView) {
        if !self.lit.is_valid() {
            return;
        }
        self.lit.use_program(gl);
        self.lit.set_mat4(gl, "view", &frame.view);
        self.lit.set_mat4(gl, "projection", &frame.projection);
        self.lit.set_vec3(gl, "viewPos", frame.view_pos);
        self.lit
            .set_vec3(gl, "objectColor", Vec3::new(0.8, 0.8, 0.85));
        self.lit.set_float(gl, "shininess", self.shininess);
        self.set_light_uniforms(gl, frame);

        for (i, position) in CUBE_POSITIONS.iter().enumerate() {
            let angle = (20.0 * i as f32).to_radians();
            let model = Mat4::from_translation(*position)
                * Mat4::from_axis_angle(Vec3::new(1.0, 0.3, 0.5).normalize(), angle);
            self.lit.set_mat4(gl, "model", &model);
            self.cube.draw(gl);
        }

        if self.marker.is_valid() {
            self.marker.use_program(gl);
            self.marker.set_mat4(gl, "view", &frame.view);
            self.marker.set_mat4(gl, "projection", &frame.projection);
            self.marker.set_vec3(gl, "lightColor", Vec3::ONE);
            for position in POINT_LIGHT_POSITIONS {
                let model =
                    Mat4::from_translation(position) * Mat4::from_scale(Vec3::splat(0.2));
                self.marker.set_mat4(gl, "model", &model);
                self.light_cube.draw(gl);
            }
        }
    }

    fn ui(&mut self, ui: &mut egui::Ui, _camera: &mut Camera) {
        ui.add(
            egui::Slider::new(&mut self.shininess, 1.0..=256.0)
                .logarithmic(true)
                .text("Shininess"),
        );
        ui.checkbox(&mut self.flashlight, "Flashlight");
    }

    fn destroy(&mut self, gl: &glow::Context) {
        self.cube.destroy(gl);
        self.light_cube.destroy(gl);
        self.lit.destroy(gl);
        self.marker.destroy(gl);
    }
}
