use crate::scenes::{CameraScene, MeshesScene, MultiLightScene, PhongScene};
use clap::ValueEnum;
use glint_camera::Camera;
use glint_render::FrameView;
use glint_render_gl::RenderError;

/// Which demo the viewer boots into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    /// Factory meshes lined up with debug axes and a ground grid.
    Meshes,
    /// Fly-camera playground with live parameter sliders.
    Camera,
    /// One orbiting point light with tunable Phong terms.
    Phong,
    /// Directional, point, and spot lights combined.
    MultiLight,
}

/// One self-contained demo. Owns its GPU meshes and shader programs;
/// the driver owns the camera, timing, and window plumbing.
pub trait Scene {
    fn name(&self) -> &'static str;

    /// Issue this frame's draw calls. A cleared framebuffer and depth
    /// testing are already set up.
    fn draw(&mut self, gl: &glow::Context, frame: &FrameView);

    /// Scene-specific controls inside the overlay panel.
    fn ui(&mut self, _ui: &mut egui::Ui, _camera: &mut Camera) {}

    /// Release GPU objects. Called once before the context goes away.
    fn destroy(&mut self, gl: &glow::Context);
}

pub fn create_scene(gl: &glow::Context, kind: DemoKind) -> Result<Box<dyn Scene>, RenderError> {
    Ok(match kind {
        DemoKind::Meshes => Box::new(MeshesScene::new(gl)?),
        DemoKind::Camera => Box::new(CameraScene::new(gl)?),
        DemoKind::Phong => Box::new(PhongScene::new(gl)?),
        DemoKind::MultiLight => Box::new(MultiLightScene::new(gl)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_kinds_parse_from_kebab_case() {
        assert_eq!(
            DemoKind::from_str("multi-light", true).ok(),
            Some(DemoKind::MultiLight)
        );
        assert_eq!(DemoKind::from_str("meshes", true).ok(), Some(DemoKind::Meshes));
        assert!(DemoKind::from_str("nope", true).is_err());
    }
}
