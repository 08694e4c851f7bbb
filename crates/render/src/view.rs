use glam::{Mat4, Vec3};

/// Per-frame view configuration handed to whatever draws the scene.
#[derive(Debug, Clone, Copy)]
pub struct FrameView {
    pub view: Mat4,
    pub projection: Mat4,
    /// Camera position in world space (specular terms need it).
    pub view_pos: Vec3,
    /// Camera forward direction in world space (spot lights need it).
    pub view_front: Vec3,
    /// Seconds since the application started.
    pub time: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
}

impl Default for FrameView {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view_pos: Vec3::ZERO,
            view_front: Vec3::NEG_Z,
            time: 0.0,
            dt: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        let view = FrameView::default();
        assert_eq!(view.view, Mat4::IDENTITY);
        assert_eq!(view.view_pos, Vec3::ZERO);
    }
}
