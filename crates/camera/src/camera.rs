use glam::{Mat4, Vec3};

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_FOV: f32 = 45.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.001;

const PITCH_LIMIT: f32 = 89.0;
const MIN_FOV: f32 = 1.0;
const MAX_FOV: f32 = 45.0;
const DEFAULT_NEAR: f32 = 0.1;
const DEFAULT_FAR: f32 = 100.0;

/// Which movement keys are held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Fly camera. Angles are in degrees; position is unbounded.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    fov: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl Camera {
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            fov: DEFAULT_FOV,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
        };
        camera.update_vectors();
        camera
    }

    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set yaw/pitch directly (overlay sliders). Pitch is clamped the same
    /// way mouse movement clamps it.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Set fov directly. The overlay slider range is wider than the scroll
    /// clamp; only [1, 90] nonsense values are rejected here.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.clamp(MIN_FOV, 90.0);
    }

    /// Move along front/right scaled by `movement_speed * dt`. No bounds.
    pub fn process_keyboard(&mut self, input: MovementInput, dt: f32) {
        let velocity = self.movement_speed * dt;
        if input.forward {
            self.position += self.front * velocity;
        }
        if input.backward {
            self.position -= self.front * velocity;
        }
        if input.left {
            self.position -= self.right * velocity;
        }
        if input.right {
            self.position += self.right * velocity;
        }
    }

    /// Accumulate yaw/pitch from a mouse delta scaled by sensitivity.
    /// With `constrain_pitch`, pitch saturates at exactly +-89 degrees.
    pub fn process_mouse_movement(&mut self, xoffset: f32, yoffset: f32, constrain_pitch: bool) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch += yoffset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        self.update_vectors();
    }

    /// Scroll zoom: fov decreases as the wheel scrolls in, saturating at
    /// [1, 45] degrees. 45 is narrower than the overlay slider allows.
    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.fov = (self.fov - yoffset).clamp(MIN_FOV, MAX_FOV);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        self.projection_matrix_with(aspect, DEFAULT_NEAR, DEFAULT_FAR)
    }

    pub fn projection_matrix_with(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, near, far)
    }

    /// Spherical-to-Cartesian conversion of yaw/pitch, then orthonormalize
    /// right/up against the fixed world up.
    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn default_looks_down_negative_z() {
        let cam = Camera::default();
        assert!((cam.front() - Vec3::NEG_Z).length() < EPS);
        assert_eq!(cam.fov(), 45.0);
    }

    #[test]
    fn basis_is_orthonormal_over_angle_sweep() {
        let mut yaw = -180.0_f32;
        while yaw <= 180.0 {
            let mut pitch = -89.0_f32;
            while pitch <= 89.0 {
                let cam = Camera::new(Vec3::ZERO, Vec3::Y, yaw, pitch);
                assert!((cam.front().length() - 1.0).abs() < EPS, "yaw={yaw} pitch={pitch}");
                assert!((cam.right().length() - 1.0).abs() < EPS);
                assert!((cam.up().length() - 1.0).abs() < EPS);
                assert!(cam.front().dot(cam.right()).abs() < EPS);
                assert!(cam.front().dot(cam.up()).abs() < EPS);
                assert!(cam.right().dot(cam.up()).abs() < EPS);
                pitch += 11.125;
            }
            yaw += 15.0;
        }
    }

    #[test]
    fn pitch_saturates_at_89() {
        let mut cam = Camera::default();
        cam.mouse_sensitivity = 1.0;
        for _ in 0..50 {
            cam.process_mouse_movement(0.0, 10.0, true);
        }
        assert_eq!(cam.pitch(), 89.0);
        for _ in 0..100 {
            cam.process_mouse_movement(0.0, -10.0, true);
        }
        assert_eq!(cam.pitch(), -89.0);
    }

    #[test]
    fn unconstrained_pitch_can_flip() {
        let mut cam = Camera::default();
        cam.mouse_sensitivity = 1.0;
        cam.process_mouse_movement(0.0, 120.0, false);
        assert!(cam.pitch() > 89.0);
    }

    #[test]
    fn fov_saturates_at_both_ends() {
        let mut cam = Camera::default();
        for _ in 0..100 {
            cam.process_mouse_scroll(1.0);
        }
        assert_eq!(cam.fov(), 1.0);
        for _ in 0..100 {
            cam.process_mouse_scroll(-1.0);
        }
        // 45, not 90: the scroll clamp is narrower than the overlay slider.
        assert_eq!(cam.fov(), 45.0);
    }

    #[test]
    fn keyboard_moves_along_basis() {
        let mut cam = Camera::default();
        let start = cam.position();
        cam.process_keyboard(
            MovementInput {
                forward: true,
                ..Default::default()
            },
            1.0,
        );
        let moved = cam.position() - start;
        assert!((moved.normalize() - cam.front()).length() < EPS);
        assert!((moved.length() - cam.movement_speed).abs() < EPS);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut cam = Camera::default();
        let start = cam.position();
        cam.process_keyboard(
            MovementInput {
                forward: true,
                backward: true,
                left: true,
                right: true,
            },
            1.0,
        );
        assert!((cam.position() - start).length() < EPS);
    }

    #[test]
    fn view_matrix_is_look_at() {
        let cam = Camera::at(Vec3::new(0.0, 1.0, 6.0));
        let view = cam.view_matrix();
        let expected = Mat4::look_at_rh(
            cam.position(),
            cam.position() + cam.front(),
            cam.up(),
        );
        assert_eq!(view, expected);
        // A point straight ahead lands on the -Z view axis.
        let ahead = view.transform_point3(cam.position() + cam.front() * 5.0);
        assert!(ahead.x.abs() < EPS && ahead.y.abs() < EPS);
        assert!((ahead.z + 5.0).abs() < EPS);
    }

    #[test]
    fn projection_uses_fov_degrees() {
        let cam = Camera::default();
        let proj = cam.projection_matrix(16.0 / 9.0);
        let expected = Mat4::perspective_rh(45.0_f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
        assert_eq!(proj, expected);
    }
}
