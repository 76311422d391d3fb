use glam::{Mat4, Vec3};

/// Perspective camera looking from `eye` towards `target`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: 45.0f32.to_radians(),
            aspect_ratio: 1.0,
            near: 0.1,
            far: 100.0,
            eye: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl Camera {
    /// Camera sized for a `width` x `height` frame.
    pub fn for_frame(width: u32, height: u32) -> Self {
        Self {
            aspect_ratio: width as f32 / height.max(1) as f32,
            ..Default::default()
        }
    }

    /// Moves the eye while keeping the target.
    pub fn looking_at(mut self, eye: Vec3, target: Vec3) -> Self {
        self.eye = eye;
        self.target = target;
        self
    }

    /// View -> clip space. Depth maps to [-1, 1] after division.
    pub fn compute_projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// World -> view space.
    pub fn compute_view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn compute_view_projection(&self) -> Mat4 {
        self.compute_projection_matrix() * self.compute_view_matrix()
    }
}
