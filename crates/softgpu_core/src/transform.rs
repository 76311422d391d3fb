use glam::{Mat4, Quat, Vec3};

/// Model transform: scale, then rotate, then translate.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self {
            translation: Vec3::new(x, y, z),
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Rotates around the global Y axis
    pub fn rotate_y(&mut self, angle_radians: f32) {
        self.rotation = Quat::from_rotation_y(angle_radians) * self.rotation;
    }

    /// Rotates around the local X axis
    pub fn rotate_local_x(&mut self, angle_radians: f32) {
        self.rotation *= Quat::from_rotation_x(angle_radians);
    }

    /// Local -> world
    pub fn compute_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Inverse transpose of the model matrix, for normals.
    pub fn compute_normal_matrix(&self) -> Mat4 {
        self.compute_matrix().inverse().transpose()
    }
}
