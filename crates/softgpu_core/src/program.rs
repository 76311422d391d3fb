use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::{
    attribute::{AttributeType, Attributes, MAX_ATTRIBUTES},
    texture::{Texture, TextureError},
};

pub const MAX_UNIFORMS: usize = 16;
pub const MAX_TEXTURES: usize = 8;

/// Input of the vertex shader.
#[derive(Clone, Copy, Debug, Default)]
pub struct InVertex {
    pub attributes: Attributes,
    /// Vertex index after index buffer resolution.
    pub vertex_id: u32,
}

/// Output of the vertex shader.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutVertex {
    pub attributes: Attributes,
    /// Clip-space position. `w` must not be zero.
    pub position: Vec4,
}

/// Input of the fragment shader.
#[derive(Clone, Copy, Debug, Default)]
pub struct InFragment {
    pub attributes: Attributes,
    /// Pixel center in window coordinates, `z` holds the interpolated depth.
    pub frag_coord: Vec3,
}

/// Output of the fragment shader.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutFragment {
    pub frag_color: Vec4,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Uniform {
    #[default]
    Empty,
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
}

impl Uniform {
    pub fn as_float(&self) -> f32 {
        match *self {
            Uniform::Float(v) => v,
            _ => 0.0,
        }
    }

    pub fn as_vec2(&self) -> Vec2 {
        match *self {
            Uniform::Vec2(v) => v,
            _ => Vec2::ZERO,
        }
    }

    pub fn as_vec3(&self) -> Vec3 {
        match *self {
            Uniform::Vec3(v) => v,
            _ => Vec3::ZERO,
        }
    }

    pub fn as_vec4(&self) -> Vec4 {
        match *self {
            Uniform::Vec4(v) => v,
            _ => Vec4::ZERO,
        }
    }

    pub fn as_mat4(&self) -> Mat4 {
        match *self {
            Uniform::Mat4(m) => m,
            _ => Mat4::IDENTITY,
        }
    }
}

/// Values shared by all shader invocations of a draw call.
#[derive(Clone, Debug, Default)]
pub struct Uniforms {
    pub uniform: [Uniform; MAX_UNIFORMS],
    pub textures: Vec<Texture>,
}

impl Uniforms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, slot: usize, value: Uniform) {
        self.uniform[slot] = value;
    }

    pub fn get(&self, slot: usize) -> Uniform {
        self.uniform[slot]
    }

    /// Binds a texture unit, growing the table up to [`MAX_TEXTURES`].
    pub fn bind_texture(&mut self, unit: usize, texture: Texture) -> Result<(), TextureError> {
        if unit >= MAX_TEXTURES {
            return Err(TextureError::Unit {
                unit,
                max: MAX_TEXTURES,
            });
        }
        if self.textures.len() <= unit {
            self.textures.resize(unit + 1, Texture::EMPTY);
        }
        self.textures[unit] = texture;
        Ok(())
    }

    /// Texture bound to `unit`, or an empty texture.
    pub fn texture(&self, unit: usize) -> &Texture {
        static EMPTY: Texture = Texture::EMPTY;
        self.textures.get(unit).unwrap_or(&EMPTY)
    }
}

/// How a varying is interpolated across a triangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Weighted by 1/w of each vertex.
    #[default]
    Perspective,
    /// Plain screen-space barycentric blend.
    Linear,
}

/// Declares that a vertex shader output slot reaches the fragment shader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Varying {
    pub ty: AttributeType,
    pub interpolation: Interpolation,
}

pub type VertexShader = fn(&mut OutVertex, &InVertex, &Uniforms);
pub type FragmentShader = fn(&mut OutFragment, &InFragment, &Uniforms);

/// Shader pair plus the state it reads.
///
/// Only slots declared in `varyings` are interpolated; the rest arrive
/// in the fragment shader as [`Attribute::Empty`](crate::Attribute::Empty).
#[derive(Clone)]
pub struct Program {
    pub vertex_shader: VertexShader,
    pub fragment_shader: FragmentShader,
    pub uniforms: Uniforms,
    pub varyings: [Varying; MAX_ATTRIBUTES],
}

impl std::fmt::Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program")
            .field("uniforms", &self.uniforms)
            .field("varyings", &self.varyings)
            .finish_non_exhaustive()
    }
}

impl Program {
    pub fn new(vertex_shader: VertexShader, fragment_shader: FragmentShader) -> Self {
        Self {
            vertex_shader,
            fragment_shader,
            uniforms: Uniforms::default(),
            varyings: [Varying::default(); MAX_ATTRIBUTES],
        }
    }

    pub fn with_uniforms(mut self, uniforms: Uniforms) -> Self {
        self.uniforms = uniforms;
        self
    }

    /// Declares a perspective-correct varying.
    pub fn with_varying(self, slot: usize, ty: AttributeType) -> Self {
        self.with_varying_interpolation(slot, ty, Interpolation::Perspective)
    }

    pub fn with_varying_interpolation(mut self, slot: usize, ty: AttributeType, interpolation: Interpolation) -> Self {
        self.varyings[slot] = Varying { ty, interpolation };
        self
    }
}
