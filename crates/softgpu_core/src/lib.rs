//! Data model shared by the software pipeline: vertex arrays, shader records,
//! programs, the frame and textures.

pub mod attribute;
pub mod camera;
pub mod frame;
pub mod program;
pub mod texture;
pub mod transform;
pub mod vertex_array;

pub use attribute::{Attribute, AttributeType, Attributes, MAX_ATTRIBUTES};
pub use frame::{FAR_DEPTH, Frame, FrameError, FrameRow};
pub use program::{
    FragmentShader, InFragment, InVertex, Interpolation, MAX_TEXTURES, MAX_UNIFORMS, OutFragment, OutVertex,
    Program, Uniform, Uniforms, Varying, VertexShader,
};
pub use texture::{Texture, TextureError, read_texture};
pub use vertex_array::{IndexType, VertexArray, VertexAttrib};

pub use glam;
