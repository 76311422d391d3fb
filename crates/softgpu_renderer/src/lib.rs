//! Software implementation of a programmable triangle pipeline.
//!
//! vertex fetch -> vertex shader -> perspective division -> viewport ->
//! rasterization -> fragment shader -> depth test -> frame write.
//!
//! There is no clipping: triangles are only divided by `w`.

use softgpu_core::{Frame, Program, VertexArray};

pub mod assembly;
pub mod clip;
pub mod draw;
pub mod fetch;
pub mod fragment;
pub mod raster;

pub use draw::{draw_triangles, draw_triangles_par};
pub use softgpu_core::read_texture;

/// Everything a draw call reads and writes.
pub struct GpuContext<'a> {
    pub frame: Frame,
    pub vao: VertexArray<'a>,
    pub prg: Program,
}

impl<'a> GpuContext<'a> {
    pub fn new(frame: Frame, vao: VertexArray<'a>, prg: Program) -> Self {
        Self { frame, vao, prg }
    }
}

/// Fills the frame with the given color and resets depth.
pub fn clear(ctx: &mut GpuContext<'_>, r: f32, g: f32, b: f32, a: f32) {
    let color = [r, g, b, a].map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8);
    ctx.frame.clear(color);
}
