use rayon::prelude::*;
use softgpu_core::{Frame, Program, VertexArray};

use crate::{
    GpuContext,
    assembly::assemble_triangle,
    clip::{perspective_division, viewport_transformation},
    raster::{ScreenTriangle, rasterize_row},
};

/// Runs the vertex stages of triangle `t` and prepares it for scan conversion.
pub fn process_triangle(program: &Program, vao: &VertexArray, frame: &Frame, t: u32) -> ScreenTriangle {
    let mut triangle = assemble_triangle(program, vao, t);
    perspective_division(&mut triangle);
    viewport_transformation(&mut triangle, frame.width(), frame.height());
    ScreenTriangle::setup(triangle, frame.width(), frame.height())
}

/// Scan-converts one triangle over the whole frame, rows top to bottom.
pub fn rasterize(frame: &mut Frame, triangle: &ScreenTriangle, program: &Program) {
    let (width, height) = (frame.width(), frame.height());
    for mut row in frame.rows_mut() {
        rasterize_row(triangle, program, width, height, &mut row);
    }
}

/// Draws `vertex_count / 3` triangles in order. Trailing vertices are ignored.
pub fn draw_triangles(ctx: &mut GpuContext<'_>, vertex_count: u32) {
    let triangle_count = triangle_count(vertex_count);

    for t in 0..triangle_count {
        let triangle = process_triangle(&ctx.prg, &ctx.vao, &ctx.frame, t);
        log::trace!("triangle {t}: rows {:?}, columns {:?}", triangle.rows(), triangle.columns());
        rasterize(&mut ctx.frame, &triangle, &ctx.prg);
    }
}

/// Same result as [`draw_triangles`], with frame rows spread over the rayon pool.
///
/// All triangles are shaded up front. Each row is then owned by one worker and
/// visits the triangles in input order, so every pixel sees the same sequence of
/// depth tests as in the sequential path.
pub fn draw_triangles_par(ctx: &mut GpuContext<'_>, vertex_count: u32) {
    let triangle_count = triangle_count(vertex_count);

    let triangles: Vec<ScreenTriangle> = (0..triangle_count)
        .into_par_iter()
        .map(|t| process_triangle(&ctx.prg, &ctx.vao, &ctx.frame, t))
        .collect();

    let program = &ctx.prg;
    let (width, height) = (ctx.frame.width(), ctx.frame.height());
    ctx.frame.par_rows_mut().for_each(|mut row| {
        for triangle in &triangles {
            rasterize_row(triangle, program, width, height, &mut row);
        }
    });
}

fn triangle_count(vertex_count: u32) -> u32 {
    let count = vertex_count / 3;
    let leftover = vertex_count % 3;
    if leftover != 0 {
        log::debug!("ignoring {leftover} trailing vertices of a {vertex_count} vertex draw");
    }
    log::debug!("drawing {count} triangles");
    count
}
