use softgpu_core::{OutVertex, Program, VertexArray};

use crate::fetch::load_vertex;

/// Three shaded vertices. Positions go from clip space to window space in place.
#[derive(Clone, Copy, Debug, Default)]
pub struct Triangle {
    pub points: [OutVertex; 3],
}

/// Fetches and shades the vertices of triangle `triangle_index`.
pub fn assemble_triangle(program: &Program, vao: &VertexArray, triangle_index: u32) -> Triangle {
    let mut triangle = Triangle::default();
    for (i, point) in triangle.points.iter_mut().enumerate() {
        let in_vertex = load_vertex(vao, triangle_index * 3 + i as u32);
        (program.vertex_shader)(point, &in_vertex, &program.uniforms);
    }
    triangle
}
