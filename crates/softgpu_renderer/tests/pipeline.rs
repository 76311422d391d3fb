use glam::{Mat4, Vec2, Vec3, Vec4};
use softgpu_core::{
    Attribute, AttributeType, FAR_DEPTH, Frame, InFragment, InVertex, IndexType, Interpolation, OutFragment, OutVertex,
    Program, Texture, Uniform, Uniforms, VertexArray, VertexAttrib,
};
use softgpu_renderer::{GpuContext, clear, draw_triangles, draw_triangles_par, read_texture};

fn passthrough_vs(out: &mut OutVertex, input: &InVertex, _: &Uniforms) {
    out.position = input.attributes[0].as_vec4();
    out.attributes[1] = input.attributes[1];
}

fn mvp_vs(out: &mut OutVertex, input: &InVertex, uniforms: &Uniforms) {
    out.position = uniforms.get(0).as_mat4() * input.attributes[0].as_vec3().extend(1.0);
    out.attributes[1] = input.attributes[1];
}

fn red_fs(out: &mut OutFragment, _: &InFragment, _: &Uniforms) {
    out.frag_color = Vec4::new(1.0, 0.0, 0.0, 1.0);
}

fn uniform_color_fs(out: &mut OutFragment, _: &InFragment, uniforms: &Uniforms) {
    out.frag_color = uniforms.get(1).as_vec4();
}

fn varying_color_fs(out: &mut OutFragment, input: &InFragment, _: &Uniforms) {
    out.frag_color = input.attributes[1].as_vec3().extend(1.0);
}

fn textured_fs(out: &mut OutFragment, input: &InFragment, uniforms: &Uniforms) {
    out.frag_color = read_texture(uniforms.texture(0), input.attributes[1].as_vec2());
}

fn bytes(data: &[f32]) -> &[u8] {
    bytemuck::cast_slice(data)
}

// Covers the whole [-1, 1] square.
const FULLSCREEN: [f32; 12] = [
    -1.0, -1.0, 0.5, 1.0, //
    3.0, -1.0, 0.5, 1.0, //
    -1.0, 3.0, 0.5, 1.0,
];

#[test]
fn clear_without_draws() {
    let mut ctx = GpuContext::new(Frame::new(5, 3), VertexArray::new(), Program::new(passthrough_vs, red_fs));
    clear(&mut ctx, 0.0, 0.2, 0.4, 1.0);
    for y in 0..3 {
        for x in 0..5 {
            assert_eq!(ctx.frame.pixel(x, y), [0, 51, 102, 255]);
            assert_eq!(ctx.frame.depth_at(x, y), FAR_DEPTH);
        }
    }
}

#[test]
fn fullscreen_red_triangle() {
    let vao = VertexArray::new().with_attrib(0, VertexAttrib::new(bytes(&FULLSCREEN), AttributeType::Vec4, 0, 16));
    let mut ctx = GpuContext::new(Frame::new(4, 4), vao, Program::new(passthrough_vs, red_fs));
    clear(&mut ctx, 0.0, 0.0, 1.0, 1.0);

    draw_triangles(&mut ctx, 3);

    for y in 0..4 {
        for x in 0..4 {
            let center = (x as f32 + 0.5, y as f32 + 0.5);
            let admitted = center.0 > 0.0 && center.0 < 4.0 && center.1 > 0.0 && center.1 < 4.0;
            let expected = if admitted { [255, 0, 0, 255] } else { [0, 0, 255, 255] };
            assert_eq!(ctx.frame.pixel(x, y), expected, "pixel ({x}, {y})");
        }
    }
    assert!(ctx.frame.depth().iter().all(|&d| (d - 0.5).abs() < 1e-6));
}

// Full-frame triangle at depth `z` in a flat color.
fn flat_triangle(z: f32, rgb: [f32; 3]) -> ([f32; 12], [f32; 9]) {
    let [r, g, b] = rgb;
    let positions = [-1.0, -1.0, z, 1.0, 3.0, -1.0, z, 1.0, -1.0, 3.0, z, 1.0];
    (positions, [r, g, b, r, g, b, r, g, b])
}

fn draw_pair(first: (f32, [f32; 3]), second: (f32, [f32; 3]), parallel: bool) -> Frame {
    let (p0, c0) = flat_triangle(first.0, first.1);
    let (p1, c1) = flat_triangle(second.0, second.1);
    let positions = [p0, p1].concat();
    let colors = [c0, c1].concat();

    let vao = VertexArray::new()
        .with_attrib(0, VertexAttrib::new(bytes(&positions), AttributeType::Vec4, 0, 16))
        .with_attrib(1, VertexAttrib::new(bytes(&colors), AttributeType::Vec3, 0, 12));
    let program = Program::new(passthrough_vs, varying_color_fs).with_varying(1, AttributeType::Vec3);
    let mut ctx = GpuContext::new(Frame::new(6, 6), vao, program);
    clear(&mut ctx, 0.0, 0.0, 0.0, 1.0);
    if parallel {
        draw_triangles_par(&mut ctx, 6);
    } else {
        draw_triangles(&mut ctx, 6);
    }
    ctx.frame
}

#[test]
fn nearer_triangle_wins_regardless_of_order() {
    let near = (-0.5, [1.0, 0.0, 0.0]);
    let far = (0.5, [0.0, 1.0, 0.0]);

    for parallel in [false, true] {
        for (first, second) in [(near, far), (far, near)] {
            let frame = draw_pair(first, second, parallel);
            assert_eq!(frame.pixel(2, 3), [255, 0, 0, 255], "first z {}, parallel {parallel}", first.0);
            assert!((frame.depth_at(2, 3) + 0.5).abs() < 1e-6);
        }
    }
}

#[test]
fn trailing_vertices_are_ignored() {
    let vao = VertexArray::new().with_attrib(0, VertexAttrib::new(bytes(&FULLSCREEN), AttributeType::Vec4, 0, 16));
    let mut ctx = GpuContext::new(Frame::new(4, 4), vao, Program::new(passthrough_vs, red_fs));
    clear(&mut ctx, 0.0, 0.0, 0.0, 0.0);

    draw_triangles(&mut ctx, 2);

    assert!(ctx.frame.color().iter().all(|&c| c == 0));
}

#[test]
fn indexed_draw_with_uniforms() {
    // Unit quad in the xy plane, scaled by the matrix uniform to fill the frame.
    let positions: [f32; 12] = [
        -0.5, -0.5, 0.0, //
        0.5, -0.5, 0.0, //
        0.5, 0.5, 0.0, //
        -0.5, 0.5, 0.0,
    ];
    let indices: [u16; 6] = [0, 1, 2, 0, 2, 3];
    let vao = VertexArray::new()
        .with_attrib(0, VertexAttrib::new(bytes(&positions), AttributeType::Vec3, 0, 12))
        .with_indices(bytemuck::cast_slice(&indices), IndexType::U16);

    let mut uniforms = Uniforms::new();
    uniforms.set(0, Uniform::Mat4(Mat4::from_scale(Vec3::splat(4.0))));
    uniforms.set(1, Uniform::Vec4(Vec4::new(0.0, 1.0, 0.0, 1.0)));
    let program = Program::new(mvp_vs, uniform_color_fs).with_uniforms(uniforms);
    let mut ctx = GpuContext::new(Frame::new(8, 8), vao, program);
    clear(&mut ctx, 0.0, 0.0, 0.0, 1.0);

    draw_triangles(&mut ctx, indices.len() as u32);

    // The shared diagonal lies on pixel centers (x == y); those belong to neither triangle.
    for y in 0..8 {
        for x in 0..8 {
            let expected = if x == y { [0, 0, 0, 255] } else { [0, 255, 0, 255] };
            assert_eq!(ctx.frame.pixel(x, y), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn textured_quad_samples_nearest_texels() {
    let vertices: [f32; 36] = [
        // x, y, z, w, u, v
        -1.0, -1.0, 0.0, 1.0, 0.0, 0.0, //
        1.0, -1.0, 0.0, 1.0, 1.0, 0.0, //
        1.0, 1.0, 0.0, 1.0, 1.0, 1.0, //
        -1.0, -1.0, 0.0, 1.0, 0.0, 0.0, //
        1.0, 1.0, 0.0, 1.0, 1.0, 1.0, //
        -1.0, 1.0, 0.0, 1.0, 0.0, 1.0,
    ];
    let data = bytes(&vertices);
    let vao = VertexArray::new()
        .with_attrib(0, VertexAttrib::new(data, AttributeType::Vec4, 0, 24))
        .with_attrib(1, VertexAttrib::new(data, AttributeType::Vec2, 16, 24));

    // left half black, right half white
    let texture = Texture::new(vec![0, 0, 0, 255, 255, 255, 0, 0, 0, 255, 255, 255], 2, 2, 3).unwrap();
    let mut uniforms = Uniforms::new();
    uniforms.bind_texture(0, texture).unwrap();
    let program = Program::new(passthrough_vs, textured_fs)
        .with_uniforms(uniforms)
        .with_varying(1, AttributeType::Vec2);
    let mut ctx = GpuContext::new(Frame::new(8, 8), vao, program);
    clear(&mut ctx, 1.0, 0.0, 0.0, 1.0);

    draw_triangles(&mut ctx, 6);

    assert_eq!(ctx.frame.pixel(1, 5), [0, 0, 0, 255]);
    assert_eq!(ctx.frame.pixel(6, 2), [255, 255, 255, 255]);
}

#[test]
fn perspective_correct_varying() {
    // Same screen triangle, but the first vertex is pushed back (w = 4).
    let positions: [f32; 12] = [
        -4.0, -4.0, 0.0, 4.0, //
        1.0, -1.0, 0.0, 1.0, //
        -1.0, 1.0, 0.0, 1.0,
    ];
    let colors: [f32; 9] = [
        1.0, 1.0, 1.0, //
        0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0,
    ];
    let build = |interpolation| {
        let vao = VertexArray::new()
            .with_attrib(0, VertexAttrib::new(bytes(&positions), AttributeType::Vec4, 0, 16))
            .with_attrib(1, VertexAttrib::new(bytes(&colors), AttributeType::Vec3, 0, 12));
        let program = Program::new(passthrough_vs, varying_color_fs).with_varying_interpolation(
            1,
            AttributeType::Vec3,
            interpolation,
        );
        let mut ctx = GpuContext::new(Frame::new(16, 16), vao, program);
        clear(&mut ctx, 0.0, 0.0, 0.0, 1.0);
        draw_triangles(&mut ctx, 3);
        ctx.frame
    };

    let perspective = build(Interpolation::Perspective);
    let linear = build(Interpolation::Linear);

    // At (3.5, 3.5) the weights are (0.5625, 0.21875, 0.21875).
    // linear: 0.5625 * 255 = 143.4
    // 1/w weighted: (0.5625 / 4) / (0.5625 / 4 + 0.4375) = 0.2432 -> 62.0
    assert_eq!(perspective.pixel(3, 3), [62, 62, 62, 255]);
    assert_eq!(linear.pixel(3, 3), [143, 143, 143, 255]);
}

#[test]
fn parallel_draw_matches_sequential() {
    let mut vertices = Vec::new();
    let mut colors = Vec::new();
    for i in 0..12 {
        let angle = i as f32 * 0.5;
        let center = Vec2::new(angle.cos(), angle.sin()) * 0.4;
        let z = (i % 5) as f32 * 0.2 - 0.4;
        for corner in [Vec2::new(-0.6, -0.5), Vec2::new(0.7, -0.3), Vec2::new(0.0, 0.6)] {
            let p = center + corner;
            vertices.extend_from_slice(&[p.x, p.y, z, 1.0 + (i % 3) as f32]);
            colors.extend_from_slice(&[(i % 2) as f32, (i % 3) as f32 / 2.0, (i % 4) as f32 / 3.0]);
        }
    }

    let render = |parallel: bool| {
        let vao = VertexArray::new()
            .with_attrib(0, VertexAttrib::new(bytes(&vertices), AttributeType::Vec4, 0, 16))
            .with_attrib(1, VertexAttrib::new(bytes(&colors), AttributeType::Vec3, 0, 12));
        let program = Program::new(passthrough_vs, varying_color_fs).with_varying(1, AttributeType::Vec3);
        let mut ctx = GpuContext::new(Frame::new(37, 23), vao, program);
        clear(&mut ctx, 0.1, 0.1, 0.1, 1.0);
        if parallel {
            draw_triangles_par(&mut ctx, 36);
        } else {
            draw_triangles(&mut ctx, 36);
        }
        ctx.frame.into_buffers()
    };

    let (seq_color, seq_depth) = render(false);
    let (par_color, par_depth) = render(true);
    assert_eq!(seq_color, par_color);
    assert_eq!(seq_depth, par_depth);
    assert!(seq_color.chunks(4).any(|px| px != [25, 25, 25, 255]));
}

#[test]
fn untouched_varyings_reach_the_fragment_empty() {
    fn check_fs(out: &mut OutFragment, input: &InFragment, _: &Uniforms) {
        let ok = input.attributes[1] == Attribute::Empty;
        out.frag_color = if ok { Vec4::ONE } else { Vec4::ZERO };
    }
    let vao = VertexArray::new().with_attrib(0, VertexAttrib::new(bytes(&FULLSCREEN), AttributeType::Vec4, 0, 16));
    let mut ctx = GpuContext::new(Frame::new(2, 2), vao, Program::new(passthrough_vs, check_fs));
    draw_triangles(&mut ctx, 3);
    assert!(ctx.frame.color().iter().all(|&c| c == 255));
}
