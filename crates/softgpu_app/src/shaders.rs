use glam::{Mat4, Vec3, Vec4};
use softgpu_assets::Vertex;
use softgpu_core::{
    AttributeType, InFragment, InVertex, OutFragment, OutVertex, Program, Texture, TextureError, Uniform, Uniforms, read_texture,
};

// uniform slots
pub const MVP: usize = 0;
pub const NORMAL_MATRIX: usize = 1;
pub const LIGHT_DIR: usize = 2;

// varying slots
const NORMAL: usize = 0;
const UV: usize = 1;

const AMBIENT: f32 = 0.2;

pub fn lit_vs(out: &mut OutVertex, input: &InVertex, uniforms: &Uniforms) {
    let position = input.attributes[Vertex::POSITION_SLOT].as_vec3();
    let normal = input.attributes[Vertex::NORMAL_SLOT].as_vec3();

    out.position = uniforms.get(MVP).as_mat4() * position.extend(1.0);
    out.attributes[NORMAL] = uniforms.get(NORMAL_MATRIX).as_mat4().transform_vector3(normal).into();
    out.attributes[UV] = input.attributes[Vertex::UV_SLOT];
}

pub fn lit_textured_fs(out: &mut OutFragment, input: &InFragment, uniforms: &Uniforms) {
    let normal = input.attributes[NORMAL].as_vec3().normalize_or_zero();
    let light = uniforms.get(LIGHT_DIR).as_vec3();
    let diffuse = normal.dot(light).max(0.0);

    let albedo = read_texture(uniforms.texture(0), input.attributes[UV].as_vec2());
    let shade = AMBIENT + (1.0 - AMBIENT) * diffuse;
    out.frag_color = Vec4::new(albedo.x * shade, albedo.y * shade, albedo.z * shade, 1.0);
}

/// Program for the demo cube: lambert lighting over a texture.
pub fn lit_program(texture: Texture) -> Result<Program, TextureError> {
    let mut uniforms = Uniforms::new();
    uniforms.set(LIGHT_DIR, Uniform::Vec3(Vec3::new(0.4, 0.8, 0.6).normalize()));
    uniforms.bind_texture(0, texture)?;

    Ok(Program::new(lit_vs, lit_textured_fs)
        .with_uniforms(uniforms)
        .with_varying(NORMAL, AttributeType::Vec3)
        .with_varying(UV, AttributeType::Vec2))
}

/// Updates the per-frame matrices.
pub fn set_matrices(uniforms: &mut Uniforms, view_projection: Mat4, model: Mat4, normal_matrix: Mat4) {
    uniforms.set(MVP, Uniform::Mat4(view_projection * model));
    uniforms.set(NORMAL_MATRIX, Uniform::Mat4(normal_matrix));
}

/// Two-tone RGB checkerboard with `cells` squares per side.
pub fn checkerboard(size: u32, cells: u32) -> Texture {
    let cell = (size / cells.max(1)).max(1);
    let mut pixels = Vec::with_capacity((size * size * 3) as usize);
    for y in 0..size {
        for x in 0..size {
            let light = ((x / cell) + (y / cell)) % 2 == 0;
            let rgb: [u8; 3] = if light { [230, 200, 120] } else { [60, 90, 160] };
            pixels.extend_from_slice(&rgb);
        }
    }
    // length is size * size * 3 by construction
    Texture::new(pixels, size, size, 3).unwrap_or_default()
}
