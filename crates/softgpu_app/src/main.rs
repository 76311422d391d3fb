use std::{error::Error, time::Instant};

use glam::Vec3;
use softgpu_assets::{MeshData, load_texture, save_frame_png};
use softgpu_core::{Frame, Texture, camera::Camera, transform::Transform};
use softgpu_renderer::{GpuContext, clear, draw_triangles, draw_triangles_par};

mod config;
mod shaders;

use config::RenderConfig;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => RenderConfig::load(&path)?,
        None => {
            log::info!("no config given, using defaults");
            RenderConfig::default()
        }
    };
    log::debug!("{config:?}");

    let texture = match &config.texture {
        Some(path) => load_texture(path)?,
        None => shaders::checkerboard(256, 8),
    };

    std::fs::create_dir_all(&config.output_dir)?;
    render(&config, texture)
}

fn render(config: &RenderConfig, texture: Texture) -> Result<(), Box<dyn Error>> {
    let mesh = MeshData::cube(1.0);
    let camera = Camera {
        fov: config.fov_degrees.to_radians(),
        near: config.near,
        far: config.far,
        ..Camera::for_frame(config.width, config.height)
    }
    .looking_at(Vec3::new(0.0, 1.2, 3.0), Vec3::ZERO);
    let view_projection = camera.compute_view_projection();

    let mut cube = Transform::default();
    cube.rotate_local_x(20f32.to_radians());

    let mut ctx = GpuContext::new(
        Frame::new(config.width, config.height),
        mesh.vertex_array(),
        shaders::lit_program(texture)?,
    );
    let [r, g, b, a] = config.clear_color;

    for index in 0..config.frames {
        let start = Instant::now();

        shaders::set_matrices(
            &mut ctx.prg.uniforms,
            view_projection,
            cube.compute_matrix(),
            cube.compute_normal_matrix(),
        );
        clear(&mut ctx, r, g, b, a);
        if config.parallel {
            draw_triangles_par(&mut ctx, mesh.index_count());
        } else {
            draw_triangles(&mut ctx, mesh.index_count());
        }
        log::info!("frame {index} rendered in {:.2?}", start.elapsed());

        let path = config.output_dir.join(frame_name(index));
        save_frame_png(&ctx.frame, &path)?;

        cube.rotate_y(config.spin_degrees.to_radians());
    }

    Ok(())
}

fn frame_name(index: u32) -> String {
    format!("frame_{index:04}.png")
}
