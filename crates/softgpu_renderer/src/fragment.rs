use glam::{Vec3, Vec4};
use softgpu_core::{InFragment, OutFragment, Program};

use crate::raster::{Barycentrics, ScreenTriangle, interpolate_attributes};

/// Window position of the fragment for pixel (`x`, `y`).
///
/// Returns `None` when the pixel center is not strictly inside the frame.
pub fn fragment_position(x: u32, y: u32, depth: f32, width: u32, height: u32) -> Option<Vec3> {
    let fragment_x = x as f32 + 0.5;
    let fragment_y = y as f32 + 0.5;
    let (width, height) = (width as f32, height as f32);

    if fragment_x >= width || fragment_x <= 0.0 || fragment_y >= height || fragment_y <= 0.0 {
        return None;
    }
    Some(Vec3::new(fragment_x, fragment_y, depth))
}

pub fn build_fragment(triangle: &ScreenTriangle, program: &Program, frag_coord: Vec3, weights: &Barycentrics) -> InFragment {
    InFragment {
        attributes: interpolate_attributes(&triangle.triangle, &program.varyings, weights),
        frag_coord,
    }
}

/// Runs the fragment shader and quantizes its color.
pub fn shade(program: &Program, in_fragment: &InFragment) -> [u8; 4] {
    let mut out_fragment = OutFragment::default();
    (program.fragment_shader)(&mut out_fragment, in_fragment, &program.uniforms);
    quantize(out_fragment.frag_color)
}

/// Clamps to [0, 1] and scales to 0..=255, truncating.
pub fn quantize(color: Vec4) -> [u8; 4] {
    let c = color.clamp(Vec4::ZERO, Vec4::ONE) * 255.0;
    [c.x as u8, c.y as u8, c.z as u8, c.w as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_centers_inside_the_frame_pass() {
        assert_eq!(fragment_position(0, 0, 0.5, 4, 4), Some(Vec3::new(0.5, 0.5, 0.5)));
        assert_eq!(fragment_position(3, 3, 0.0, 4, 4), Some(Vec3::new(3.5, 3.5, 0.0)));
    }

    #[test]
    fn pixels_outside_the_frame_are_rejected() {
        assert_eq!(fragment_position(4, 0, 0.0, 4, 4), None);
        assert_eq!(fragment_position(0, 7, 0.0, 4, 4), None);
        assert_eq!(fragment_position(0, 0, 0.0, 0, 4), None);
    }

    #[test]
    fn quantize_clamps_and_truncates() {
        assert_eq!(quantize(Vec4::new(1.0, 0.0, 0.0, 1.0)), [255, 0, 0, 255]);
        assert_eq!(quantize(Vec4::new(2.0, -1.0, 0.5, 0.999)), [255, 0, 127, 254]);
    }
}
