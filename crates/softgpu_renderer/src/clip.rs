use crate::assembly::Triangle;

/// Divides x, y and z by w. `w` is kept for perspective-correct interpolation.
///
/// There is no clipping; a zero `w` yields non-finite coordinates.
pub fn perspective_division(triangle: &mut Triangle) {
    for point in &mut triangle.points {
        let w = point.position.w;
        point.position.x /= w;
        point.position.y /= w;
        point.position.z /= w;
    }
}

/// Maps normalized device x/y from [-1, 1] to [0, width] x [0, height].
pub fn viewport_transformation(triangle: &mut Triangle, width: u32, height: u32) {
    let (width, height) = (width as f32, height as f32);
    for point in &mut triangle.points {
        point.position.x = width * ((point.position.x + 1.0) / 2.0);
        point.position.y = height * ((point.position.y + 1.0) / 2.0);
    }
}
