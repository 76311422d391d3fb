use std::ops::Range;

use glam::Vec4;
use softgpu_core::{Attribute, AttributeType, Attributes, FrameRow, Interpolation, Program, Varying};

use crate::{assembly::Triangle, fragment};

/// Barycentric weights of a sample point, one per triangle vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Barycentrics {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Barycentrics {
    /// Strictly inside: samples on an edge or in a zero-area triangle are not covered.
    pub fn is_inside(&self) -> bool {
        self.x > 0.0 && self.y > 0.0 && self.z > 0.0
    }

    pub fn blend(&self, a: f32, b: f32, c: f32) -> f32 {
        a * self.x + b * self.y + c * self.z
    }
}

/// A window-space triangle prepared for scan conversion against one frame.
#[derive(Clone, Debug)]
pub struct ScreenTriangle {
    pub triangle: Triangle,
    positions: [Vec4; 3],
    inv_area: f32,
    columns: Range<u32>,
    rows: Range<u32>,
}

impl ScreenTriangle {
    pub fn setup(triangle: Triangle, width: u32, height: u32) -> Self {
        let positions = triangle.points.map(|p| p.position);
        let [a, b, c] = positions;
        let inv_area = 1.0 / ((b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y));

        let xs = [a.x, b.x, c.x];
        let ys = [a.y, b.y, c.y];
        Self {
            triangle,
            positions,
            inv_area,
            columns: scan_range(&xs, width),
            rows: scan_range(&ys, height),
        }
    }

    /// Weights of the point (`px`, `py`) relative to the three window positions.
    pub fn barycentrics(&self, px: f32, py: f32) -> Barycentrics {
        let [a, b, c] = self.positions;
        let x = ((b.y - c.y) * (px - c.x) + (c.x - b.x) * (py - c.y)) * self.inv_area;
        let y = ((c.y - a.y) * (px - c.x) + (a.x - c.x) * (py - c.y)) * self.inv_area;
        Barycentrics { x, y, z: 1.0 - x - y }
    }

    /// Window-space depth at the sample, interpolated without perspective correction.
    pub fn depth(&self, weights: &Barycentrics) -> f32 {
        let [a, b, c] = self.positions;
        weights.blend(a.z, b.z, c.z)
    }

    pub fn columns(&self) -> Range<u32> {
        self.columns.clone()
    }

    pub fn rows(&self) -> Range<u32> {
        self.rows.clone()
    }
}

// Bounding box widened by a pixel on each side and clamped to the frame.
// Non-finite vertices fall back to the whole frame, so coverage matches a full scan.
fn scan_range(coords: &[f32; 3], size: u32) -> Range<u32> {
    if coords.iter().any(|c| !c.is_finite()) {
        return 0..size;
    }
    let lo = coords.iter().copied().fold(f32::INFINITY, f32::min);
    let hi = coords.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    let start = (lo.floor() - 1.0).max(0.0);
    let end = (hi.ceil() + 1.0).min(size as f32);
    if start >= end {
        return 0..0;
    }
    start as u32..end as u32
}

/// Interpolates every declared varying at the sample.
pub fn interpolate_attributes(
    triangle: &Triangle,
    varyings: &[Varying],
    weights: &Barycentrics,
) -> Attributes {
    let mut attributes = Attributes::default();
    let [p0, p1, p2] = &triangle.points;
    let (w0, w1, w2) = (p0.position.w, p1.position.w, p2.position.w);

    for (slot, varying) in varyings.iter().enumerate() {
        if varying.ty == AttributeType::Empty {
            continue;
        }
        let a = p0.attributes[slot].to_vec4();
        let b = p1.attributes[slot].to_vec4();
        let c = p2.attributes[slot].to_vec4();

        let value: Vec4 = match varying.interpolation {
            Interpolation::Perspective => {
                (a * weights.x / w0 + b * weights.y / w1 + c * weights.z / w2)
                    / (weights.x / w0 + weights.y / w1 + weights.z / w2)
            }
            Interpolation::Linear => a * weights.x + b * weights.y + c * weights.z,
        };
        attributes[slot] = Attribute::from_vec4(varying.ty, value);
    }

    attributes
}

/// Scan-converts one frame row of `triangle`, shading and compositing covered pixels.
pub fn rasterize_row(triangle: &ScreenTriangle, program: &Program, width: u32, height: u32, row: &mut FrameRow<'_>) {
    let y = row.y;
    if !triangle.rows.contains(&y) {
        return;
    }
    let py = y as f32 + 0.5;

    for x in triangle.columns() {
        let weights = triangle.barycentrics(x as f32 + 0.5, py);
        if !weights.is_inside() {
            continue;
        }
        let depth = triangle.depth(&weights);

        let Some(frag_coord) = fragment::fragment_position(x, y, depth, width, height) else {
            continue;
        };
        let in_fragment = fragment::build_fragment(triangle, program, frag_coord, &weights);
        let color = fragment::shade(program, &in_fragment);
        row.depth_test(x, in_fragment.frag_coord.z, color);
    }
}
