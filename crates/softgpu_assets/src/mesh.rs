use std::mem;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use softgpu_core::{AttributeType, IndexType, VertexArray, VertexAttrib};

// #[repr(C)] keeps the field order, so the attribute offsets below hold.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const POSITION_SLOT: usize = 0;
    pub const NORMAL_SLOT: usize = 1;
    pub const UV_SLOT: usize = 2;

    /// Binds position, normal and uv of an interleaved `Vertex` buffer.
    pub fn layout(buffer: &[u8]) -> VertexArray<'_> {
        let stride = mem::size_of::<Vertex>();
        VertexArray::new()
            .with_attrib(
                Self::POSITION_SLOT,
                VertexAttrib::new(buffer, AttributeType::Vec3, 0, stride),
            )
            .with_attrib(
                Self::NORMAL_SLOT,
                VertexAttrib::new(buffer, AttributeType::Vec3, mem::size_of::<[f32; 3]>(), stride),
            )
            .with_attrib(
                Self::UV_SLOT,
                VertexAttrib::new(buffer, AttributeType::Vec2, mem::size_of::<[f32; 3]>() * 2, stride),
            )
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Interleaved vertex bytes, ready for [`Vertex::layout`].
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Indexed vertex array over this mesh.
    pub fn vertex_array(&self) -> VertexArray<'_> {
        Vertex::layout(self.vertex_bytes()).with_indices(self.index_bytes(), IndexType::U32)
    }

    /// Number of invocations for an indexed draw of the whole mesh.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Axis-aligned cube centered on the origin, 4 vertices per face, CCW outside.
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        // normal, then the face's right and up axes
        let faces = [
            (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        ];

        let mut mesh = MeshData::default();
        for (normal, right, up) in faces {
            let base = mesh.vertices.len() as u32;
            for (u, v) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
                let position = (normal + right * (u * 2.0 - 1.0) + up * (v * 2.0 - 1.0)) * h;
                mesh.vertices.push(Vertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                    uv: [u, v],
                });
            }
            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        mesh
    }
}
