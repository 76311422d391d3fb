use bytemuck::pod_read_unaligned;
use glam::{Vec2, Vec3, Vec4};
use softgpu_core::{Attribute, AttributeType, InVertex, IndexType, VertexArray};

/// Resolves the vertex index of a shader invocation.
///
/// Without an index buffer the invocation number is the vertex index.
pub fn compute_vertex_id(vao: &VertexArray, invocation: u32) -> u32 {
    let Some(indices) = vao.index_buffer else {
        return invocation;
    };

    let i = invocation as usize;
    match vao.index_type {
        IndexType::U8 => indices[i] as u32,
        IndexType::U16 => pod_read_unaligned::<u16>(&indices[i * 2..i * 2 + 2]) as u32,
        IndexType::U32 => pod_read_unaligned::<u32>(&indices[i * 4..i * 4 + 4]),
    }
}

/// Gathers every bound attribute of the vertex used by `invocation`.
pub fn load_vertex(vao: &VertexArray, invocation: u32) -> InVertex {
    let mut in_vertex = InVertex {
        vertex_id: compute_vertex_id(vao, invocation),
        ..Default::default()
    };

    for (slot, attrib) in vao.vertex_attrib.iter().enumerate() {
        if attrib.ty == AttributeType::Empty {
            continue;
        }
        let start = attrib.offset + in_vertex.vertex_id as usize * attrib.stride;
        let bytes = &attrib.buffer[start..start + attrib.ty.size()];
        in_vertex.attributes[slot] = decode_attribute(attrib.ty, bytes);
    }

    in_vertex
}

// `bytes` is exactly `ty.size()` long.
fn decode_attribute(ty: AttributeType, bytes: &[u8]) -> Attribute {
    match ty {
        AttributeType::Empty => Attribute::Empty,
        AttributeType::Float => Attribute::Float(pod_read_unaligned::<f32>(bytes)),
        AttributeType::Vec2 => Attribute::Vec2(pod_read_unaligned::<Vec2>(bytes)),
        AttributeType::Vec3 => Attribute::Vec3(pod_read_unaligned::<Vec3>(bytes)),
        AttributeType::Vec4 => Attribute::Vec4(pod_read_unaligned::<Vec4>(bytes)),
    }
}
