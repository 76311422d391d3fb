use crate::attribute::{AttributeType, MAX_ATTRIBUTES};

/// Width of one element of an index buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndexType {
    U8,
    U16,
    #[default]
    U32,
}

impl IndexType {
    pub const fn size(self) -> usize {
        match self {
            IndexType::U8 => 1,
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

/// Describes where one vertex attribute lives inside a byte buffer.
///
/// The attribute of vertex `i` starts at `offset + i * stride`.
#[derive(Clone, Copy, Debug, Default)]
pub struct VertexAttrib<'a> {
    pub buffer: &'a [u8],
    pub ty: AttributeType,
    pub offset: usize,
    pub stride: usize,
}

impl<'a> VertexAttrib<'a> {
    pub fn new(buffer: &'a [u8], ty: AttributeType, offset: usize, stride: usize) -> Self {
        Self {
            buffer,
            ty,
            offset,
            stride,
        }
    }
}

/// Vertex puller settings: attribute descriptors plus an optional index buffer.
///
/// Borrowed buffers are never written by the pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct VertexArray<'a> {
    pub vertex_attrib: [VertexAttrib<'a>; MAX_ATTRIBUTES],
    pub index_buffer: Option<&'a [u8]>,
    pub index_type: IndexType,
}

impl<'a> VertexArray<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds an attribute to a slot.
    pub fn with_attrib(mut self, slot: usize, attrib: VertexAttrib<'a>) -> Self {
        self.vertex_attrib[slot] = attrib;
        self
    }

    /// Binds an index buffer; `bytes` holds tightly packed native-endian indices.
    pub fn with_indices(mut self, bytes: &'a [u8], index_type: IndexType) -> Self {
        self.index_buffer = Some(bytes);
        self.index_type = index_type;
        self
    }
}
