use bytemuck::{Pod, Zeroable};

use super::arc_length::OffsetVertex;

/// Vertex layout uploaded to the GPU: three consecutive `f32`s.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 2],
    pub arc_length: f32,
}

impl GpuVertex {
    /// Float components per vertex.
    pub const ATTRIBUTE_COMPONENTS: usize = 3;

    /// Byte distance between consecutive vertices.
    pub const STRIDE: usize = std::mem::size_of::<GpuVertex>();

    /// Byte offset of `arc_length` within a vertex.
    pub const ARC_LENGTH_OFFSET: usize = std::mem::size_of::<[f32; 2]>();

    /// The vertex as a flat `[x, y, arc_length]` triple.
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.position[0], self.position[1], self.arc_length]
    }
}

impl From<&OffsetVertex> for GpuVertex {
    #[allow(clippy::cast_possible_truncation)]
    fn from(v: &OffsetVertex) -> Self {
        Self {
            position: [v.position.x as f32, v.position.y as f32],
            arc_length: v.arc_length as f32,
        }
    }
}
