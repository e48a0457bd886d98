mod arc_length;
mod gpu_vertex;
mod miter_offset;
mod stroke_style;
mod tessellate_stroke;

pub use arc_length::{parameterize_edge, EdgeFrame, OffsetVertex};
pub use gpu_vertex::GpuVertex;
pub use miter_offset::{compute_miter_offsets, miter_corner, MiterOffsets, Side};
pub use stroke_style::StrokeStyle;
pub use tessellate_stroke::{
    assemble_mesh, stroke_closed_polyline, tessellate_polyline, TessellateStroke,
};

/// Vertex order of a triangle in a y-up frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// A triangulated stroke ribbon.
///
/// Holds four vertices per polyline edge (left and right corner at the
/// edge start, then at the edge end) and two triangles per edge.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeMesh {
    vertices: Vec<OffsetVertex>,
    indices: Vec<[u32; 3]>,
}

impl StrokeMesh {
    /// Stroke vertices, `4n` for an `n`-point polyline.
    #[must_use]
    pub fn vertices(&self) -> &[OffsetVertex] {
        &self.vertices
    }

    /// Triangles as index triples into [`StrokeMesh::vertices`].
    #[must_use]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// Triangle indices flattened for an index buffer, `6n` entries.
    #[must_use]
    pub fn flat_indices(&self) -> &[u32] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Winding shared by every triangle of the mesh.
    ///
    /// Each quad runs left@i, right@i, left@next, so its triangles turn
    /// counter-clockwise whatever the orientation of the input ring.
    #[must_use]
    pub fn winding(&self) -> Winding {
        Winding::CounterClockwise
    }

    /// Vertices narrowed to the GPU layout.
    #[must_use]
    pub fn gpu_vertices(&self) -> Vec<GpuVertex> {
        self.vertices.iter().map(GpuVertex::from).collect()
    }
}
