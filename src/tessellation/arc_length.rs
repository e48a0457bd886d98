use crate::error::Result;
use crate::geometry::ClosedPolyline;
use crate::math::vec_2d::{divide, dot};
use crate::math::{Point2, Vector2};

/// A stroke vertex: a position plus its distance along the source path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetVertex {
    /// Position of the vertex.
    pub position: Point2,
    /// Distance along the original polyline at the vertex's projection
    /// onto its segment. Not clamped: corners displaced by a join may read
    /// slightly before or after the nominal corner distance.
    pub arc_length: f64,
}

/// One polyline edge as seen by the parameterizer.
#[derive(Debug, Clone, Copy)]
pub struct EdgeFrame {
    /// Start vertex of the edge.
    pub origin: Point2,
    /// Unit direction from start to end.
    pub dir: Vector2,
    /// Edge length.
    pub length: f64,
    /// Path length before `origin`.
    pub start_distance: f64,
}

impl EdgeFrame {
    /// Frame of edge `i`, starting at path distance `start_distance`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DivisionByZero` for a zero-length edge, which
    /// a validated polyline never has.
    pub fn new(polyline: &ClosedPolyline, i: usize, start_distance: f64) -> Result<Self> {
        let length = polyline.edge_length(i);
        Ok(Self {
            origin: polyline.point(i),
            dir: divide(polyline.edge(i), length)?,
            length,
            start_distance,
        })
    }

    /// Path distance of `position` projected onto this edge's line.
    #[must_use]
    pub fn arc_length_at(&self, position: &Point2) -> f64 {
        self.start_distance + dot(position - self.origin, self.dir)
    }

    /// Path distance at the end of this edge.
    #[must_use]
    pub fn end_distance(&self) -> f64 {
        self.start_distance + self.length
    }
}

/// Attaches arc lengths to the four corners of the quad over edge `i`.
///
/// Returns the vertices and the path distance at the end of the edge, which
/// is the `running_total` for edge `i + 1`.
///
/// # Errors
///
/// Fails only if [`EdgeFrame::new`] does.
pub fn parameterize_edge(
    polyline: &ClosedPolyline,
    i: usize,
    running_total: f64,
    positions: [Point2; 4],
) -> Result<([OffsetVertex; 4], f64)> {
    let frame = EdgeFrame::new(polyline, i, running_total)?;
    let vertices = positions.map(|position| OffsetVertex {
        position,
        arc_length: frame.arc_length_at(&position),
    });
    Ok((vertices, frame.end_distance()))
}
