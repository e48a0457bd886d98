use tracing::debug;

use crate::error::{Result, TessellationError};
use crate::geometry::ClosedPolyline;
use crate::math::Point2;

use super::arc_length::parameterize_edge;
use super::miter_offset::{compute_miter_offsets, MiterOffsets};
use super::stroke_style::StrokeStyle;
use super::StrokeMesh;

/// Generates a mitered ribbon mesh around a closed polyline.
///
/// Each edge becomes one quad (four vertices, two triangles) spanning the
/// miter corners at its two ends. Corners are never clamped or beveled.
#[derive(Debug)]
pub struct TessellateStroke {
    points: Vec<Point2>,
    style: StrokeStyle,
}

impl TessellateStroke {
    /// Creates a new stroke tessellation operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, style: StrokeStyle) -> Self {
        Self { points, style }
    }

    /// Executes the tessellation, producing a ribbon mesh.
    ///
    /// # Errors
    ///
    /// Fails before producing any output if the points do not form a valid
    /// [`ClosedPolyline`]: fewer than 3 points, non-finite coordinates,
    /// coincident neighbours or an edge pair that doubles back.
    pub fn execute(&self) -> Result<StrokeMesh> {
        let polyline =
            ClosedPolyline::with_tolerance(self.points.clone(), self.style.collinear_tolerance())?;
        tessellate_polyline(&polyline, &self.style)
    }
}

/// Strokes `points` with the given half-width and default settings.
///
/// # Errors
///
/// Fails if `half_width` is not positive and finite, or for the reasons
/// listed on [`TessellateStroke::execute`].
pub fn stroke_closed_polyline(points: Vec<Point2>, half_width: f64) -> Result<StrokeMesh> {
    TessellateStroke::new(points, StrokeStyle::new(half_width)?).execute()
}

/// Builds the stroke mesh of an already validated polyline.
///
/// # Errors
///
/// - `TessellationError::DegenerateJoin` if `style` treats a join as a
///   reversal that `polyline` was validated to accept
/// - `TessellationError::IndexOverflow` if the mesh cannot be addressed by
///   `u32` indices
pub fn tessellate_polyline(polyline: &ClosedPolyline, style: &StrokeStyle) -> Result<StrokeMesh> {
    let offsets = compute_miter_offsets(polyline, style)?;
    let mesh = assemble_mesh(polyline, &offsets)?;
    debug!(
        points = polyline.len(),
        vertices = mesh.vertices.len(),
        triangles = mesh.indices.len(),
        half_width = style.half_width(),
        "tessellated closed stroke"
    );
    Ok(mesh)
}

/// Lays out one quad per edge from precomputed miter corners.
///
/// Edge `i` owns vertices `4i..4i + 4` in the order left@i, right@i,
/// left@next, right@next, and triangles `[4i, 4i+1, 4i+2]` and
/// `[4i+1, 4i+3, 4i+2]`. The corners are not re-validated.
///
/// # Errors
///
/// Returns `TessellationError::IndexOverflow` if vertex `4i + 3` of some
/// edge does not fit a `u32` index.
pub fn assemble_mesh(polyline: &ClosedPolyline, offsets: &MiterOffsets) -> Result<StrokeMesh> {
    let n = polyline.len();
    let (left, right) = (&offsets.left, &offsets.right);

    let mut vertices = Vec::with_capacity(n * 4);
    let mut indices = Vec::with_capacity(n * 2);
    let mut running_total = 0.0;

    for i in 0..n {
        let j = polyline.next_index(i);
        let (quad, end) =
            parameterize_edge(polyline, i, running_total, [left[i], right[i], left[j], right[j]])?;
        running_total = end;
        vertices.extend_from_slice(&quad);

        let t = quad_base(i).ok_or(TessellationError::IndexOverflow { edges: n })?;
        indices.push([t, t + 1, t + 2]);
        indices.push([t + 1, t + 3, t + 2]);
    }

    Ok(StrokeMesh { vertices, indices })
}

/// First vertex index of the quad over edge `i`, if all four fit a `u32`.
fn quad_base(i: usize) -> Option<u32> {
    let t = u32::try_from(i.checked_mul(4)?).ok()?;
    t.checked_add(3)?;
    Some(t)
}
