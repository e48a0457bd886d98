use crate::error::{Result, TessellationError};
use crate::math::polygon_2d::{
    next_index, orientation, perimeter_2d, prev_index, signed_area_2d, Orientation,
};
use crate::math::vec_2d::{cross_2d, dot, length, normalized};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A validated, implicitly closed polyline: the last point connects back to
/// the first.
///
/// Construction rejects input the miter solver cannot handle:
/// - fewer than 3 points
/// - non-finite coordinates
/// - coincident neighbours (zero-length edge, including the closing edge)
/// - an edge too long for its length to be finite in `f64`
/// - an anti-parallel pair of adjacent edges (the path reverses on itself)
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedPolyline {
    points: Vec<Point2>,
}

impl ClosedPolyline {
    /// Validates `points` using the global [`TOLERANCE`].
    ///
    /// # Errors
    ///
    /// See [`ClosedPolyline::with_tolerance`].
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        Self::with_tolerance(points, TOLERANCE)
    }

    /// Validates `points`, treating adjacent edges whose direction cross
    /// product is below `collinear_tolerance` as collinear.
    ///
    /// # Errors
    ///
    /// - `TessellationError::TooFewPoints` for fewer than 3 points
    /// - `TessellationError::NonFinitePoint` for NaN or infinite coordinates
    /// - `TessellationError::ZeroLengthSegment` for coincident neighbours
    /// - `TessellationError::SegmentLengthOverflow` for finite neighbours
    ///   whose distance overflows `f64`
    /// - `TessellationError::DegenerateJoin` where the path doubles back
    pub fn with_tolerance(points: Vec<Point2>, collinear_tolerance: f64) -> Result<Self> {
        let n = points.len();
        if n < 3 {
            return Err(TessellationError::TooFewPoints { count: n }.into());
        }

        if let Some(index) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(TessellationError::NonFinitePoint { index }.into());
        }

        // All edges first, so a zero-length edge is never reported as a bad join.
        let mut dirs = Vec::with_capacity(n);
        for i in 0..n {
            let next = next_index(i, n);
            let d = points[next] - points[i];
            let len = length(d);
            if !len.is_finite() {
                return Err(TessellationError::SegmentLengthOverflow { index: i, next }.into());
            }
            if len < TOLERANCE {
                return Err(TessellationError::ZeroLengthSegment { index: i, next }.into());
            }
            dirs.push(normalized(d)?);
        }

        for i in 0..n {
            let incoming = dirs[prev_index(i, n)];
            let outgoing = dirs[i];
            if is_reversal(incoming, outgoing, collinear_tolerance) {
                return Err(TessellationError::DegenerateJoin { index: i }.into());
            }
        }

        Ok(Self { points })
    }

    /// Number of vertices (and edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a valid polyline has at least 3 points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The vertices in input order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Vertex `i`; indices wrap around.
    #[must_use]
    pub fn point(&self, i: usize) -> Point2 {
        self.points[i % self.points.len()]
    }

    /// Index of the vertex before `i`.
    #[must_use]
    pub fn prev_index(&self, i: usize) -> usize {
        prev_index(i, self.points.len())
    }

    /// Index of the vertex after `i`.
    #[must_use]
    pub fn next_index(&self, i: usize) -> usize {
        next_index(i, self.points.len())
    }

    /// Vector of edge `i`, from vertex `i` to vertex `i + 1`.
    #[must_use]
    pub fn edge(&self, i: usize) -> Vector2 {
        self.point(self.next_index(i)) - self.point(i)
    }

    /// Length of edge `i`.
    #[must_use]
    pub fn edge_length(&self, i: usize) -> f64 {
        length(self.edge(i))
    }

    /// Total length of all edges including the closing one.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter_2d(&self.points)
    }

    /// Signed area; positive for counter-clockwise input.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Vertex order of the ring.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        orientation(&self.points)
    }
}

/// Returns `true` when `b` runs back along `a`.
fn is_reversal(a: Vector2, b: Vector2, tolerance: f64) -> bool {
    cross_2d(a, b).abs() < tolerance && dot(a, b) <= 0.0
}
