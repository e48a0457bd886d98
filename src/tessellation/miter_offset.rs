use tracing::trace;

use crate::error::{GeometryError, MiterlineError, Result, TessellationError};
use crate::geometry::ClosedPolyline;
use crate::math::intersect_2d::offset_line_intersection;
use crate::math::polygon_2d::Orientation;
use crate::math::vec_2d::{cross_2d, dot, normalized, rotate90};
use crate::math::{Point2, Vector2};

use super::stroke_style::StrokeStyle;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Offset side relative to the walking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Along the left-hand normal (`s = +1`).
    Left,
    /// Along the right-hand normal (`s = −1`).
    Right,
}

impl Side {
    /// Sign applied to the left-hand normal.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    /// The side that lies outside a polygon of the given orientation.
    ///
    /// Only a query: stroke quads always list the left corner first.
    #[must_use]
    pub fn outer(orientation: Orientation) -> Self {
        match orientation {
            Orientation::CounterClockwise => Side::Right,
            Orientation::Clockwise => Side::Left,
        }
    }

    /// The other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Miter corners on both sides of every polyline vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct MiterOffsets {
    /// Left-side corner for each input vertex.
    pub left: Vec<Point2>,
    /// Right-side corner for each input vertex.
    pub right: Vec<Point2>,
}

impl MiterOffsets {
    /// Corners on the given side.
    #[must_use]
    pub fn side(&self, side: Side) -> &[Point2] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Corners outside a polygon of the given orientation.
    #[must_use]
    pub fn outer(&self, orientation: Orientation) -> &[Point2] {
        self.side(Side::outer(orientation))
    }

    /// Corners inside a polygon of the given orientation.
    #[must_use]
    pub fn inner(&self, orientation: Orientation) -> &[Point2] {
        self.side(Side::outer(orientation).opposite())
    }
}

/// Computes the left and right miter corner for every vertex of `polyline`.
///
/// No miter limit is applied: sharp turns give long spikes.
///
/// # Errors
///
/// Returns `TessellationError::DegenerateJoin` if two adjacent edges run in
/// opposite directions. [`ClosedPolyline`] already rejects such input unless
/// it was validated with a looser tolerance than `style`.
pub fn compute_miter_offsets(polyline: &ClosedPolyline, style: &StrokeStyle) -> Result<MiterOffsets> {
    #[cfg(not(feature = "parallel"))]
    let corners = sequential_corners(polyline, style)?;

    #[cfg(feature = "parallel")]
    let corners = parallel_corners(polyline, style)?;

    let (left, right) = corners.into_iter().unzip();
    Ok(MiterOffsets { left, right })
}

#[cfg(any(not(feature = "parallel"), test))]
fn sequential_corners(
    polyline: &ClosedPolyline,
    style: &StrokeStyle,
) -> Result<Vec<(Point2, Point2)>> {
    (0..polyline.len())
        .map(|i| vertex_corners(polyline, i, style))
        .collect()
}

#[cfg(feature = "parallel")]
fn parallel_corners(
    polyline: &ClosedPolyline,
    style: &StrokeStyle,
) -> Result<Vec<(Point2, Point2)>> {
    (0..polyline.len())
        .into_par_iter()
        .map(|i| vertex_corners(polyline, i, style))
        .collect()
}

/// Left and right miter corners at vertex `i`.
fn vertex_corners(
    polyline: &ClosedPolyline,
    i: usize,
    style: &StrokeStyle,
) -> Result<(Point2, Point2)> {
    let prev = polyline.point(polyline.prev_index(i));
    let cur = polyline.point(i);
    let next = polyline.point(polyline.next_index(i));

    let dir0 = normalized(cur - prev)?;
    let dir1 = normalized(next - cur)?;

    let w = style.half_width();
    let tol = style.collinear_tolerance();
    let corner = |side: Side| {
        miter_corner(&cur, dir0, dir1, side.sign() * w, tol).map_err(|e| match e {
            MiterlineError::Geometry(GeometryError::ParallelLines) => {
                TessellationError::DegenerateJoin { index: i }.into()
            }
            other => other,
        })
    };

    let left = corner(Side::Left)?;
    let right = corner(Side::Right)?;
    if cross_2d(dir0, dir1).abs() < tol {
        trace!(index = i, "straight-through join");
    }
    Ok((left, right))
}

/// Intersects the incoming and outgoing edges after shifting both by
/// `offset` along their left-hand normals.
///
/// `dir0` and `dir1` must be unit vectors. When the edges are collinear and
/// continue in the same direction, the corner is `cur` shifted along the
/// shared normal.
///
/// # Errors
///
/// Returns `GeometryError::ParallelLines` when the edges are collinear and
/// the path reverses.
pub fn miter_corner(
    cur: &Point2,
    dir0: Vector2,
    dir1: Vector2,
    offset: f64,
    tolerance: f64,
) -> Result<Point2> {
    let p0 = cur + rotate90(dir0) * offset;
    if cross_2d(dir0, dir1).abs() < tolerance {
        if dot(dir0, dir1) > 0.0 {
            return Ok(p0);
        }
        return Err(GeometryError::ParallelLines.into());
    }
    let p1 = cur + rotate90(dir1) * offset;
    offset_line_intersection(&p0, &dir0, &p1, &dir1, tolerance)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;

    fn style(half_width: f64) -> StrokeStyle {
        StrokeStyle::new(half_width).unwrap()
    }

    fn square() -> ClosedPolyline {
        ClosedPolyline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ])
        .unwrap()
    }

    #[cfg(feature = "parallel")]
    fn pentagon() -> ClosedPolyline {
        ClosedPolyline::new(vec![
            Point2::new(100.0, 100.0),
            Point2::new(400.0, 150.0),
            Point2::new(400.0, 350.0),
            Point2::new(300.0, 200.0),
            Point2::new(120.0, 150.0),
        ])
        .unwrap()
    }

    #[cfg(feature = "parallel")]
    fn hexagon() -> ClosedPolyline {
        ClosedPolyline::new(
            (0..6)
                .map(|k| {
                    let a = f64::from(k) * std::f64::consts::FRAC_PI_3;
                    Point2::new(50.0 + 20.0 * a.cos(), -5.0 + 20.0 * a.sin())
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn square_corners() {
        let offsets = compute_miter_offsets(&square(), &style(1.0)).unwrap();
        // Counter-clockwise: left is inside, right is outside.
        assert_relative_eq!(offsets.left[0], Point2::new(1.0, 1.0), epsilon = TOLERANCE);
        assert_relative_eq!(offsets.right[0], Point2::new(-1.0, -1.0), epsilon = TOLERANCE);
        assert_relative_eq!(offsets.left[2], Point2::new(9.0, 9.0), epsilon = TOLERANCE);
        assert_relative_eq!(offsets.right[2], Point2::new(11.0, 11.0), epsilon = TOLERANCE);
    }

    #[test]
    fn outer_and_inner_follow_orientation() {
        let offsets = compute_miter_offsets(&square(), &style(1.0)).unwrap();
        let ccw = Orientation::CounterClockwise;
        assert_eq!(offsets.outer(ccw), offsets.right.as_slice());
        assert_eq!(offsets.inner(ccw), offsets.left.as_slice());
        assert_eq!(offsets.outer(Orientation::Clockwise), offsets.left.as_slice());
    }

    #[test]
    fn miter_distance_is_w_sqrt2_at_right_angle() {
        let offsets = compute_miter_offsets(&square(), &style(1.0)).unwrap();
        let pl = square();
        for (corner, p) in offsets.right.iter().zip(pl.points()) {
            assert_relative_eq!((corner - p).norm(), 2f64.sqrt(), epsilon = 1e-9);
        }
    }

    #[test]
    fn straight_through_vertex_is_exact() {
        let pl = ClosedPolyline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(5.0, 8.0),
        ])
        .unwrap();
        let offsets = compute_miter_offsets(&pl, &style(2.0)).unwrap();
        assert_eq!(offsets.left[1], Point2::new(5.0, 2.0));
        assert_eq!(offsets.right[1], Point2::new(5.0, -2.0));
        assert!(offsets.left.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn miter_corner_rejects_reversal() {
        let err = miter_corner(
            &Point2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(-1.0, 0.0),
            1.0,
            TOLERANCE,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MiterlineError::Geometry(GeometryError::ParallelLines)
        ));
    }

    #[test]
    fn loose_style_tolerance_reports_degenerate_join() {
        // Nearly reversing at vertex 1; accepted by the strict polyline check
        // but rejected once the style treats it as collinear.
        let pl = ClosedPolyline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 0.001),
        ])
        .unwrap();
        let loose = style(1.0).with_collinear_tolerance(0.01).unwrap();
        let err = compute_miter_offsets(&pl, &loose).unwrap_err();
        assert!(matches!(
            err,
            MiterlineError::Tessellation(TessellationError::DegenerateJoin { index: 1 })
        ));
    }

    #[test]
    fn sharp_turn_is_not_clamped() {
        // ~6° spike: miter distance w / sin(θ/2) far exceeds any usual limit.
        let pl = ClosedPolyline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 5.0),
            Point2::new(0.0, 10.0),
        ])
        .unwrap();
        let offsets = compute_miter_offsets(&pl, &style(1.0)).unwrap();
        let tip = pl.point(1);
        let far = (offsets.right[1] - tip).norm().max((offsets.left[1] - tip).norm());
        assert!(far > 10.0, "miter distance {far} should be unclamped");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_solve_matches_sequential() {
        for pl in [pentagon(), square(), hexagon()] {
            let wide = style(3.0);
            let (left, right) = sequential_corners(&pl, &wide).unwrap().into_iter().unzip();
            assert_eq!(
                compute_miter_offsets(&pl, &wide).unwrap(),
                MiterOffsets { left, right }
            );
        }
    }
}
