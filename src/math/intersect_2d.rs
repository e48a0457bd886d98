use super::vec_2d::cross_2d;
use super::{Point2, Vector2};
use crate::error::{GeometryError, Result};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if the
/// lines are not parallel within `tolerance`.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
    tolerance: f64,
) -> Option<(f64, f64)> {
    let cross = cross_2d(*d1, *d2);
    if cross.abs() < tolerance {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

/// Intersects the line through `p0` with direction `dir0` and the line
/// through `p1` with direction `dir1`.
///
/// Used to place miter corners: `p0`/`p1` are a corner pushed out along the
/// incoming and outgoing edge normals.
///
/// # Errors
///
/// Returns `GeometryError::ParallelLines` when `|dir0 × dir1| < tolerance`.
pub fn offset_line_intersection(
    p0: &Point2,
    dir0: &Vector2,
    p1: &Point2,
    dir1: &Vector2,
    tolerance: f64,
) -> Result<Point2> {
    let (t, _) = line_line_intersect_2d(p0, dir0, p1, dir1, tolerance)
        .ok_or(GeometryError::ParallelLines)?;
    Ok(point_at(p0, dir0, t))
}
