use super::vec_2d::{cross_2d, length};
use super::Point2;

/// Vertex order of a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Positive signed area.
    CounterClockwise,
    /// Negative (or zero) signed area.
    Clockwise,
}

/// Index of the vertex before `i` in a closed ring of `n` vertices.
///
/// `n` must be non-zero.
#[must_use]
pub fn prev_index(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}

/// Index of the vertex after `i` in a closed ring of `n` vertices.
///
/// `n` must be non-zero.
#[must_use]
pub fn next_index(i: usize, n: usize) -> usize {
    (i + 1) % n
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = next_index(i, n);
        sum += cross_2d(points[i].coords, points[j].coords);
    }
    sum * 0.5
}

/// Orientation of a closed polygon from the sign of its area.
#[must_use]
pub fn orientation(points: &[Point2]) -> Orientation {
    if signed_area_2d(points) > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Total length of the closed ring, including the closing edge.
#[must_use]
pub fn perimeter_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| length(points[next_index(i, n)] - points[i]))
        .sum()
}

/// Even-odd point-in-polygon test. Points on the boundary may land on
/// either side.
#[must_use]
pub fn point_in_polygon_2d(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    let mut inside = false;
    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[prev_index(i, n)];
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn unit_square_ccw() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn wraparound_at_first_index() {
        assert_eq!(prev_index(0, 5), 4);
        assert_eq!(next_index(0, 5), 1);
    }

    #[test]
    fn wraparound_at_last_index() {
        assert_eq!(prev_index(4, 5), 3);
        assert_eq!(next_index(4, 5), 0);
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&unit_square_ccw());
        assert!((area - 1.0).abs() < TOLERANCE);
        assert_eq!(orientation(&unit_square_ccw()), Orientation::CounterClockwise);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square_ccw();
        pts.reverse();
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
        assert_eq!(orientation(&pts), Orientation::Clockwise);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point2::new(0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn perimeter_includes_closing_edge() {
        assert!((perimeter_2d(&unit_square_ccw()) - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn point_in_square() {
        let square = unit_square_ccw();
        assert!(point_in_polygon_2d(&Point2::new(0.5, 0.5), &square));
        assert!(!point_in_polygon_2d(&Point2::new(1.5, 0.5), &square));
        assert!(!point_in_polygon_2d(&Point2::new(-0.1, 0.9), &square));
    }
}
