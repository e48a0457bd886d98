//! Vector helpers on top of [`Vector2`].
//!
//! Addition, subtraction, scaling and negation come straight from the
//! `nalgebra` operators. The functions here cover the operations that can
//! fail or that `nalgebra` spells differently.

use super::{Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Divides `v` by the scalar `t`.
///
/// # Errors
///
/// Returns `GeometryError::DivisionByZero` if `|t|` is below [`TOLERANCE`].
pub fn divide(v: Vector2, t: f64) -> Result<Vector2> {
    if t.abs() < TOLERANCE {
        return Err(GeometryError::DivisionByZero.into());
    }
    Ok(v / t)
}

/// Rotates `v` by 90° counter-clockwise: `(x, y) → (−y, x)`.
///
/// For a walking direction this is the left-hand normal.
#[must_use]
pub fn rotate90(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Dot product.
#[must_use]
pub fn dot(a: Vector2, b: Vector2) -> f64 {
    a.dot(&b)
}

/// Z component of the 3D cross product: the signed sine of the angle from
/// `a` to `b` scaled by both lengths.
#[must_use]
pub fn cross_2d(a: Vector2, b: Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Euclidean length.
#[must_use]
pub fn length(v: Vector2) -> f64 {
    v.norm()
}

/// Returns `v / |v|`.
///
/// # Errors
///
/// - `GeometryError::ZeroVector` if `|v|` is below [`TOLERANCE`]
/// - `GeometryError::LengthOverflow` if `|v|` does not fit an `f64`
pub fn normalized(v: Vector2) -> Result<Vector2> {
    let len = length(v);
    if !len.is_finite() {
        return Err(GeometryError::LengthOverflow.into());
    }
    divide(v, len).map_err(|_| GeometryError::ZeroVector.into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MiterlineError;

    #[test]
    fn operators_cover_basic_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -1.0);
        assert_eq!(a + b, Vector2::new(4.0, 1.0));
        assert_eq!(a - b, Vector2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn divide_by_scalar() {
        let v = divide(Vector2::new(4.0, -2.0), 2.0).unwrap();
        assert_eq!(v, Vector2::new(2.0, -1.0));
    }

    #[test]
    fn divide_by_zero_fails() {
        let err = divide(Vector2::new(1.0, 1.0), 0.0).unwrap_err();
        assert!(matches!(
            err,
            MiterlineError::Geometry(GeometryError::DivisionByZero)
        ));
    }

    #[test]
    fn rotate90_is_left_normal() {
        assert_eq!(rotate90(Vector2::new(1.0, 0.0)), Vector2::new(0.0, 1.0));
        assert_eq!(rotate90(Vector2::new(0.0, 1.0)), Vector2::new(-1.0, 0.0));
        assert_eq!(rotate90(Vector2::new(3.0, 4.0)), Vector2::new(-4.0, 3.0));
    }

    #[test]
    fn dot_and_cross() {
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(0.0, 1.0);
        assert!(dot(a, b).abs() < TOLERANCE);
        assert!((cross_2d(a, b) - 1.0).abs() < TOLERANCE);
        assert!((cross_2d(b, a) + 1.0).abs() < TOLERANCE);
        assert!((dot(Vector2::new(2.0, 3.0), Vector2::new(4.0, 5.0)) - 23.0).abs() < TOLERANCE);
    }

    #[test]
    fn length_of_3_4() {
        assert!((length(Vector2::new(3.0, 4.0)) - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = normalized(Vector2::new(3.0, 4.0)).unwrap();
        assert!((n.x - 0.6).abs() < TOLERANCE);
        assert!((n.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn normalized_zero_vector_fails() {
        let err = normalized(Vector2::zeros()).unwrap_err();
        assert!(matches!(err, MiterlineError::Geometry(GeometryError::ZeroVector)));
    }

    #[test]
    fn normalized_overflowing_vector_fails() {
        let err = normalized(Vector2::new(1e200, 1e200)).unwrap_err();
        assert!(matches!(
            err,
            MiterlineError::Geometry(GeometryError::LengthOverflow)
        ));
    }
}
