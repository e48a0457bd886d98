use crate::error::{Result, TessellationError};
use crate::math::TOLERANCE;

/// Style parameters for closed polyline stroke tessellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    half_width: f64,
    collinear_tolerance: f64,
}

impl StrokeStyle {
    /// Creates a stroke style from its half-width (the distance from the
    /// path to either edge of the ribbon).
    ///
    /// # Errors
    ///
    /// Returns an error if `half_width` is not positive and finite.
    pub fn new(half_width: f64) -> Result<Self> {
        if !half_width.is_finite() || half_width <= 0.0 {
            return Err(TessellationError::InvalidParameters(
                "stroke half-width must be positive and finite".to_owned(),
            )
            .into());
        }
        Ok(Self {
            half_width,
            collinear_tolerance: TOLERANCE,
        })
    }

    /// Creates a stroke style from the full ribbon width.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive and finite.
    pub fn from_width(width: f64) -> Result<Self> {
        Self::new(width * 0.5)
    }

    /// Sets the threshold below which the sine of a turn angle counts as
    /// zero. Such joins are offset straight along the edge normal.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not positive and finite.
    pub fn with_collinear_tolerance(self, tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(TessellationError::InvalidParameters(
                "collinear tolerance must be positive and finite".to_owned(),
            )
            .into());
        }
        Ok(Self {
            collinear_tolerance: tolerance,
            ..self
        })
    }

    /// Returns the full stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.half_width * 2.0
    }

    /// Returns half the stroke width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Returns the collinearity threshold on the turn-angle sine.
    #[must_use]
    pub fn collinear_tolerance(&self) -> f64 {
        self.collinear_tolerance
    }
}
