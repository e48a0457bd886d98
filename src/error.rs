use thiserror::Error;

/// Top-level error type for stroke tessellation.
#[derive(Debug, Error)]
pub enum MiterlineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("division by zero")]
    DivisionByZero,

    #[error("vector length overflows f64")]
    LengthOverflow,

    #[error("lines are parallel")]
    ParallelLines,
}

/// Errors related to stroke tessellation.
#[derive(Debug, Error, PartialEq)]
pub enum TessellationError {
    #[error("at least 3 points are required for a closed stroke, got {count}")]
    TooFewPoints { count: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),

    #[error("zero-length segment between points {index} and {next}")]
    ZeroLengthSegment { index: usize, next: usize },

    #[error("edges meeting at point {index} are anti-parallel")]
    DegenerateJoin { index: usize },

    #[error("segment between points {index} and {next} is too long to measure in f64")]
    SegmentLengthOverflow { index: usize, next: usize },

    #[error("stroke of {edges} edges needs more vertices than 32-bit indices can address")]
    IndexOverflow { edges: usize },
}

/// Errors raised while handing a mesh to a rendering backend.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("mesh with {0} indices does not fit 32-bit index buffers")]
    MeshTooLarge(usize),

    #[error("rendering backend failed: {0}")]
    Backend(String),
}

/// Convenience type alias for results using [`MiterlineError`].
pub type Result<T> = std::result::Result<T, MiterlineError>;
