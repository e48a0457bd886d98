pub mod error;
pub mod geometry;
pub mod math;
pub mod render;
pub mod tessellation;

pub use error::{MiterlineError, Result};
pub use tessellation::{stroke_closed_polyline, StrokeMesh, StrokeStyle, TessellateStroke};
