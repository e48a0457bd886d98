pub mod polyline;

pub use polyline::ClosedPolyline;
