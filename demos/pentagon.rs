//! Headless stroke demo.
//!
//! Strokes a five-point outline and drives [`StrokeRenderer`] with a sink
//! that logs what a GPU backend would receive.
//!
//! ```text
//! cargo run --example pentagon
//! RUST_LOG=miterline=trace cargo run --example pentagon
//! ```

use miterline::math::Point2;
use miterline::render::{EventSource, HostEvent, Key, MeshSink, StrokeRenderer, Viewport};
use miterline::tessellation::{GpuVertex, StrokeStyle, TessellateStroke};
use miterline::Result;

/// Half the stroke width, in framebuffer pixels.
const HALF_WIDTH: f64 = 3.0;

/// Frames to draw before the scripted Escape press.
const FRAMES: usize = 3;

struct LoggingSink;

impl MeshSink for LoggingSink {
    fn upload(&mut self, vertices: &[GpuVertex], indices: &[u32]) -> Result<()> {
        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        tracing::info!(
            vertices = vertices.len(),
            vertex_bytes = bytes.len(),
            stride = GpuVertex::STRIDE,
            indices = indices.len(),
            "upload"
        );
        for (k, v) in vertices.iter().enumerate() {
            let [x, y, s] = v.to_array();
            tracing::debug!(k, x, y, arc_length = s, "vertex");
        }
        Ok(())
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        tracing::info!(width = viewport.width, height = viewport.height, "viewport");
    }

    fn draw_indexed(&mut self, index_count: u32) -> Result<()> {
        tracing::info!(index_count, "draw triangles");
        Ok(())
    }
}

struct Script {
    frame: usize,
}

impl EventSource for Script {
    fn poll_events(&mut self) -> Vec<HostEvent> {
        self.frame += 1;
        match self.frame {
            2 => vec![HostEvent::FramebufferResized {
                width: 1024,
                height: 768,
            }],
            f if f > FRAMES => vec![HostEvent::KeyPressed(Key::Escape)],
            _ => Vec::new(),
        }
    }
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this demo and the library.
    // Override with RUST_LOG (e.g. RUST_LOG=miterline=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("pentagon=info".parse().unwrap_or_default())
        .add_directive("miterline=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let points = vec![
        Point2::new(100.0, 100.0),
        Point2::new(400.0, 150.0),
        Point2::new(400.0, 350.0),
        Point2::new(300.0, 200.0),
        Point2::new(120.0, 150.0),
    ];
    let mesh = TessellateStroke::new(points, StrokeStyle::new(HALF_WIDTH)?).execute()?;
    tracing::info!(
        triangles = mesh.triangle_count(),
        winding = ?mesh.winding(),
        "stroke built"
    );

    let mut renderer = StrokeRenderer::new(LoggingSink, &mesh, Viewport::default())?;
    let mut events = Script { frame: 0 };
    while renderer.run_frame(&mut events)? {}
    Ok(())
}
