//! Seams between the stroke mesh and a host application.
//!
//! The crate never opens a window or talks to a graphics API. A host
//! implements [`MeshSink`] for its GPU backend and [`EventSource`] for its
//! windowing layer; [`StrokeRenderer`] drives both.

use tracing::{debug, info};

use crate::error::{RenderError, Result};
use crate::tessellation::{GpuVertex, StrokeMesh};

/// Framebuffer size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Keys the renderer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    /// Any other key, by host-specific code.
    Other(u32),
}

/// Input produced by the host's windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    FramebufferResized { width: u32, height: u32 },
    KeyPressed(Key),
    CloseRequested,
}

/// Source of host events, polled once per frame.
pub trait EventSource {
    /// Drains the events received since the last call.
    fn poll_events(&mut self) -> Vec<HostEvent>;
}

/// GPU backend that receives the stroke buffers and issues draws.
///
/// Vertex buffers use [`GpuVertex`]: three consecutive `f32` per vertex.
/// Indices form a triangle list.
pub trait MeshSink {
    /// Copies vertex and index data into GPU-resident buffers.
    ///
    /// # Errors
    ///
    /// Implementations report backend failures as `RenderError::Backend`.
    fn upload(&mut self, vertices: &[GpuVertex], indices: &[u32]) -> Result<()>;

    /// Matches the viewport to the framebuffer.
    fn set_viewport(&mut self, viewport: Viewport);

    /// Draws `index_count` indices of the uploaded buffers.
    ///
    /// # Errors
    ///
    /// Implementations report backend failures as `RenderError::Backend`.
    fn draw_indexed(&mut self, index_count: u32) -> Result<()>;
}

/// Uploads a stroke mesh once and redraws it every frame.
#[derive(Debug)]
pub struct StrokeRenderer<S> {
    sink: S,
    index_count: u32,
    viewport: Viewport,
}

impl<S: MeshSink> StrokeRenderer<S> {
    /// Uploads `mesh` into `sink` and sets the initial viewport.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::MeshTooLarge` if the index count exceeds
    /// `u32::MAX`, or the sink's upload error.
    pub fn new(mut sink: S, mesh: &StrokeMesh, viewport: Viewport) -> Result<Self> {
        let indices = mesh.flat_indices();
        let index_count =
            u32::try_from(indices.len()).map_err(|_| RenderError::MeshTooLarge(indices.len()))?;

        sink.upload(&mesh.gpu_vertices(), indices)?;
        sink.set_viewport(viewport);
        debug!(
            vertices = mesh.vertices().len(),
            indices = index_count,
            "uploaded stroke mesh"
        );

        Ok(Self {
            sink,
            index_count,
            viewport,
        })
    }

    /// Applies pending host events and draws one frame.
    ///
    /// Returns `false` once the host asked to close (Escape or a close
    /// request); no draw is issued for that frame.
    ///
    /// # Errors
    ///
    /// Returns the sink's draw error.
    pub fn run_frame(&mut self, events: &mut impl EventSource) -> Result<bool> {
        for event in events.poll_events() {
            match event {
                HostEvent::FramebufferResized { width, height } => {
                    self.viewport = Viewport { width, height };
                    self.sink.set_viewport(self.viewport);
                    debug!(width, height, "framebuffer resized");
                }
                HostEvent::KeyPressed(Key::Escape) | HostEvent::CloseRequested => {
                    info!("close requested");
                    return Ok(false);
                }
                HostEvent::KeyPressed(Key::Other(_)) => {}
            }
        }
        self.sink.draw_indexed(self.index_count)?;
        Ok(true)
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of indices drawn per frame.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Borrows the backend.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the backend.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}
