//! Rendering collaborator
//!
//! Builds a flat triangle list for the current frame. Any GPU backend can
//! upload [`VertexRenderer::vertices`] as-is (`bytemuck::cast_slice`).

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::consts::PURSUER_DRAW_RADIUS;
use crate::sim::{GameState, PursuerColor};

/// Segments used to tessellate pursuer disks
const DISK_SEGMENTS: u32 = 16;

/// Anything that can present a frame of game state
pub trait RenderSink {
    fn draw(&mut self, state: &GameState);
}

impl PursuerColor {
    pub fn rgba(self) -> [f32; 4] {
        match self {
            PursuerColor::Red => colors::PURSUER_RED,
            PursuerColor::Yellow => colors::PURSUER_YELLOW,
        }
    }
}

/// Tessellates each frame into a reusable vertex buffer
#[derive(Debug, Default)]
pub struct VertexRenderer {
    vertices: Vec<Vertex>,
    frames: u64,
}

impl VertexRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangle list for the last drawn frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for VertexRenderer {
    fn draw(&mut self, state: &GameState) {
        self.vertices.clear();
        self.vertices.extend(shapes::craft_triangle(
            state.craft.pos,
            state.craft.heading,
            colors::CRAFT,
        ));
        for pursuer in &state.pursuers {
            self.vertices.extend(shapes::circle(
                pursuer.pos,
                PURSUER_DRAW_RADIUS,
                pursuer.color.rgba(),
                DISK_SEGMENTS,
            ));
        }
        self.frames += 1;
    }
}

/// Draws nothing (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl RenderSink for NullRenderer {
    fn draw(&mut self, _state: &GameState) {}
}
