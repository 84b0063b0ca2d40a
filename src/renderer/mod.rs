//! WebGPU rendering module
//!
//! Replays a [`crate::draw::DrawCommand`] list as colored triangles.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, RendererError};
