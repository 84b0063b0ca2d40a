//! Canvas Pong - classic two-paddle Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball physics, scoring, loop state)
//! - `geometry`: Axis-aligned rectangles
//! - `font`: 3x5 dot-matrix glyphs for the score labels
//! - `draw`: Backend-independent draw list for a frame
//! - `renderer`: WebGPU backend that replays a draw list
//! - `settings`: Tunable constants

pub mod draw;
pub mod font;
pub mod geometry;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use draw::{Color, DrawCommand, render};
pub use font::UnsupportedGlyphError;
pub use geometry::Rect;
pub use settings::Settings;
