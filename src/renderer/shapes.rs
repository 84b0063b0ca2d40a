//! Triangle generation for draw commands

use glam::Vec2;

use super::vertex::Vertex;
use crate::draw::DrawCommand;
use crate::geometry::Rect;

/// Map a canvas pixel position (origin top-left, y down) to normalized
/// device coordinates (origin centre, y up)
#[inline]
pub fn pixel_to_ndc(pos: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(pos.x / viewport.x * 2.0 - 1.0, 1.0 - pos.y / viewport.y * 2.0)
}

/// Two triangles covering `rect`, already in NDC
pub fn filled_rect(rect: &Rect, color: [f32; 4], viewport: Vec2) -> [Vertex; 6] {
    let edges = rect.edges();
    let tl = pixel_to_ndc(Vec2::new(edges.left, edges.top), viewport);
    let tr = pixel_to_ndc(Vec2::new(edges.right, edges.top), viewport);
    let bl = pixel_to_ndc(Vec2::new(edges.left, edges.bottom), viewport);
    let br = pixel_to_ndc(Vec2::new(edges.right, edges.bottom), viewport);

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Vertices for a whole draw list, in submission order
pub fn tessellate(commands: &[DrawCommand], viewport: Vec2) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(commands.len() * 6);
    for command in commands {
        match command {
            DrawCommand::FillRect { rect, color } => {
                vertices.extend_from_slice(&filled_rect(rect, color.0, viewport));
            }
        }
    }
    vertices
}
