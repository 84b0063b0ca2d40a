//! 3x5 dot-matrix font for score labels
//!
//! Each glyph is 15 cells, row-major (`index = row * 3 + col`), `'1'` = lit.
//! Only ASCII digits and letters are available.

use glam::Vec2;

use crate::draw::{Color, DrawCommand};
use crate::geometry::Rect;

pub const GLYPH_COLUMNS: usize = 3;
pub const GLYPH_ROWS: usize = 5;

/// Requested character has no glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("char «{ch}» not available")]
pub struct UnsupportedGlyphError {
    pub ch: char,
}

/// Dot size and spacing used to lay glyphs out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub dot_size: f32,
    pub dot_padding: f32,
    /// Cursor advance per character
    pub char_advance: f32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            dot_size: 5.0,
            dot_padding: 1.0,
            char_advance: 20.0,
        }
    }
}

/// A single dot-matrix glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph(&'static str);

impl Glyph {
    pub fn pattern(&self) -> &'static str {
        self.0
    }

    /// (column, row) of every lit cell, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        self.0
            .bytes()
            .enumerate()
            .filter(|&(_, cell)| cell == b'1')
            .map(|(i, _)| (i % GLYPH_COLUMNS, i / GLYPH_COLUMNS))
    }
}

/// Look up the glyph for `ch`
pub fn glyph(ch: char) -> Result<Glyph, UnsupportedGlyphError> {
    let pattern = match ch {
        '0' => "111101101101111",
        '1' => "010010010010010",
        '2' => "111001111100111",
        '3' => "111001011001111",
        '4' => "101101111001001",
        '5' => "111100111001111",
        '6' => "111100111101111",
        '7' => "111001001001001",
        '8' => "111101111101111",
        '9' => "111101111001111",

        'a' => "111001111101111",
        'A' => "111101111101101",
        'b' => "100100111101111",
        'B' => "111101111101111",
        'c' => "000000111100111",
        'C' => "111100100100111",
        'd' => "001001111101111",
        'D' => "110101101101111",
        'e' => "010101111100011",
        'E' => "111100111100111",
        'f' => "001010111010010",
        'F' => "111100111100100",
        'g' => "010101011001011",
        'G' => "011100111101011",
        'h' => "100100111101101",
        'H' => "101101111101101",
        'i' => "000010000010010",
        'I' => "010010010010010",
        'j' => "000010010010100",
        'J' => "001001001001110",
        'k' => "100101110101101",
        'K' => "101110110101101",
        'l' => "000010010010001",
        'L' => "100100100100111",
        'm' => "000000101111101",
        'M' => "000101111101101",
        'n' => "000000111101101",
        'N' => "101111111101101",
        'o' => "000000111101111",
        'O' => "111101101101111",
        'p' => "000110101110100",
        'P' => "111101111100100",
        'q' => "010101011001001",
        'Q' => "111101111001001",
        'r' => "000000011010010",
        'R' => "111101111101101",
        's' => "000011110001110",
        'S' => "111100111001111",
        't' => "010111010010011",
        'T' => "111010010010010",
        'u' => "000000101101010",
        'U' => "101101101101010",
        'v' => "000000000101010",
        'V' => "101101101101010",
        'w' => "000000101111010",
        'W' => "101101111111010",
        'x' => "000000101010101",
        'X' => "101101010101101",
        'y' => "000101011001110",
        'Y' => "101101010010010",
        'z' => "000000111010111",
        'Z' => "111011010100111",
        _ => return Err(UnsupportedGlyphError { ch }),
    };
    Ok(Glyph(pattern))
}

/// Fill commands for one character with its top-left corner at `origin`
pub fn draw_char(
    ch: char,
    origin: Vec2,
    color: Color,
    metrics: &FontMetrics,
) -> Result<Vec<DrawCommand>, UnsupportedGlyphError> {
    let pitch = metrics.dot_size + metrics.dot_padding;
    let commands = glyph(ch)?
        .cells()
        .map(|(col, row)| DrawCommand::FillRect {
            rect: Rect::new(
                origin.x + col as f32 * pitch,
                origin.y + row as f32 * pitch,
                metrics.dot_size,
                metrics.dot_size,
            ),
            color,
        })
        .collect();
    Ok(commands)
}

/// Fill commands for a left-to-right string starting at `origin`.
///
/// Fails on the first character without a glyph; nothing is returned for
/// the characters before it.
pub fn draw_string(
    text: &str,
    origin: Vec2,
    color: Color,
    metrics: &FontMetrics,
) -> Result<Vec<DrawCommand>, UnsupportedGlyphError> {
    let mut commands = Vec::new();
    let mut cursor = origin;
    for ch in text.chars() {
        commands.extend(draw_char(ch, cursor, color, metrics)?);
        cursor.x += metrics.char_advance;
    }
    Ok(commands)
}
