//! Backend-independent frame description
//!
//! [`render`] turns a [`GameState`] into a flat list of fill commands that
//! any rendering surface can replay in order.

use glam::Vec2;

use crate::font::{self, FontMetrics, UnsupportedGlyphError};
use crate::geometry::Rect;
use crate::sim::{GameState, Side};

/// RGBA color, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const BLACK: Color = Color([0.0, 0.0, 0.0, 1.0]);
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
}

/// A primitive drawing instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
}

impl DrawCommand {
    fn fill(rect: Rect, color: Color) -> Self {
        DrawCommand::FillRect { rect, color }
    }
}

impl From<&crate::settings::Settings> for FontMetrics {
    fn from(settings: &crate::settings::Settings) -> Self {
        Self {
            dot_size: settings.dot_size,
            dot_padding: settings.dot_padding,
            char_advance: settings.char_advance,
        }
    }
}

/// Top-left corner of a side's score label
pub fn score_origin(state: &GameState, side: Side) -> Vec2 {
    let width = state.field.width;
    Vec2::new(
        (side.index() as f32 * (width / 2.0) + width / 4.0).floor(),
        state.settings.score_y,
    )
}

/// Build the draw list for one frame: background, centre divider, paddles
/// with their scores, then balls.
pub fn render(state: &GameState) -> Result<Vec<DrawCommand>, UnsupportedGlyphError> {
    let field = state.field;
    let line_width = state.settings.line_width;
    let metrics = FontMetrics::from(&state.settings);

    let mut commands = vec![
        DrawCommand::fill(Rect::new(0.0, 0.0, field.width, field.height), Color::BLACK),
        DrawCommand::fill(
            Rect::new(
                (field.width / 2.0 - line_width / 2.0).floor(),
                0.0,
                line_width,
                field.height,
            ),
            Color::WHITE,
        ),
    ];

    for side in Side::BOTH {
        let paddle = state.paddle(side);
        commands.push(DrawCommand::fill(paddle.rect, Color::WHITE));
        commands.extend(font::draw_string(
            &paddle.score.to_string(),
            score_origin(state, side),
            Color::WHITE,
            &metrics,
        )?);
    }

    commands.extend(
        state
            .balls
            .iter()
            .map(|ball| DrawCommand::fill(ball.rect, Color::WHITE)),
    );

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn game() -> GameState {
        GameState::new(Settings::default(), 800.0, 600.0)
    }

    #[test]
    fn test_frame_layout() {
        let state = game();
        let commands = render(&state).unwrap();

        assert_eq!(
            commands[0],
            DrawCommand::fill(Rect::new(0.0, 0.0, 800.0, 600.0), Color::BLACK)
        );
        assert_eq!(
            commands[1],
            DrawCommand::fill(Rect::new(395.0, 0.0, 10.0, 600.0), Color::WHITE)
        );
        assert_eq!(commands[2], DrawCommand::fill(state.left.rect, Color::WHITE));

        // "0" has 12 lit cells, drawn after each paddle
        assert_eq!(commands[15], DrawCommand::fill(state.right.rect, Color::WHITE));
        assert_eq!(
            *commands.last().unwrap(),
            DrawCommand::fill(state.balls[0].rect, Color::WHITE)
        );
        assert_eq!(commands.len(), 2 + (1 + 12) * 2 + 1);
    }

    #[test]
    fn test_score_positions() {
        let state = game();
        assert_eq!(score_origin(&state, Side::Left), Vec2::new(200.0, 10.0));
        assert_eq!(score_origin(&state, Side::Right), Vec2::new(600.0, 10.0));

        let commands = render(&state).unwrap();
        // First lit cell of "0" is the top-left dot
        assert_eq!(
            commands[3],
            DrawCommand::fill(Rect::new(200.0, 10.0, 5.0, 5.0), Color::WHITE)
        );
    }

    #[test]
    fn test_multi_digit_score() {
        let mut state = game();
        state.right.score = 10;
        let commands = render(&state).unwrap();
        // "1" (5 cells) + "0" (12 cells) on the right
        assert_eq!(commands.len(), 2 + (1 + 12) + (1 + 5 + 12) + 1);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut state = game();
        state.left.score = 3;
        state.right.score = 27;
        assert_eq!(render(&state).unwrap(), render(&state).unwrap());
    }

    #[test]
    fn test_metrics_follow_settings() {
        let settings = Settings {
            dot_size: 3.0,
            dot_padding: 2.0,
            char_advance: 12.0,
            ..Default::default()
        };
        let metrics = FontMetrics::from(&settings);
        assert_eq!(metrics.dot_size, 3.0);
        assert_eq!(metrics.dot_padding, 2.0);
        assert_eq!(metrics.char_advance, 12.0);
    }
}
