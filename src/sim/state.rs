//! Game state and core simulation types
//!
//! The caller owns a [`GameState`]; nothing in here is global.

use glam::Vec2;

use super::input::KeyBindings;
use crate::geometry::Rect;
use crate::settings::Settings;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Position of the paddle's score label (0 = left half, 1 = right half)
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Whether the frame loop is advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Paused,
}

/// Size of the play area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

/// A player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    side: Side,
    pub score: u32,
    pub rect: Rect,
    pub bindings: KeyBindings,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            score: 0,
            rect: Rect::default(),
            bindings: KeyBindings::for_side(side),
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }
}

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    /// Distance travelled per tick
    pub speed: f32,
    /// Horizontal travel: 1.0 toward the right paddle, -1.0 toward the left
    pub direction: f32,
    /// Deflection from horizontal in degrees, kept within ±max_angle
    pub angle: f32,
    pub rect: Rect,
}

impl Ball {
    pub fn new(settings: &Settings) -> Self {
        Self {
            speed: settings.ball_speed,
            direction: 1.0,
            angle: settings.ball_angle,
            rect: Rect::new(0.0, 0.0, settings.ball_size, settings.ball_size),
        }
    }

    /// Per-tick displacement
    pub fn velocity(&self) -> Vec2 {
        let radians = self.angle.to_radians();
        Vec2::new(radians.cos(), radians.sin()) * self.speed * self.direction
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub field: Playfield,
    /// Current paddle height, derived from the field height
    pub paddle_height: f32,
    pub left: Paddle,
    pub right: Paddle,
    pub balls: Vec<Ball>,
    pub phase: LoopState,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a running game laid out for a `width` x `height` field
    pub fn new(settings: Settings, width: f32, height: f32) -> Self {
        let balls = (0..settings.ball_count).map(|_| Ball::new(&settings)).collect();

        let mut state = Self {
            settings,
            field: Playfield { width, height },
            paddle_height: 0.0,
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            balls,
            phase: LoopState::Running,
            time_ticks: 0,
        };

        state.resize(width, height);
        for i in 0..state.balls.len() {
            state.reset_ball(i);
        }

        let y = state.paddle_start_y();
        state.left.rect.origin = Vec2::new(state.settings.line_width, y);
        state.right.rect.origin.y = y;

        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == LoopState::Running
    }

    /// Apply new viewport dimensions: paddle height follows the field height
    /// and the right paddle stays anchored to the right edge.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field = Playfield { width, height };
        self.paddle_height = (height / 8.0).floor();

        let line_width = self.settings.line_width;
        for side in Side::BOTH {
            let paddle_height = self.paddle_height;
            let paddle = self.paddle_mut(side);
            paddle.rect.size = Vec2::new(line_width, paddle_height);
            if side == Side::Right {
                paddle.rect.origin.x = width - paddle.rect.size.x - line_width;
            }
        }

        self.clamp_paddle(Side::Left);
        self.clamp_paddle(Side::Right);
        log::info!("Playfield resized to {}x{}", width, height);
    }

    /// Allowed range for a paddle's top edge
    pub fn paddle_bounds(&self) -> (f32, f32) {
        let line_width = self.settings.line_width;
        (
            line_width,
            self.field.height - self.paddle_height - line_width * 2.0,
        )
    }

    /// Pull a paddle back inside [`Self::paddle_bounds`]
    pub fn clamp_paddle(&mut self, side: Side) {
        let (min, max) = self.paddle_bounds();
        let paddle = self.paddle_mut(side);
        // Lower bound wins on a field too short to fit the paddle
        paddle.rect.origin.y = paddle.rect.origin.y.min(max).max(min);
    }

    fn paddle_start_y(&self) -> f32 {
        ((self.field.height - self.paddle_height) / 2.0).floor()
    }

    /// Serve the ball at `index` again from the centre, toward the right paddle
    pub fn reset_ball(&mut self, index: usize) {
        let field = self.field;
        if let Some(ball) = self.balls.get_mut(index) {
            ball.rect.origin = Vec2::new(
                ((field.width - ball.rect.size.x) / 2.0).floor(),
                ((field.height - ball.rect.size.y) / 2.0).floor(),
            );
            ball.angle = 0.0;
            ball.direction = 1.0;
        }
    }

    /// Zero both scores and re-centre paddles and balls. The loop state is left alone.
    pub fn reset_game(&mut self) {
        let y = self.paddle_start_y();
        for side in Side::BOTH {
            let paddle = self.paddle_mut(side);
            paddle.score = 0;
            paddle.rect.origin.y = y;
        }
        self.clamp_paddle(Side::Left);
        self.clamp_paddle(Side::Right);

        for i in 0..self.balls.len() {
            self.reset_ball(i);
        }
    }
}
