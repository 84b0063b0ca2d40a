//! Per-frame simulation step and loop driver
//!
//! One tick is one rendered frame. Movement is a fixed amount per tick, so
//! game speed follows the display refresh rate.

use super::collision::{Deflection, deflect_off_paddle, hits_wall};
use super::input::{Command, InputState};
use super::state::{GameState, LoopState, Side};
use crate::draw::{self, DrawCommand};
use crate::font::UnsupportedGlyphError;

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball `ball` touched the paddle on `side`
    PaddleHit {
        ball: usize,
        side: Side,
        deflection: Deflection,
    },
    /// Ball `ball` bounced off the top or bottom wall
    WallBounce { ball: usize },
    /// The paddle on `side` won a point
    Scored { side: Side, left: u32, right: u32 },
}

/// What the host scheduler should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Request another frame
    Continue,
    /// Stop requesting frames until the game is resumed
    Halt,
}

/// Result of a driven tick
#[derive(Debug, Clone)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    pub events: Vec<GameEvent>,
    pub next: Continuation,
}

/// Advance the simulation by one step: move paddles, resolve paddle hits,
/// then move balls, bounce them off walls and award points.
pub fn update(state: &mut GameState, input: &InputState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    move_paddles(state, input);
    detect_paddle_hits(state, input, &mut events);
    move_balls(state, &mut events);

    events
}

fn move_paddles(state: &mut GameState, input: &InputState) {
    let step = state.settings.paddle_step;
    for side in Side::BOTH {
        let paddle = state.paddle_mut(side);
        let movement = input.movement(paddle.bindings);
        paddle.rect.origin.y += movement as f32 * step;
        state.clamp_paddle(side);
    }
}

fn detect_paddle_hits(state: &mut GameState, input: &InputState, events: &mut Vec<GameEvent>) {
    let angle_step = state.settings.angle_step;
    let max_angle = state.settings.max_angle;

    for (i, ball) in state.balls.iter_mut().enumerate() {
        for paddle in [&state.left, &state.right] {
            if !ball.rect.intersects(&paddle.rect) {
                continue;
            }
            let movement = input.movement(paddle.bindings);
            let deflection = deflect_off_paddle(ball, movement, angle_step, max_angle);
            log::debug!(
                "Ball {} hit {} paddle ({:?}), angle now {}",
                i,
                paddle.side().as_str(),
                deflection,
                ball.angle
            );
            events.push(GameEvent::PaddleHit {
                ball: i,
                side: paddle.side(),
                deflection,
            });
        }
    }
}

fn move_balls(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let field = state.field;

    for i in 0..state.balls.len() {
        let ball = &mut state.balls[i];
        ball.rect.origin += ball.velocity();

        if hits_wall(&ball.rect, field.height) {
            ball.angle = -ball.angle;
            events.push(GameEvent::WallBounce { ball: i });
        }

        let scorer = if ball.rect.origin.x >= field.width {
            Some(Side::Left)
        } else if ball.rect.origin.x <= -ball.rect.size.x {
            Some(Side::Right)
        } else {
            None
        };

        if let Some(side) = scorer {
            state.paddle_mut(side).score += 1;
            state.reset_ball(i);

            let (left, right) = (state.left.score, state.right.score);
            log::info!("Point to {} paddle: {} - {}", side.as_str(), left, right);
            events.push(GameEvent::Scored { side, left, right });
        }
    }
}

/// Run one scheduler-driven frame.
///
/// While running this updates the simulation and renders; while paused the
/// state is left untouched and only the current frame is rendered. The
/// returned [`Continuation`] tells the host whether to request another tick.
pub fn tick(state: &mut GameState, input: &InputState) -> Result<Frame, UnsupportedGlyphError> {
    let events = if state.is_running() {
        update(state, input)
    } else {
        Vec::new()
    };

    let commands = draw::render(state)?;

    Ok(Frame {
        commands,
        events,
        next: continuation(state),
    })
}

/// Scheduling decision for the current loop state
pub fn continuation(state: &GameState) -> Continuation {
    if state.is_running() {
        Continuation::Continue
    } else {
        Continuation::Halt
    }
}

/// Apply a key command. Returns [`Continuation::Continue`] when the host
/// should (re)start its frame loop right away.
pub fn apply_command(state: &mut GameState, command: Command) -> Continuation {
    match command {
        Command::TogglePause => {
            state.phase = match state.phase {
                LoopState::Running => LoopState::Paused,
                LoopState::Paused => LoopState::Running,
            };
            log::info!("Game {:?}", state.phase);
            continuation(state)
        }
        Command::Reset => {
            state.reset_game();
            log::info!("Game reset");
            Continuation::Halt
        }
    }
}
