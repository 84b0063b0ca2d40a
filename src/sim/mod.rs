//! Deterministic simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Fixed step per tick
//! - Input arrives as an explicit [`InputState`]
//! - Stable iteration order (left paddle before right, balls by index)

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Deflection, clamp_angle, deflect_off_paddle, hits_wall};
pub use input::{Command, InputState, KeyBindings, keys};
pub use state::{Ball, GameState, LoopState, Paddle, Playfield, Side};
pub use tick::{Continuation, Frame, GameEvent, apply_command, continuation, tick, update};
