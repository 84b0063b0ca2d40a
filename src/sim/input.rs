//! Keyboard input state
//!
//! The host feeds raw key events in; the simulation only ever reads the
//! resulting set of held keys.

use std::collections::HashSet;

use super::state::Side;

/// DOM `keyCode` values the game reacts to
pub mod keys {
    pub const W: u32 = 87;
    pub const S: u32 = 83;
    pub const ARROW_UP: u32 = 38;
    pub const ARROW_DOWN: u32 = 40;
    pub const P: u32 = 80;
    pub const PAUSE: u32 = 19;
    pub const R: u32 = 82;
    pub const ESCAPE: u32 = 27;
}

/// Up/down key pair driving one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: u32,
    pub down: u32,
}

impl KeyBindings {
    /// Fixed bindings: W/S for the left paddle, arrow keys for the right
    pub const fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Self {
                up: keys::W,
                down: keys::S,
            },
            Side::Right => Self {
                up: keys::ARROW_UP,
                down: keys::ARROW_DOWN,
            },
        }
    }
}

/// One-shot commands triggered by releasing a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip between running and paused
    TogglePause,
    /// Zero the scores and re-centre everything
    Reset,
}

impl Command {
    pub fn from_key(code: u32) -> Option<Self> {
        match code {
            keys::P | keys::PAUSE => Some(Command::TogglePause),
            keys::R | keys::ESCAPE => Some(Command::Reset),
            _ => None,
        }
    }
}

/// Set of currently held key codes
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashSet<u32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, code: u32) {
        self.pressed.insert(code);
    }

    /// Release a key, returning the command bound to it (if any)
    pub fn key_up(&mut self, code: u32) -> Option<Command> {
        self.pressed.remove(&code);
        Command::from_key(code)
    }

    pub fn is_pressed(&self, code: u32) -> bool {
        self.pressed.contains(&code)
    }

    /// Movement intent for a paddle: -1 up, 1 down, 0 idle. Up wins when both are held.
    pub fn movement(&self, bindings: KeyBindings) -> i32 {
        if self.is_pressed(bindings.up) {
            -1
        } else if self.is_pressed(bindings.down) {
            1
        } else {
            0
        }
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement() {
        let left = KeyBindings::for_side(Side::Left);
        let mut input = InputState::new();
        assert_eq!(input.movement(left), 0);

        input.key_down(keys::S);
        assert_eq!(input.movement(left), 1);

        input.key_down(keys::W);
        assert_eq!(input.movement(left), -1, "up has priority");

        input.key_up(keys::W);
        assert_eq!(input.movement(left), 1);
    }

    #[test]
    fn test_sides_are_independent() {
        let mut input = InputState::new();
        input.key_down(keys::ARROW_DOWN);
        assert_eq!(input.movement(KeyBindings::for_side(Side::Left)), 0);
        assert_eq!(input.movement(KeyBindings::for_side(Side::Right)), 1);
    }

    #[test]
    fn test_commands_fire_on_release() {
        let mut input = InputState::new();
        input.key_down(keys::P);
        assert!(input.is_pressed(keys::P));
        assert_eq!(input.key_up(keys::P), Some(Command::TogglePause));
        assert!(!input.is_pressed(keys::P));

        assert_eq!(input.key_up(keys::PAUSE), Some(Command::TogglePause));
        assert_eq!(input.key_up(keys::R), Some(Command::Reset));
        assert_eq!(input.key_up(keys::ESCAPE), Some(Command::Reset));
        assert_eq!(input.key_up(keys::W), None);
    }

    #[test]
    fn test_release_unknown_key() {
        let mut input = InputState::new();
        input.key_down(keys::W);
        input.key_up(1234);
        assert!(input.is_pressed(keys::W));
    }
}
