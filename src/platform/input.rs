//! Input intent adapter
//!
//! Translates device events into the two intents the simulation understands:
//! held directions and an absolute pointer target. Keyboard state is tracked
//! here so key-up of one arrow doesn't cancel the other.

use crate::sim::Game;

/// Legacy `keyCode` values
pub const KEY_CODE_LEFT: u32 = 37;
pub const KEY_CODE_RIGHT: u32 = 39;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a legacy `keyCode`
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            KEY_CODE_LEFT => Some(Key::Left),
            KEY_CODE_RIGHT => Some(Key::Right),
            _ => None,
        }
    }

    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            _ => None,
        }
    }
}

/// An abstracted input signal, independent of the originating device
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Current held directions
    Held { left: bool, right: bool },
    /// Absolute paddle centre in arena coordinates
    Pointer(f32),
}

impl Intent {
    /// Hand the intent to the simulation
    pub fn apply(self, game: &mut Game) {
        match self {
            Intent::Held { left, right } => game.set_paddle_intent(left, right),
            Intent::Pointer(x) => game.set_paddle_pointer_target(x),
        }
    }
}

/// Tracks held keys and maps pointer coordinates into the arena
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    left_held: bool,
    right_held: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A key went down. Returns the new held intent if the key matters.
    pub fn key_down(&mut self, key: Option<Key>) -> Option<Intent> {
        self.set_key(key?, true)
    }

    /// A key went up. Returns the new held intent if the key matters.
    pub fn key_up(&mut self, key: Option<Key>) -> Option<Intent> {
        self.set_key(key?, false)
    }

    fn set_key(&mut self, key: Key, held: bool) -> Option<Intent> {
        match key {
            Key::Left => self.left_held = held,
            Key::Right => self.right_held = held,
        }
        Some(self.held())
    }

    pub fn held(&self) -> Intent {
        Intent::Held {
            left: self.left_held,
            right: self.right_held,
        }
    }

    /// Pointer moved over the page.
    ///
    /// Positions outside the canvas are ignored. Inside, the canvas-relative x
    /// is scaled from displayed canvas width to arena width.
    pub fn pointer_move(
        &self,
        client_x: f32,
        canvas_left: f32,
        canvas_width: f32,
        arena_width: f32,
    ) -> Option<Intent> {
        let relative_x = client_x - canvas_left;
        if relative_x > 0.0 && relative_x < canvas_width {
            Some(Intent::Pointer(relative_x * arena_width / canvas_width))
        } else {
            None
        }
    }

    /// Drop all held keys (focus loss)
    pub fn release_all(&mut self) -> Intent {
        self.left_held = false;
        self.right_held = false;
        self.held()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_code(37), Some(Key::Left));
        assert_eq!(Key::from_code(39), Some(Key::Right));
        assert_eq!(Key::from_code(38), None);
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_name("a"), None);
    }

    #[test]
    fn test_held_keys_are_independent() {
        let mut input = InputAdapter::new();
        input.key_down(Key::from_code(37));
        let intent = input.key_down(Key::from_code(39));
        assert_eq!(intent, Some(Intent::Held { left: true, right: true }));

        let intent = input.key_up(Key::from_code(37));
        assert_eq!(intent, Some(Intent::Held { left: false, right: true }));

        assert_eq!(input.key_down(Key::from_code(32)), None);
        assert_eq!(input.release_all(), Intent::Held { left: false, right: false });
    }

    #[test]
    fn test_pointer_outside_canvas_ignored() {
        let input = InputAdapter::new();
        assert_eq!(input.pointer_move(5.0, 10.0, 480.0, 480.0), None);
        assert_eq!(input.pointer_move(10.0, 10.0, 480.0, 480.0), None);
        assert_eq!(input.pointer_move(490.0, 10.0, 480.0, 480.0), None);
        assert_eq!(
            input.pointer_move(110.0, 10.0, 480.0, 480.0),
            Some(Intent::Pointer(100.0))
        );
    }

    #[test]
    fn test_pointer_scales_to_arena() {
        let input = InputAdapter::new();
        // Canvas displayed at double size
        assert_eq!(
            input.pointer_move(480.0, 0.0, 960.0, 480.0),
            Some(Intent::Pointer(240.0))
        );
    }

    #[test]
    fn test_intents_drive_game() {
        let mut game = Game::default();
        Intent::Pointer(100.0).apply(&mut game);
        assert!((game.paddle().x - 76.0).abs() < 0.001);

        Intent::Held { left: true, right: false }.apply(&mut game);
        assert_eq!(game.intent(), crate::sim::TickInput::new(true, false));
    }
}
