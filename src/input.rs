use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true when `self` points exactly back along `other`.
    #[must_use]
    pub fn is_reverse_of(self, other: Self) -> bool {
        self == other.opposite()
    }

    /// Cell offset `(dx, dy)` for one step; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the client loop.
///
/// Letters are forwarded as [`GameInput::Char`] because the start screen
/// needs them for the player name; the loop decides what they mean.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Char(char),
    Backspace,
    Confirm,
    ToggleTheme,
    Quit,
}

/// Maps a WASD letter to a direction while playing.
#[must_use]
pub fn direction_for_char(c: char) -> Option<Direction> {
    match c.to_ascii_lowercase() {
        'w' => Some(Direction::Up),
        's' => Some(Direction::Down),
        'a' => Some(Direction::Left),
        'd' => Some(Direction::Right),
        _ => None,
    }
}

/// Translates one crossterm key event into a game input.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            .then_some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Tab => Some(GameInput::ToggleTheme),
        KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Backspace => Some(GameInput::Backspace),
        KeyCode::Char(c) => Some(GameInput::Char(c)),
        _ => None,
    }
}

/// Non-blocking keyboard reader.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for a key and returns the mapped input, if any.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{direction_for_char, map_key_event, Direction, GameInput};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reverse_relation_only_matches_opposites() {
        assert!(Direction::Left.is_reverse_of(Direction::Right));
        assert!(Direction::Up.is_reverse_of(Direction::Down));

        assert!(!Direction::Up.is_reverse_of(Direction::Left));
        assert!(!Direction::Right.is_reverse_of(Direction::Right));
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);

        assert_eq!(map_key_event(up), Some(GameInput::Direction(Direction::Up)));
        assert_eq!(
            map_key_event(right),
            Some(GameInput::Direction(Direction::Right))
        );
    }

    #[test]
    fn ctrl_c_quits_and_letters_pass_through() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let letter = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);

        assert_eq!(map_key_event(ctrl_c), Some(GameInput::Quit));
        assert_eq!(map_key_event(letter), Some(GameInput::Char('c')));
    }

    #[test]
    fn wasd_maps_case_insensitively() {
        assert_eq!(direction_for_char('w'), Some(Direction::Up));
        assert_eq!(direction_for_char('A'), Some(Direction::Left));
        assert_eq!(direction_for_char('x'), None);
    }
}
