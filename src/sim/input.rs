//! Keyboard input model
//!
//! Platform key strings are mapped to a symbolic [`Key`]. Movement keys are
//! level-triggered through [`HeldKeys`]; everything else is edge-triggered
//! on key-down.

/// Symbolic key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Lowercased letter
    Char(char),
    /// Digit 0-9
    Digit(u8),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Space,
    Enter,
    Backspace,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value. Unknown keys map to `None`.
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            " " | "Spacebar" => Some(Key::Space),
            "Enter" => Some(Key::Enter),
            "Backspace" => Some(Key::Backspace),
            _ => {
                let mut chars = key.chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return None;
                };
                if let Some(d) = c.to_digit(10) {
                    Some(Key::Digit(d as u8))
                } else if c.is_ascii_alphabetic() {
                    Some(Key::Char(c.to_ascii_lowercase()))
                } else {
                    None
                }
            }
        }
    }

    pub fn is_left(self) -> bool {
        matches!(self, Key::ArrowLeft | Key::Char('a'))
    }

    pub fn is_right(self) -> bool {
        matches!(self, Key::ArrowRight | Key::Char('d'))
    }

    pub fn is_up(self) -> bool {
        matches!(self, Key::ArrowUp | Key::Char('w'))
    }

    pub fn is_down(self) -> bool {
        matches!(self, Key::ArrowDown | Key::Char('s'))
    }

    pub fn is_confirm(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }

    pub fn is_restart(self) -> bool {
        self == Key::Char('r')
    }

    /// Keys the browser should not scroll/navigate on
    pub fn is_game_key(self) -> bool {
        matches!(
            self,
            Key::ArrowLeft
                | Key::ArrowRight
                | Key::ArrowUp
                | Key::ArrowDown
                | Key::Space
                | Key::Backspace
        )
    }
}

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Held movement keys, tracked in every mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    a: bool,
    d: bool,
    arrow_left: bool,
    arrow_right: bool,
    /// Most recently pressed direction
    last: Option<Direction>,
}

impl HeldKeys {
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Char('a') => self.a = true,
            Key::Char('d') => self.d = true,
            Key::ArrowLeft => self.arrow_left = true,
            Key::ArrowRight => self.arrow_right = true,
            _ => return,
        }
        self.last = Some(if key.is_left() {
            Direction::Left
        } else {
            Direction::Right
        });
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::Char('a') => self.a = false,
            Key::Char('d') => self.d = false,
            Key::ArrowLeft => self.arrow_left = false,
            Key::ArrowRight => self.arrow_right = false,
            _ => {}
        }
    }

    pub fn left_held(&self) -> bool {
        self.a || self.arrow_left
    }

    pub fn right_held(&self) -> bool {
        self.d || self.arrow_right
    }

    /// Direction to move this tick
    ///
    /// Only the most recently pressed direction counts, and only while it is
    /// still held. Releasing it does not fall back to the other direction.
    pub fn horizontal(&self) -> Option<Direction> {
        match self.last {
            Some(Direction::Left) if self.left_held() => Some(Direction::Left),
            Some(Direction::Right) if self.right_held() => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn any_held(&self) -> bool {
        self.left_held() || self.right_held()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dom() {
        assert_eq!(Key::from_dom("ArrowUp"), Some(Key::ArrowUp));
        assert_eq!(Key::from_dom(" "), Some(Key::Space));
        assert_eq!(Key::from_dom("A"), Some(Key::Char('a')));
        assert_eq!(Key::from_dom("7"), Some(Key::Digit(7)));
        assert_eq!(Key::from_dom("Shift"), None);
        assert_eq!(Key::from_dom("?"), None);
    }

    #[test]
    fn test_most_recent_direction_wins() {
        let mut held = HeldKeys::default();
        held.press(Key::Char('a'));
        assert_eq!(held.horizontal(), Some(Direction::Left));

        held.press(Key::ArrowRight);
        assert_eq!(held.horizontal(), Some(Direction::Right));

        // Releasing the winner stops movement even though left is still held
        held.release(Key::ArrowRight);
        assert!(held.left_held());
        assert_eq!(held.horizontal(), None);
    }

    #[test]
    fn test_either_key_keeps_direction_held() {
        let mut held = HeldKeys::default();
        held.press(Key::Char('d'));
        held.press(Key::ArrowRight);
        held.release(Key::Char('d'));
        assert_eq!(held.horizontal(), Some(Direction::Right));
    }

    #[test]
    fn test_non_movement_keys_ignored() {
        let mut held = HeldKeys::default();
        held.press(Key::Char('w'));
        held.press(Key::Space);
        assert_eq!(held, HeldKeys::default());
    }
}
