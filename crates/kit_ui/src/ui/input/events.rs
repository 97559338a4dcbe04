//! Discrete input notifications delivered by the host

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

bitflags! {
    /// Mouse state change flags
    ///
    /// A single notification may carry several transitions, e.g. a move
    /// together with a button press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MouseState: u8 {
        /// Left button went down
        const LEFT_DOWN = 1 << 0;
        /// Left button went up
        const LEFT_UP = 1 << 1;
        /// Right button went down
        const RIGHT_DOWN = 1 << 2;
        /// Right button went up
        const RIGHT_UP = 1 << 3;
        /// Middle button went down
        const MIDDLE_DOWN = 1 << 4;
        /// Middle button went up
        const MIDDLE_UP = 1 << 5;
        /// Cursor moved
        const MOVE = 1 << 6;
    }
}

impl MouseState {
    /// Whether any button went down in this notification
    pub fn is_press(self) -> bool {
        self.intersects(Self::LEFT_DOWN | Self::RIGHT_DOWN | Self::MIDDLE_DOWN)
    }
}

/// Key state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyState {
    /// Key went down
    Press,
    /// Key auto-repeat while held
    Hold,
    /// Key went up
    Release,
}

impl KeyState {
    /// Press or auto-repeat
    pub fn is_down(self) -> bool {
        matches!(self, Self::Press | Self::Hold)
    }
}

/// Keys the toolkit reacts to
///
/// Printable input arrives separately as text input; `Character` exists for
/// hosts that also report the key itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// Left shift modifier
    LeftShift,
    /// Right shift modifier
    RightShift,
    /// Left control modifier
    LeftCtrl,
    /// Right control modifier
    RightCtrl,
    /// Any other key, by character
    Character(char),
}

impl Key {
    /// Either shift key
    pub fn is_shift(self) -> bool {
        matches!(self, Self::LeftShift | Self::RightShift)
    }
}

/// One discrete host input notification
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse state change at a point in absolute coordinates
    Mouse {
        /// Cursor position
        point: Vec2,
        /// Transitions carried by this notification
        state: MouseState,
    },
    /// Key state change
    Key {
        /// Key that changed
        key: Key,
        /// New state
        state: KeyState,
    },
    /// Text typed by the user
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_press() {
        assert!(MouseState::LEFT_DOWN.is_press());
        assert!((MouseState::MOVE | MouseState::RIGHT_DOWN).is_press());
        assert!(!MouseState::LEFT_UP.is_press());
        assert!(!MouseState::MOVE.is_press());
    }
}
