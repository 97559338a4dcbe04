//! UI Input Processing
//!
//! Turns raw host notifications (cursor position, button up/down) into the
//! transition-flagged events the component tree consumes.

use super::events::{InputEvent, MouseState};
use crate::foundation::math::Vec2;

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Host input translator
///
/// Tracks the cursor position and button levels so that only real
/// transitions produce `*_DOWN`/`*_UP` flags. Repeated "pressed" reports for a
/// button that is already down are dropped.
pub struct InputTranslator {
    /// Current mouse position in screen coordinates
    mouse_x: f32,
    mouse_y: f32,

    /// Mouse button levels
    left_button_down: bool,
    right_button_down: bool,
    middle_button_down: bool,
}

impl InputTranslator {
    /// Create a new input translator
    pub fn new() -> Self {
        Self {
            mouse_x: 0.0,
            mouse_y: 0.0,
            left_button_down: false,
            right_button_down: false,
            middle_button_down: false,
        }
    }

    /// Update mouse position
    ///
    /// Returns a `MOVE` event when the position actually changed.
    pub fn update_mouse_position(&mut self, x: f32, y: f32) -> Option<InputEvent> {
        if x == self.mouse_x && y == self.mouse_y {
            return None;
        }
        self.mouse_x = x;
        self.mouse_y = y;

        Some(InputEvent::Mouse {
            point: self.mouse_position(),
            state: MouseState::MOVE,
        })
    }

    /// Update mouse button state
    ///
    /// Returns the matching down/up event, or `None` when the level did not
    /// change.
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) -> Option<InputEvent> {
        let (level, down, up) = match button {
            MouseButton::Left => (&mut self.left_button_down, MouseState::LEFT_DOWN, MouseState::LEFT_UP),
            MouseButton::Right => (&mut self.right_button_down, MouseState::RIGHT_DOWN, MouseState::RIGHT_UP),
            MouseButton::Middle => (&mut self.middle_button_down, MouseState::MIDDLE_DOWN, MouseState::MIDDLE_UP),
        };

        let was_down = *level;
        *level = pressed;

        let state = match (was_down, pressed) {
            (false, true) => down,
            (true, false) => up,
            _ => return None,
        };

        log::trace!("Mouse {:?} {:?} at ({}, {})", button, state, self.mouse_x, self.mouse_y);
        Some(InputEvent::Mouse {
            point: self.mouse_position(),
            state,
        })
    }

    /// Whether a button is currently held
    pub fn is_down(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left_button_down,
            MouseButton::Right => self.right_button_down,
            MouseButton::Middle => self.middle_button_down,
        }
    }

    /// Get current mouse position
    pub fn mouse_position(&self) -> Vec2 {
        Vec2::new(self.mouse_x, self.mouse_y)
    }
}

impl Default for InputTranslator {
    fn default() -> Self {
        Self::new()
    }
}
