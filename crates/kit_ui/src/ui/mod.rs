//! UI System Module
//!
//! Retained-mode component tree with anchoring layout, post-order input
//! dispatch and a backend-agnostic draw pass.
//!
//! Architecture:
//! - tree: component arena, structure, geometry and traversals
//! - widget: per-variant override hooks
//! - widgets/: anchoring primitives and widget types (Panel, Label, TextBox, Button, ImageView)
//! - text_edit: cursor and selection state machine for text fields
//! - rendering/: brush, text measurement and command recording
//! - input/: input events and host input translation
//! - manager: frame driver

pub mod backend;
pub mod input;
pub mod manager;
pub mod rendering;
pub mod text_edit;
pub mod tree;
pub mod widget;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use backend::{Image, RenderError, RenderTarget};
pub use manager::UiManager;
pub use text_edit::{CursorLocation, TextEditFormatter, CURSOR_END};
pub use tree::{ComponentId, ComponentNode, ComponentTree, TreeError};
pub use widget::{Widget, WidgetContext};

// Re-export widgets
pub use widgets::{
    AnchorLayout, Anchoring, Button, ButtonState, ImageView, Label, Panel, TextBox,
};

// Re-export rendering types
pub use rendering::{Brush, DrawCommand, Font, MonospaceMeasure, RecordingTarget, TextMeasure};

// Re-export input types
pub use input::{InputEvent, InputTranslator, Key, KeyState, MouseButton, MouseState};
