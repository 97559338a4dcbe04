//! # Kit UI
//!
//! A small retained-mode GUI toolkit.
//!
//! ## Features
//!
//! - **Component Tree**: Arena-backed forest with cycle-checked re-parenting
//! - **Anchoring Layout**: Children positioned from anchor/origin reference points
//! - **Input Dispatch**: Post-order update and input traversals with hit-test focus
//! - **Text Editing**: Cursor, selection and caret handling for text boxes
//! - **Backend Agnostic**: Drawing through a `RenderTarget` trait and a `Brush`
//!
//! ## Quick Start
//!
//! ```rust
//! use kit_ui::prelude::*;
//!
//! fn main() -> Result<(), KitError> {
//!     let mut ui = UiManager::new(UiConfig::default());
//!     let font = ui.config().default_font.clone();
//!     let text_box = TextBox::create(ui.tree_mut(), font, 200.0, Vec2::new(10.0, 0.0))?;
//!     let root = ui.root();
//!     ui.tree_mut().add_child(root, text_box)?;
//!
//!     ui.push_event(InputEvent::Mouse { point: Vec2::new(12.0, 5.0), state: MouseState::LEFT_DOWN });
//!     ui.push_event(InputEvent::Text("hello".to_string()));
//!     ui.frame(0.0);
//!
//!     let mut target = RecordingTarget::new();
//!     ui.render(&mut target)?;
//!     assert_eq!(TextBox::text(ui.tree(), text_box), Some("hello"));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod config;
pub mod events;
pub mod foundation;
pub mod ui;

mod error;

pub use error::KitError;

/// Common imports for toolkit users
pub mod prelude {
    pub use crate::{
        KitError,
        config::{Config, ConfigError},
        core::UiConfig,
        events::{EventType, Observers},
        foundation::math::{colors, Color, Rect, Vec2},
        ui::{
            Anchoring, Brush, Button, ButtonState, ComponentId, ComponentNode, ComponentTree,
            CursorLocation, DrawCommand, Font, Image, ImageView, InputEvent, Key, KeyState,
            Label, MouseButton, MouseState, Panel, RecordingTarget, RenderError, RenderTarget,
            TextBox, TextEditFormatter, TextMeasure, TreeError, UiManager, Widget, WidgetContext,
            CURSOR_END,
        },
    };
}
