//! UI widgets module
//!
//! Contains the anchoring primitives and all widget types (panels, labels,
//! text boxes, buttons, images).

pub mod core;
pub mod layout;
pub mod panel;
pub mod text;
pub mod text_box;
pub mod button;
pub mod image;

// Re-export core types
pub use self::core::Anchoring;
pub use layout::AnchorLayout;

// Re-export widget types
pub use panel::Panel;
pub use text::Label;
pub use text_box::TextBox;
pub use button::{Button, ButtonState};
pub use image::ImageView;
