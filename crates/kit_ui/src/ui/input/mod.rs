//! UI input handling module

pub mod events;
pub mod processor;

// Re-export commonly used types
pub use events::{InputEvent, Key, KeyState, MouseState};
pub use processor::{InputTranslator, MouseButton};
