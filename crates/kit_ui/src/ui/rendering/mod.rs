//! UI rendering module
//!
//! Backend-agnostic drawing infrastructure: the brush widgets draw through,
//! text measurement, and a recording target for headless hosts and tests.

pub mod brush;
pub mod commands;
pub mod measure;

// Re-export commonly used types
pub use brush::Brush;
pub use commands::{DrawCommand, RecordingTarget};
pub use measure::{Font, MonospaceMeasure, TextMeasure};
