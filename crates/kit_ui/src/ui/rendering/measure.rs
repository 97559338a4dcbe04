//! Text measurement

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

/// Font description handed to the measurer and the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font family name
    pub family: String,
    /// Size in pixels
    pub size: f32,
}

impl Font {
    /// Create a new font description
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Font metrics capability
pub trait TextMeasure {
    /// Pixel width and height of `text` rendered in `font`
    fn measure_text(&self, text: &str, font: &Font) -> Vec2;
}

/// Fixed-advance measurer
///
/// Every character is `advance * font.size` wide and lines are `font.size`
/// tall. Good enough for monospace fonts and fully deterministic, which makes
/// it the measurer of choice for headless hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    advance: f32,
}

impl MonospaceMeasure {
    /// Create a measurer with the given advance, as a fraction of font size
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl TextMeasure for MonospaceMeasure {
    #[allow(clippy::cast_precision_loss)]
    fn measure_text(&self, text: &str, font: &Font) -> Vec2 {
        let count = text.chars().count() as f32;
        Vec2::new(count * self.advance * font.size, font.size)
    }
}
