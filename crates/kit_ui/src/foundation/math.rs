//! Math utilities and types
//!
//! Provides the 2D point/size arithmetic and box containment used by layout,
//! hit testing and drawing.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type, used for both points and sizes
pub type Vec2 = Vector2<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// RGBA colour with components in `0.0..=1.0`
pub type Color = Vec4;

/// Axis-aligned box defined by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    /// Create a new box from a position and a size
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Create a box from raw coordinates
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(width, height))
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Check if a point lies inside the box, edges included
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.pos.x && point.x <= max.x &&
        point.y >= self.pos.y && point.y <= max.y
    }

    /// Return a copy moved by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.pos + offset, self.size)
    }

    /// Whether the box has no area
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(Vec2::zeros(), Vec2::zeros())
    }
}

/// Colour constructors
pub mod colors {
    use super::Color;

    /// Build a colour from float components
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color::new(r, g, b, a)
    }

    /// Build a colour from 8-bit ARGB components
    pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Color {
        let unit = |c: u8| f32::from(c) / 255.0;
        Color::new(unit(r), unit(g), unit(b), unit(a))
    }

    /// Opaque black
    pub fn black() -> Color {
        rgba(0.0, 0.0, 0.0, 1.0)
    }

    /// Opaque white
    pub fn white() -> Color {
        rgba(1.0, 1.0, 1.0, 1.0)
    }
}
