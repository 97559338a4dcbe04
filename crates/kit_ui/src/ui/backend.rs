//! UI Render Backend Trait
//!
//! Defines the interface between the component tree and a drawing backend.
//! Keeps the toolkit independent of whatever actually rasterises the output.

use thiserror::Error;

use crate::foundation::math::{Color, Rect, Vec2};
use crate::ui::rendering::Font;

/// Handle to an image owned by the backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Image {
    /// Backend-specific identifier
    pub id: u64,
    /// Natural size in pixels
    pub size: Vec2,
}

/// Backend-agnostic drawing interface
///
/// Coordinates are absolute pixels with the origin at the top-left of the
/// render target.
pub trait RenderTarget {
    /// Draw a line segment
    fn draw_line(&mut self, p1: Vec2, p2: Vec2, color: Color, thickness: f32) -> Result<(), RenderError>;

    /// Draw a filled or outlined rectangle
    fn draw_rectangle(&mut self, rect: Rect, filled: bool, color: Color) -> Result<(), RenderError>;

    /// Draw a run of text with its top-left corner at `position`
    fn draw_text(&mut self, text: &str, font: &Font, position: Vec2, color: Color) -> Result<(), RenderError>;

    /// Draw an image stretched into `rect`
    fn draw_image(&mut self, image: &Image, rect: Rect) -> Result<(), RenderError>;

    /// Restrict subsequent drawing to `rect` (intersected with the current clip)
    fn push_clip(&mut self, rect: Rect) -> Result<(), RenderError>;

    /// Undo the most recent `push_clip`
    fn pop_clip(&mut self) -> Result<(), RenderError>;
}

/// Rendering errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A drawing call was issued with no bound render target
    #[error("No render target bound to brush")]
    NoRenderTarget,

    /// `pop_clip` without a matching `push_clip`
    #[error("Clip stack underflow")]
    ClipUnderflow,

    /// Backend-specific failure
    #[error("Backend error: {0}")]
    Backend(String),
}
