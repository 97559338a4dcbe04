//! Drawing capability handed to widgets during the draw pass

use std::rc::Rc;

use crate::foundation::math::{Color, Rect, Vec2};
use crate::ui::backend::{Image, RenderError, RenderTarget};
use super::measure::{Font, TextMeasure};

/// Brush wrapping an optional render target and a text measurer
///
/// Measurement works without a target; every drawing call requires one and
/// fails with [`RenderError::NoRenderTarget`] otherwise.
pub struct Brush<'t> {
    target: Option<&'t mut dyn RenderTarget>,
    measure: Rc<dyn TextMeasure>,
    line_thickness: f32,
}

impl<'t> Brush<'t> {
    /// Create a brush with no render target bound
    pub fn unbound(measure: Rc<dyn TextMeasure>) -> Self {
        Self {
            target: None,
            measure,
            line_thickness: 1.0,
        }
    }

    /// Create a brush drawing into `target`
    pub fn bound(target: &'t mut dyn RenderTarget, measure: Rc<dyn TextMeasure>) -> Self {
        let mut brush = Self::unbound(measure);
        brush.bind(target);
        brush
    }

    /// Bind a render target, replacing any previous one
    pub fn bind(&mut self, target: &'t mut dyn RenderTarget) {
        self.target = Some(target);
    }

    /// Release the render target
    pub fn unbind(&mut self) {
        self.target = None;
    }

    /// Whether a render target is bound
    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    /// Text measurer shared with the component tree
    pub fn measurer(&self) -> &dyn TextMeasure {
        &*self.measure
    }

    /// Pixel size of `text` in `font`
    pub fn measure_text(&self, text: &str, font: &Font) -> Vec2 {
        self.measure.measure_text(text, font)
    }

    fn target(&mut self) -> Result<&mut (dyn RenderTarget + 't), RenderError> {
        match self.target.as_deref_mut() {
            Some(target) => Ok(target),
            None => Err(RenderError::NoRenderTarget),
        }
    }

    /// Draw a line
    ///
    /// A non-positive `thickness` reuses the thickness of the previous line.
    pub fn draw_line(&mut self, p1: Vec2, p2: Vec2, color: Color, thickness: f32) -> Result<(), RenderError> {
        if thickness > 0.0 {
            self.line_thickness = thickness;
        }
        let thickness = self.line_thickness;
        self.target()?.draw_line(p1, p2, color, thickness)
    }

    /// Draw a filled or outlined rectangle
    pub fn draw_rectangle(&mut self, rect: Rect, filled: bool, color: Color) -> Result<(), RenderError> {
        self.target()?.draw_rectangle(rect, filled, color)
    }

    /// Draw text with its top-left corner at `position`
    pub fn draw_text(&mut self, text: &str, font: &Font, position: Vec2, color: Color) -> Result<(), RenderError> {
        self.target()?.draw_text(text, font, position, color)
    }

    /// Draw an image into `rect`
    ///
    /// A zero-area `rect` draws the image at its natural size.
    pub fn draw_image(&mut self, image: &Image, rect: Rect) -> Result<(), RenderError> {
        let rect = if rect.is_empty() {
            Rect::new(rect.pos, image.size)
        } else {
            rect
        };
        self.target()?.draw_image(image, rect)
    }

    /// Restrict drawing to the box at `pos` with `size`
    pub fn push_clip(&mut self, pos: Vec2, size: Vec2) -> Result<(), RenderError> {
        self.target()?.push_clip(Rect::new(pos, size))
    }

    /// Undo the most recent clip
    pub fn pop_clip(&mut self) -> Result<(), RenderError> {
        self.target()?.pop_clip()
    }
}
