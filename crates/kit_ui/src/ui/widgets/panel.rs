//! Panel widget - rectangular backgrounds with optional borders

use std::any::Any;

use crate::foundation::math::{Color, Vec2, Vec4};
use crate::ui::backend::RenderError;
use crate::ui::rendering::Brush;
use crate::ui::widget::{Widget, WidgetContext};

/// Coloured rectangle background
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Background color (RGBA)
    pub color: Color,

    /// Border color (RGBA), if border_width > 0
    pub border_color: Color,

    /// Border width in pixels
    pub border_width: f32,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            color: Vec4::new(0.2, 0.2, 0.2, 0.8),
            border_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            border_width: 0.0,
        }
    }
}

impl Panel {
    /// Panel with the given background and no border
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Add a border (builder pattern)
    pub fn with_border(mut self, color: Color, width: f32) -> Self {
        self.border_color = color;
        self.border_width = width;
        self
    }
}

impl Widget for Panel {
    fn draw_component(&mut self, ctx: &mut WidgetContext<'_>, brush: &mut Brush<'_>) -> Result<(), RenderError> {
        let bounds = ctx.bounds();
        brush.draw_rectangle(bounds, true, self.color)?;

        if self.border_width > 0.0 {
            let min = bounds.pos;
            let max = bounds.max();
            let corners = [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)];
            for (i, &from) in corners.iter().enumerate() {
                let to = corners[(i + 1) % corners.len()];
                brush.draw_line(from, to, self.border_color, self.border_width)?;
            }
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
