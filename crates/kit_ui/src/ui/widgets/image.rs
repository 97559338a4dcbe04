//! Image widget - draws a backend image handle into its box

use std::any::Any;

use crate::ui::backend::{Image, RenderError};
use crate::ui::rendering::Brush;
use crate::ui::widget::{Widget, WidgetContext};

/// Displays an image
///
/// A zero-size component draws the image at its natural size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageView {
    /// Image handle to draw
    pub image: Image,
}

impl ImageView {
    /// Create an image view
    pub fn new(image: Image) -> Self {
        Self { image }
    }
}

impl Widget for ImageView {
    fn draw_component(&mut self, ctx: &mut WidgetContext<'_>, brush: &mut Brush<'_>) -> Result<(), RenderError> {
        brush.draw_image(&self.image, ctx.bounds())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use crate::core::UiConfig;
    use crate::foundation::math::{Rect, Vec2};
    use crate::ui::rendering::{DrawCommand, MonospaceMeasure, RecordingTarget};
    use crate::ui::tree::{ComponentNode, ComponentTree};

    #[test]
    fn test_zero_size_uses_natural_size() {
        let mut tree = ComponentTree::new(Rc::new(MonospaceMeasure::default()), UiConfig::default());
        let image = Image { id: 1, size: Vec2::new(8.0, 8.0) };
        let sized = tree.insert(ComponentNode::new(Vec2::zeros(), Vec2::new(100.0, 100.0)));
        let natural = tree.insert(
            ComponentNode::new(Vec2::new(4.0, 4.0), Vec2::zeros()).with_widget(ImageView::new(image)),
        );
        tree.add_child(sized, natural).unwrap();

        let mut target = RecordingTarget::new();
        let measure = tree.measure_handle();
        tree.draw(sized, &mut Brush::bound(&mut target, measure)).unwrap();

        assert_eq!(target.commands(), &[DrawCommand::Image {
            image,
            rect: Rect::from_xywh(4.0, 4.0, 8.0, 8.0),
        }]);
    }
}
