//! Text widget - labels and text display

use std::any::Any;

use crate::foundation::math::{Color, Vec2, Vec4};
use crate::ui::backend::RenderError;
use crate::ui::rendering::{Brush, Font, TextMeasure};
use crate::ui::tree::{ComponentId, ComponentNode, ComponentTree};
use crate::ui::widget::{Widget, WidgetContext};

/// Single line of text
///
/// The component is resized to the measured text on every update, so its
/// box always matches what is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,

    /// Font used for measuring and drawing
    pub font: Font,

    /// Text color (RGBA)
    pub color: Color,
}

impl Label {
    /// Create a label
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self {
            text: text.into(),
            font,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }

    /// Set the text color (builder pattern)
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Insert a label component sized to its text
    pub fn create(self, tree: &mut ComponentTree, location: Vec2) -> ComponentId {
        let size = tree.measurer().measure_text(&self.text, &self.font);
        tree.insert(ComponentNode::new(location, size).with_widget(self))
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Size of the text as drawn
    pub fn measured_size(&self, measure: &dyn TextMeasure) -> Vec2 {
        measure.measure_text(&self.text, &self.font)
    }

    /// Resize `node` to the measured text, if it differs
    pub(crate) fn fit(&self, node: &mut ComponentNode, measure: &dyn TextMeasure) {
        let measured = self.measured_size(measure);
        if node.size() != measured {
            node.set_size(measured);
        }
    }
}

impl Widget for Label {
    fn on_update(&mut self, ctx: &mut WidgetContext<'_>) {
        let measured = self.measured_size(ctx.measurer());
        if let Some(node) = ctx.node_mut() {
            if node.size() != measured {
                node.set_size(measured);
            }
        }
    }

    fn draw_component(&mut self, ctx: &mut WidgetContext<'_>, brush: &mut Brush<'_>) -> Result<(), RenderError> {
        if self.text.is_empty() {
            return Ok(());
        }
        brush.draw_text(&self.text, &self.font, ctx.absolute_location(), self.color)
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
    use crate::ui::rendering::{MonospaceMeasure, RecordingTarget};

    fn tree() -> ComponentTree {
        ComponentTree::new(Rc::new(MonospaceMeasure::new(1.0)), UiConfig::default())
    }

    #[test]
    fn test_label_tracks_text_size() {
        let mut tree = tree();
        let id = Label::new("abc", Font::new("Mono", 10.0)).create(&mut tree, Vec2::zeros());
        assert_eq!(tree.node(id).unwrap().size(), Vec2::new(30.0, 10.0));

        tree.widget_mut::<Label>(id).unwrap().set_text("abcde");
        tree.update_subcomponents(id, 16.0);
        assert_eq!(tree.node(id).unwrap().size(), Vec2::new(50.0, 10.0));
    }

    #[test]
    fn test_label_draws_at_absolute_location() {
        let mut tree = tree();
        let id = Label::new("hi", Font::new("Mono", 10.0)).create(&mut tree, Vec2::new(3.0, 4.0));

        let mut target = RecordingTarget::new();
        let measure = tree.measure_handle();
        tree.draw(id, &mut Brush::bound(&mut target, measure)).unwrap();

        assert_eq!(target.texts(), vec!["hi"]);
    }
}
