//! Text box widget - single-line editable text
//!
//! A masked box holding a [`Label`] child as its text field. Input reaches
//! the box's formatter while the box or its field holds focus; the field is
//! drawn by the box, on top of the highlight and caret.

use std::any::Any;

use crate::foundation::math::{colors, Color, Vec2};
use crate::ui::backend::RenderError;
use crate::ui::input::{Key, KeyState, MouseState};
use crate::ui::rendering::{Brush, Font};
use crate::ui::text_edit::TextEditFormatter;
use crate::ui::tree::{ComponentId, ComponentNode, ComponentTree, TreeError};
use crate::ui::widget::{Widget, WidgetContext};
use crate::ui::widgets::{Anchoring, Label};

/// Editable single-line text field
#[derive(Debug)]
pub struct TextBox {
    field: ComponentId,
    formatter: TextEditFormatter,
    last_flash_time: Option<f64>,
    caret_visible: bool,

    /// Background color (RGBA)
    pub background: Color,

    /// Selection highlight color (RGBA)
    pub highlight_color: Color,
}

impl TextBox {
    /// Create a text box and its field
    ///
    /// The box is `max_width + 4` wide and one line plus 4 pixels tall.
    pub fn create(
        tree: &mut ComponentTree,
        font: Font,
        max_width: f32,
        location: Vec2,
    ) -> Result<ComponentId, TreeError> {
        let line_height = tree.measurer().measure_text("|", &font).y;

        let field = Label::new("", font).with_color(colors::black()).create(tree, Vec2::zeros());
        if let Some(node) = tree.node_mut(field) {
            node.origin = Anchoring::LeftCenter;
            node.should_draw = false;
        }

        let text_box = Self {
            field,
            formatter: TextEditFormatter::new(),
            last_flash_time: None,
            caret_visible: false,
            background: colors::from_argb(0x7F, 0xFF, 0x00, 0x00),
            highlight_color: colors::from_argb(0x7F, 0x00, 0x00, 0xFF),
        };
        let id = tree.insert(
            ComponentNode::new(location, Vec2::new(max_width + 4.0, line_height + 4.0))
                .with_anchor(Anchoring::LeftCenter)
                .with_masked(true)
                .with_widget(text_box),
        );
        tree.add_child(id, field)?;

        log::debug!("Created text box {:?} with field {:?}", id, field);
        Ok(id)
    }

    /// Id of the text field component
    pub fn field(&self) -> ComponentId {
        self.field
    }

    /// Cursor and selection state
    pub fn formatter(&self) -> &TextEditFormatter {
        &self.formatter
    }

    /// Cursor and selection state, mutably
    pub fn formatter_mut(&mut self) -> &mut TextEditFormatter {
        &mut self.formatter
    }

    /// Whether the caret is in the visible half of its blink cycle
    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// Text of the text box `id`
    pub fn text(tree: &ComponentTree, id: ComponentId) -> Option<&str> {
        let field = tree.widget::<Self>(id)?.field;
        tree.widget::<Label>(field).map(Label::text)
    }

    /// Replace the text of the text box `id`, resetting cursor and selection
    pub fn set_text(tree: &mut ComponentTree, id: ComponentId, text: impl Into<String>) -> Result<(), TreeError> {
        let text_box = tree.widget_mut::<Self>(id).ok_or(TreeError::UnknownComponent(id))?;
        text_box.formatter.reset();
        let field = text_box.field;

        tree.with_widget_mut::<Label, _>(field, |label, node, measure| {
            label.set_text(text);
            label.fit(node, measure);
            node.request_redraw();
        })
        .ok_or(TreeError::UnknownComponent(field))
    }

    fn is_active(&self, ctx: &WidgetContext<'_>) -> bool {
        ctx.focused() || ctx.tree().node(self.field).is_some_and(ComponentNode::focused)
    }

    fn show_caret(&mut self, ctx: &mut WidgetContext<'_>) {
        self.last_flash_time = Some(ctx.time());
        self.caret_visible = true;
        ctx.request_redraw();
    }

    fn edit_field<R>(&mut self, ctx: &mut WidgetContext<'_>, edit: impl FnOnce(&mut TextEditFormatter, &mut String) -> R) -> Option<R> {
        let formatter = &mut self.formatter;
        ctx.tree_mut().with_widget_mut::<Label, _>(self.field, |label, node, measure| {
            let result = edit(formatter, label.text_mut());
            label.fit(node, measure);
            node.request_redraw();
            result
        })
    }
}

impl Widget for TextBox {
    fn on_update(&mut self, ctx: &mut WidgetContext<'_>) {
        if !self.is_active(ctx) {
            self.last_flash_time = None;
            return;
        }

        let time = ctx.time();
        let last_flash = self.last_flash_time;
        match last_flash {
            None => self.show_caret(ctx),
            Some(last) if time - last > ctx.config().caret_blink_interval_ms => {
                self.last_flash_time = Some(time);
                self.caret_visible = !self.caret_visible;
                ctx.request_redraw();
            }
            Some(_) => {}
        }
    }

    fn on_mouse_input(&mut self, ctx: &mut WidgetContext<'_>, point: Vec2, state: MouseState) {
        if !state.contains(MouseState::LEFT_DOWN) || !self.is_active(ctx) {
            return;
        }

        let tree = ctx.tree();
        let (Some(field_pos), Some(field_node), Some(label)) = (
            tree.absolute_location(self.field),
            tree.node(self.field),
            tree.widget::<Label>(self.field),
        ) else {
            log::warn!("Text box {:?} lost its field {:?}", ctx.id(), self.field);
            return;
        };

        let relative_x = point.x - field_pos.x;
        let width = field_node.size().x;
        if self.formatter.shift_held() {
            self.formatter.extend_highlight_to(label.text(), &label.font, tree.measurer(), relative_x, width);
        } else {
            self.formatter.place_cursor(label.text(), &label.font, tree.measurer(), relative_x, width);
        }
        self.show_caret(ctx);
    }

    fn on_key_input(&mut self, ctx: &mut WidgetContext<'_>, key: Key, state: KeyState) {
        if !self.is_active(ctx) {
            return;
        }

        self.formatter.on_key(key, state);
        if state.is_down() {
            let changed = self.edit_field(ctx, |formatter, text| formatter.handle_key_press(text, key));
            if changed == Some(true) {
                self.show_caret(ctx);
            }
        }
    }

    fn on_text_input(&mut self, ctx: &mut WidgetContext<'_>, text: &str) {
        let printable = text.chars().next().is_some_and(|c| !c.is_control());
        if !printable || !self.is_active(ctx) {
            return;
        }

        if self.edit_field(ctx, |formatter, field| formatter.insert_text(field, text)).is_some() {
            self.show_caret(ctx);
        }
    }

    fn pre_draw_component(&mut self, ctx: &mut WidgetContext<'_>, _brush: &mut Brush<'_>) -> Result<(), RenderError> {
        let depth = ctx.node().map_or(0.0, |node| node.component_depth);
        let children = ctx.tree().children(ctx.id()).to_vec();
        for child in children {
            if let Some(node) = ctx.tree_mut().node_mut(child) {
                node.component_depth = depth + 0.01;
            }
        }
        Ok(())
    }

    fn draw_component(&mut self, ctx: &mut WidgetContext<'_>, brush: &mut Brush<'_>) -> Result<(), RenderError> {
        let bounds = ctx.bounds();
        brush.draw_rectangle(bounds, true, self.background)?;

        let tree = ctx.tree();
        let (Some(field_pos), Some(field_node), Some(label)) = (
            tree.absolute_location(self.field),
            tree.node(self.field),
            tree.widget::<Label>(self.field),
        ) else {
            return Ok(());
        };

        brush.push_clip(bounds.pos, bounds.size)?;

        let field_height = field_node.size().y;
        if let Some(highlight) = self.formatter.highlight_rect(label.text(), &label.font, tree.measurer(), field_height) {
            let highlight = highlight.translated(field_pos);
            brush.draw_rectangle(highlight, true, self.highlight_color)?;
        }

        if self.caret_visible && self.is_active(ctx) {
            let offset = self.formatter.cursor_offset(label.text(), &label.font, tree.measurer());
            let x = (field_pos.x + offset).round() + 0.5;
            let top = Vec2::new(x, bounds.pos.y + 1.0);
            let bottom = Vec2::new(x, bounds.pos.y + bounds.size.y - 1.0);
            brush.draw_line(top, bottom, label.color, 1.0)?;
        }

        if !label.text().is_empty() {
            brush.draw_text(label.text(), &label.font, field_pos, label.color)?;
        }

        brush.pop_clip()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
