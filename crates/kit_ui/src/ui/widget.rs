//! Widget override hooks
//!
//! A [`Widget`] is the per-variant behaviour attached to a component. The
//! tree calls each hook once per traversal, after the component's children
//! have been processed (update and input traversals are post-order). Every
//! hook defaults to doing nothing.

use std::any::Any;

use crate::core::UiConfig;
use crate::foundation::math::{Rect, Vec2};
use crate::ui::backend::RenderError;
use crate::ui::input::{Key, KeyState, MouseState};
use crate::ui::rendering::{Brush, TextMeasure};
use crate::ui::tree::{ComponentId, ComponentNode, ComponentTree};

/// Behaviour of a component variant
pub trait Widget: Any {
    /// Per-frame update, after all children have updated
    fn on_update(&mut self, _ctx: &mut WidgetContext<'_>) {}

    /// Mouse notification, after focus has been re-evaluated
    fn on_mouse_input(&mut self, _ctx: &mut WidgetContext<'_>, _point: Vec2, _state: MouseState) {}

    /// Key notification
    fn on_key_input(&mut self, _ctx: &mut WidgetContext<'_>, _key: Key, _state: KeyState) {}

    /// Text notification
    fn on_text_input(&mut self, _ctx: &mut WidgetContext<'_>, _text: &str) {}

    /// Called for every component before any component is drawn
    ///
    /// Parents run before their children, so this is the place to adjust
    /// children's draw order.
    fn pre_draw_component(&mut self, _ctx: &mut WidgetContext<'_>, _brush: &mut Brush<'_>) -> Result<(), RenderError> {
        Ok(())
    }

    /// Draw this component
    fn draw_component(&mut self, _ctx: &mut WidgetContext<'_>, _brush: &mut Brush<'_>) -> Result<(), RenderError> {
        Ok(())
    }

    /// Upcast for downcasting to the concrete widget
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the concrete widget
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// View of the tree handed to a widget hook
///
/// The widget itself is detached from its component for the duration of the
/// hook, so the rest of the tree (including this component's geometry and
/// its children's widgets) is freely accessible.
pub struct WidgetContext<'a> {
    tree: &'a mut ComponentTree,
    id: ComponentId,
}

impl<'a> WidgetContext<'a> {
    pub(crate) fn new(tree: &'a mut ComponentTree, id: ComponentId) -> Self {
        Self { tree, id }
    }

    /// Id of the component whose hook is running
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// The whole tree
    pub fn tree(&self) -> &ComponentTree {
        &*self.tree
    }

    /// The whole tree, mutably
    ///
    /// Structural mutation during a traversal is not supported; use this
    /// for geometry and widget state.
    pub fn tree_mut(&mut self) -> &mut ComponentTree {
        &mut *self.tree
    }

    /// This component's node
    pub fn node(&self) -> Option<&ComponentNode> {
        self.tree.node(self.id)
    }

    /// This component's node, mutably
    pub fn node_mut(&mut self) -> Option<&mut ComponentNode> {
        self.tree.node_mut(self.id)
    }

    /// Absolute position of this component
    pub fn absolute_location(&self) -> Vec2 {
        self.tree.absolute_location(self.id).unwrap_or_else(Vec2::zeros)
    }

    /// Size of this component
    pub fn size(&self) -> Vec2 {
        self.node().map_or_else(Vec2::zeros, ComponentNode::size)
    }

    /// Absolute bounds of this component
    pub fn bounds(&self) -> Rect {
        Rect::new(self.absolute_location(), self.size())
    }

    /// Whether the last hit test focused this component
    pub fn focused(&self) -> bool {
        self.node().is_some_and(ComponentNode::focused)
    }

    /// Frame time of the last update traversal, in milliseconds
    pub fn time(&self) -> f64 {
        self.node().map_or(0.0, ComponentNode::time)
    }

    /// Mark this component for redraw
    pub fn request_redraw(&mut self) {
        if let Some(node) = self.node_mut() {
            node.request_redraw();
        }
    }

    /// Text measurer shared by the tree
    pub fn measurer(&self) -> &dyn TextMeasure {
        self.tree.measurer()
    }

    /// Toolkit configuration
    pub fn config(&self) -> &UiConfig {
        self.tree.config()
    }
}
