//! Component tree
//!
//! Components live in an arena owned by [`ComponentTree`]. Each node keeps an
//! ordered list of child ids and a lookup-only parent id; a child belongs to
//! exactly one parent's list at a time. Every structural mutation walks the
//! ancestor chain first, so a node can never become its own ancestor.
//!
//! Update and input traversals are post-order: all descendants of a node are
//! visited before the node itself, siblings in child-list order. The tree is
//! single-threaded and must not be mutated structurally while a traversal is
//! running.

use std::rc::Rc;

use slotmap::SlotMap;
use thiserror::Error;

use crate::core::UiConfig;
use crate::events::Observers;
use crate::foundation::math::{colors, Rect, Vec2};
use crate::ui::backend::RenderError;
use crate::ui::input::{Key, KeyState, MouseState};
use crate::ui::rendering::{Brush, TextMeasure};
use crate::ui::widget::{Widget, WidgetContext};
use crate::ui::widgets::{AnchorLayout, Anchoring};

slotmap::new_key_type! {
    /// Stable handle to a component in a [`ComponentTree`]
    pub struct ComponentId;
}

/// Structural errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The mutation would make a component its own ancestor
    #[error("Component {child:?} cannot be placed under {parent:?}: it would become its own ancestor")]
    WouldCreateCycle {
        /// Component being moved
        child: ComponentId,
        /// Requested parent
        parent: ComponentId,
    },

    /// The id does not refer to a component in this tree
    #[error("Unknown component {0:?}")]
    UnknownComponent(ComponentId),
}

/// A positioned, sized, anchor-relative component
pub struct ComponentNode {
    children: Vec<ComponentId>,
    parent: Option<ComponentId>,

    /// Offset from the anchor point established by the parent
    pub location: Vec2,
    size: Vec2,

    /// Point on this box that children position relative to
    pub anchor: Anchoring,
    /// Point on this box placed on the parent's anchor
    pub origin: Anchoring,
    /// Origin point used when `origin` is [`Anchoring::Custom`]
    pub custom_origin: Vec2,
    /// Anchor point used when `anchor` is [`Anchoring::Custom`]
    pub custom_anchor: Vec2,

    focused: bool,
    /// Clip descendants' drawing to this box
    pub masked: bool,
    /// Whether the generic draw pass draws this component
    ///
    /// Components drawn by their owner (like the field inside a text box)
    /// set this to `false`. Children are unaffected.
    pub should_draw: bool,
    redraw: bool,
    /// Draw ordering key, lower draws first
    pub component_depth: f32,
    debug_key_pressed: bool,
    time: f64,

    observers: Observers,
    widget: Option<Box<dyn Widget>>,
}

impl ComponentNode {
    /// Create a plain component
    pub fn new(location: Vec2, size: Vec2) -> Self {
        Self {
            children: Vec::new(),
            parent: None,
            location,
            size,
            anchor: Anchoring::TopLeft,
            origin: Anchoring::TopLeft,
            custom_origin: Vec2::zeros(),
            custom_anchor: Vec2::zeros(),
            focused: false,
            masked: false,
            should_draw: true,
            redraw: true,
            component_depth: 0.0,
            debug_key_pressed: false,
            time: 0.0,
            observers: Observers::new(),
            widget: None,
        }
    }

    /// Set the anchor (builder pattern)
    pub fn with_anchor(mut self, anchor: Anchoring) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the origin (builder pattern)
    pub fn with_origin(mut self, origin: Anchoring) -> Self {
        self.origin = origin;
        self
    }

    /// Use a custom anchor point
    pub fn with_custom_anchor(mut self, point: Vec2) -> Self {
        self.anchor = Anchoring::Custom;
        self.custom_anchor = point;
        self
    }

    /// Use a custom origin point
    pub fn with_custom_origin(mut self, point: Vec2) -> Self {
        self.origin = Anchoring::Custom;
        self.custom_origin = point;
        self
    }

    /// Clip descendants to this box
    pub fn with_masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Include or exclude this component from the generic draw pass
    pub fn with_should_draw(mut self, should_draw: bool) -> Self {
        self.should_draw = should_draw;
        self
    }

    /// Set the draw ordering key
    pub fn with_depth(mut self, depth: f32) -> Self {
        self.component_depth = depth;
        self
    }

    /// Attach widget behaviour
    pub fn with_widget(mut self, widget: impl Widget) -> Self {
        self.widget = Some(Box::new(widget));
        self
    }

    /// Child ids in order
    pub fn children(&self) -> &[ComponentId] {
        &self.children
    }

    /// Parent id, if any
    pub fn parent(&self) -> Option<ComponentId> {
        self.parent
    }

    /// Width and height
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Change the size, notifying resize observers
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.redraw = true;
        self.observers.fire_resize(size);
    }

    /// Result of the last hit test
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Whether this component changed since the last draw
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Mark this component for redraw
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Whether the debug key is currently held
    pub fn debug_key_pressed(&self) -> bool {
        self.debug_key_pressed
    }

    /// Frame time of the last update traversal
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Observer subscription lists
    pub fn observers(&self) -> &Observers {
        &self.observers
    }

    /// Observer subscription lists, for subscribing
    pub fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    /// Whether a widget is attached
    ///
    /// `false` while the widget's own hook is running.
    pub fn has_widget(&self) -> bool {
        self.widget.is_some()
    }
}

impl std::fmt::Debug for ComponentNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentNode")
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("location", &self.location)
            .field("size", &self.size)
            .field("anchor", &self.anchor)
            .field("origin", &self.origin)
            .field("focused", &self.focused)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

/// Iterator over a component's ancestors, nearest first
pub struct Ancestors<'a> {
    tree: &'a ComponentTree,
    next: Option<ComponentId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ComponentId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.nodes.get(current).and_then(|node| node.parent);
        Some(current)
    }
}

/// Arena of components forming a forest
pub struct ComponentTree {
    nodes: SlotMap<ComponentId, ComponentNode>,
    measure: Rc<dyn TextMeasure>,
    config: UiConfig,
}

impl ComponentTree {
    /// Create an empty tree
    pub fn new(measure: Rc<dyn TextMeasure>, config: UiConfig) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            measure,
            config,
        }
    }

    /// Add a detached component and return its id
    pub fn insert(&mut self, node: ComponentNode) -> ComponentId {
        let id = self.nodes.insert(node);
        log::trace!("Inserted component {:?}", id);
        id
    }

    /// Number of components in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` refers to a live component
    pub fn contains(&self, id: ComponentId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get a component
    pub fn node(&self, id: ComponentId) -> Option<&ComponentNode> {
        self.nodes.get(id)
    }

    /// Get a component mutably
    pub fn node_mut(&mut self, id: ComponentId) -> Option<&mut ComponentNode> {
        self.nodes.get_mut(id)
    }

    /// Parent of a component
    pub fn parent(&self, id: ComponentId) -> Option<ComponentId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Children of a component, empty for unknown ids
    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        self.nodes.get(id).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    /// Ancestors of a component, nearest first, excluding the component
    pub fn ancestors(&self, id: ComponentId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Topmost ancestor of a component (the component itself for roots)
    pub fn root_of(&self, id: ComponentId) -> ComponentId {
        self.ancestors(id).last().unwrap_or(id)
    }

    /// Text measurer shared with widgets
    pub fn measurer(&self) -> &dyn TextMeasure {
        &*self.measure
    }

    /// Shared handle to the text measurer
    pub fn measure_handle(&self) -> Rc<dyn TextMeasure> {
        Rc::clone(&self.measure)
    }

    /// Toolkit configuration
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Toolkit configuration, mutably
    pub fn config_mut(&mut self) -> &mut UiConfig {
        &mut self.config
    }

    // ----------------------------------------------------------------------
    // Structure
    // ----------------------------------------------------------------------

    fn check(&self, id: ComponentId) -> Result<(), TreeError> {
        if self.nodes.contains_key(id) {
            Ok(())
        } else {
            Err(TreeError::UnknownComponent(id))
        }
    }

    /// Whether `child` may be placed under `parent` without creating a cycle
    ///
    /// Walks the whole ancestor chain of `parent`; `child` must appear
    /// nowhere on it, and must not be `parent` itself.
    pub fn is_valid_child(&self, parent: ComponentId, child: ComponentId) -> bool {
        if parent == child {
            return false;
        }
        !self.ancestors(parent).any(|ancestor| ancestor == child)
    }

    /// Append `child` to `parent`'s children
    ///
    /// A child already attached elsewhere is moved. On error nothing changes.
    pub fn add_child(&mut self, parent: ComponentId, child: ComponentId) -> Result<(), TreeError> {
        self.set_parent(child, parent)
    }

    /// Re-parent `child` under `new_parent`
    ///
    /// The child is unlinked from its previous parent's list and appended to
    /// `new_parent`'s list. Re-parenting under the current parent is a no-op.
    pub fn set_parent(&mut self, child: ComponentId, new_parent: ComponentId) -> Result<(), TreeError> {
        self.check(child)?;
        self.check(new_parent)?;

        if !self.is_valid_child(new_parent, child) {
            log::warn!("Rejected parenting {:?} under {:?}: cycle", child, new_parent);
            return Err(TreeError::WouldCreateCycle { child, parent: new_parent });
        }

        if self.parent(child) == Some(new_parent) {
            return Ok(());
        }

        self.unlink(child);
        if let Some(parent) = self.nodes.get_mut(new_parent) {
            parent.children.push(child);
            parent.redraw = true;
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(new_parent);
            node.redraw = true;
        }
        log::debug!("Component {:?} attached to {:?}", child, new_parent);
        Ok(())
    }

    fn unlink(&mut self, child: ComponentId) {
        let Some(old_parent) = self.parent(child) else {
            return;
        };
        if let Some(parent) = self.nodes.get_mut(old_parent) {
            parent.children.retain(|&id| id != child);
            parent.redraw = true;
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }
    }

    /// Detach a component from its parent, making it a root
    pub fn detach(&mut self, id: ComponentId) -> Result<(), TreeError> {
        self.check(id)?;
        self.unlink(id);
        Ok(())
    }

    /// Remove a component and its whole subtree
    ///
    /// Returns the number of components removed.
    pub fn remove(&mut self, id: ComponentId) -> Result<usize, TreeError> {
        self.check(id)?;
        self.unlink(id);

        let subtree = self.subtree(id);
        for &member in &subtree {
            self.nodes.remove(member);
        }
        log::debug!("Removed {} component(s) rooted at {:?}", subtree.len(), id);
        Ok(subtree.len())
    }

    /// Ids of a component and all its descendants, pre-order
    pub fn subtree(&self, id: ComponentId) -> Vec<ComponentId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            out.push(current);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    // ----------------------------------------------------------------------
    // Geometry
    // ----------------------------------------------------------------------

    /// Offset of a component from its parent's top-left corner, excluding
    /// its location; zero for roots
    pub fn offset(&self, id: ComponentId) -> Option<Vec2> {
        let node = self.nodes.get(id)?;
        let Some(parent) = node.parent.and_then(|p| self.nodes.get(p)) else {
            return Some(Vec2::zeros());
        };

        Some(AnchorLayout::resolve_offset(
            node.origin,
            node.size,
            parent.anchor,
            parent.size,
            node.custom_origin,
            parent.custom_anchor,
        ))
    }

    /// Location relative to the parent's top-left corner
    pub fn location(&self, id: ComponentId) -> Option<Vec2> {
        let node = self.nodes.get(id)?;
        Some(node.location + self.offset(id)?)
    }

    /// Absolute location, summed along the ancestor chain
    ///
    /// Recomputed on every call; any ancestor's size or anchor may have
    /// changed since the last one.
    pub fn absolute_location(&self, id: ComponentId) -> Option<Vec2> {
        let mut total = self.location(id)?;
        for ancestor in self.ancestors(id) {
            total += self.location(ancestor)?;
        }
        Some(total)
    }

    /// Absolute bounds of a component
    pub fn bounds(&self, id: ComponentId) -> Option<Rect> {
        let size = self.nodes.get(id)?.size;
        Some(Rect::new(self.absolute_location(id)?, size))
    }

    /// Resize a component, notifying its resize observers
    pub fn set_size(&mut self, id: ComponentId, size: Vec2) -> Result<(), TreeError> {
        let node = self.nodes.get_mut(id).ok_or(TreeError::UnknownComponent(id))?;
        node.set_size(size);
        Ok(())
    }

    // ----------------------------------------------------------------------
    // Widgets
    // ----------------------------------------------------------------------

    /// Borrow a component's widget as its concrete type
    pub fn widget<W: Widget>(&self, id: ComponentId) -> Option<&W> {
        self.nodes.get(id)?.widget.as_ref()?.as_any().downcast_ref::<W>()
    }

    /// Mutably borrow a component's widget as its concrete type
    pub fn widget_mut<W: Widget>(&mut self, id: ComponentId) -> Option<&mut W> {
        self.nodes.get_mut(id)?.widget.as_mut()?.as_any_mut().downcast_mut::<W>()
    }

    /// Run `f` with a component's widget, its node and the text measurer
    pub fn with_widget_mut<W: Widget, R>(
        &mut self,
        id: ComponentId,
        f: impl FnOnce(&mut W, &mut ComponentNode, &dyn TextMeasure) -> R,
    ) -> Option<R> {
        let measure = &*self.measure;
        let node = self.nodes.get_mut(id)?;
        let mut widget = node.widget.take()?;
        let result = widget.as_any_mut().downcast_mut::<W>().map(|w| f(w, node, measure));
        node.widget = Some(widget);
        result
    }

    /// Run a widget hook with the widget detached from its node
    fn run_hook<R>(
        &mut self,
        id: ComponentId,
        fallback: R,
        hook: impl FnOnce(&mut dyn Widget, &mut WidgetContext<'_>) -> R,
    ) -> R {
        let Some(mut widget) = self.nodes.get_mut(id).and_then(|node| node.widget.take()) else {
            return fallback;
        };

        let result = {
            let mut ctx = WidgetContext::new(self, id);
            hook(widget.as_mut(), &mut ctx)
        };

        match self.nodes.get_mut(id) {
            Some(node) => node.widget = Some(widget),
            None => log::warn!("Component {:?} removed during its own hook", id),
        }
        result
    }

    fn child_list(&self, id: ComponentId) -> Option<Vec<ComponentId>> {
        self.nodes.get(id).map(|node| node.children.clone())
    }

    // ----------------------------------------------------------------------
    // Traversals
    // ----------------------------------------------------------------------

    /// Post-order update traversal
    ///
    /// Children update first, then this component stores `current_time`,
    /// runs its widget's `on_update`, and fires its update observers.
    pub fn update_subcomponents(&mut self, id: ComponentId, current_time: f64) {
        let Some(children) = self.child_list(id) else {
            return;
        };
        for child in children {
            self.update_subcomponents(child, current_time);
        }

        if let Some(node) = self.nodes.get_mut(id) {
            node.time = current_time;
        }
        self.run_hook(id, (), |widget, ctx| widget.on_update(ctx));
        if let Some(node) = self.nodes.get_mut(id) {
            node.observers.fire_update();
        }
    }

    /// Post-order mouse notification with hit-test focus
    ///
    /// Every component re-evaluates focus independently on any notification
    /// carrying a button press: it is focused iff the point lies inside its
    /// absolute box and the press is a left-button press. Overlapping
    /// components can therefore be focused at the same time. Moves and
    /// releases leave focus unchanged.
    pub fn notify_mouse_input(&mut self, id: ComponentId, point: Vec2, state: MouseState) {
        let Some(children) = self.child_list(id) else {
            return;
        };
        for child in children {
            self.notify_mouse_input(child, point, state);
        }

        if state.is_press() {
            let hit = self.bounds(id).is_some_and(|bounds| bounds.contains(point));
            if let Some(node) = self.nodes.get_mut(id) {
                let focused = hit && state.contains(MouseState::LEFT_DOWN);
                if node.focused != focused {
                    node.focused = focused;
                    node.redraw = true;
                }
            }
        }

        self.run_hook(id, (), |widget, ctx| widget.on_mouse_input(ctx, point, state));
        if let Some(node) = self.nodes.get_mut(id) {
            node.observers.fire_mouse_input(point, state);
        }
    }

    /// Post-order key notification
    pub fn notify_key_input(&mut self, id: ComponentId, key: Key, state: KeyState) {
        let Some(children) = self.child_list(id) else {
            return;
        };
        for child in children {
            self.notify_key_input(child, key, state);
        }

        if self.config.debug_keys_enabled && key == self.config.debug_key {
            if let Some(node) = self.nodes.get_mut(id) {
                let pressed = match state {
                    KeyState::Press => true,
                    KeyState::Release => false,
                    KeyState::Hold => node.debug_key_pressed,
                };
                if node.debug_key_pressed != pressed {
                    node.debug_key_pressed = pressed;
                    node.redraw = true;
                }
            }
        }

        self.run_hook(id, (), |widget, ctx| widget.on_key_input(ctx, key, state));
        if let Some(node) = self.nodes.get_mut(id) {
            node.observers.fire_key_input(key, state);
        }
    }

    /// Post-order text notification
    pub fn notify_text_input(&mut self, id: ComponentId, text: &str) {
        let Some(children) = self.child_list(id) else {
            return;
        };
        for child in children {
            self.notify_text_input(child, text);
        }

        self.run_hook(id, (), |widget, ctx| widget.on_text_input(ctx, text));
        if let Some(node) = self.nodes.get_mut(id) {
            node.observers.fire_text_input(text);
        }
    }

    /// Whether any component in the subtree needs redrawing
    pub fn needs_redraw(&self, id: ComponentId) -> bool {
        self.subtree(id).into_iter().any(|member| self.nodes[member].redraw)
    }

    /// Ids of focused components in the subtree, pre-order
    pub fn focused_components(&self, id: ComponentId) -> Vec<ComponentId> {
        self.subtree(id).into_iter().filter(|&member| self.nodes[member].focused).collect()
    }

    /// Draw a subtree
    ///
    /// Runs `pre_draw_component` on every component (parents first), then
    /// draws every component with `should_draw` set in ascending
    /// `component_depth` order (ties keep tree order), each clipped to its
    /// masked ancestors. The first failing draw call aborts the pass after
    /// popping the clips pushed for the failing component.
    pub fn draw(&mut self, id: ComponentId, brush: &mut Brush<'_>) -> Result<(), RenderError> {
        for member in self.subtree(id) {
            self.run_hook(member, Ok(()), |widget, ctx| widget.pre_draw_component(ctx, brush))?;
        }

        let mut order: Vec<ComponentId> = self.subtree(id)
            .into_iter()
            .filter(|&member| self.nodes[member].should_draw)
            .collect();
        order.sort_by(|&a, &b| {
            self.nodes[a].component_depth
                .partial_cmp(&self.nodes[b].component_depth)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for member in order {
            let mut clips = 0;
            let drawn = self.push_ancestor_clips(member, brush, &mut clips)
                .and_then(|()| self.draw_member(member, brush));

            if let Err(err) = drawn {
                // Leave the target's clip stack as we found it
                for _ in 0..clips {
                    if let Err(pop_err) = brush.pop_clip() {
                        log::warn!("Failed to unwind clip after draw error: {}", pop_err);
                        break;
                    }
                }
                return Err(err);
            }

            for _ in 0..clips {
                brush.pop_clip()?;
            }
        }

        for member in self.subtree(id) {
            self.nodes[member].redraw = false;
        }
        Ok(())
    }

    fn draw_member(&mut self, id: ComponentId, brush: &mut Brush<'_>) -> Result<(), RenderError> {
        self.run_hook(id, Ok(()), |widget, ctx| widget.draw_component(ctx, brush))?;

        if self.nodes[id].debug_key_pressed {
            if let Some(bounds) = self.bounds(id) {
                brush.draw_rectangle(bounds, false, colors::rgba(1.0, 0.0, 0.0, 1.0))?;
            }
        }
        Ok(())
    }

    /// Push a clip per masked strict ancestor, outermost first, counting into `pushed`
    fn push_ancestor_clips(&self, id: ComponentId, brush: &mut Brush<'_>, pushed: &mut usize) -> Result<(), RenderError> {
        let mut masked: Vec<ComponentId> = self.ancestors(id)
            .filter(|&ancestor| self.nodes[ancestor].masked)
            .collect();
        masked.reverse();

        for ancestor in masked {
            if let Some(bounds) = self.bounds(ancestor) {
                brush.push_clip(bounds.pos, bounds.size)?;
                *pushed += 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::rendering::MonospaceMeasure;

    fn tree() -> ComponentTree {
        ComponentTree::new(Rc::new(MonospaceMeasure::new(1.0)), UiConfig::default())
    }

    fn plain(tree: &mut ComponentTree, x: f32, y: f32, w: f32, h: f32) -> ComponentId {
        tree.insert(ComponentNode::new(Vec2::new(x, y), Vec2::new(w, h)))
    }

    #[test]
    fn test_add_child_links_both_ways() {
        let mut tree = tree();
        let root = plain(&mut tree, 0.0, 0.0, 100.0, 100.0);
        let child = plain(&mut tree, 0.0, 0.0, 10.0, 10.0);

        tree.add_child(root, child).unwrap();

        assert_eq!(tree.children(root), &[child]);
        assert_eq!(tree.parent(child), Some(root));
    }

    #[test]
    fn test_rejects_self_parenting() {
        let mut tree = tree();
        let a = plain(&mut tree, 0.0, 0.0, 1.0, 1.0);
        assert_eq!(
            tree.add_child(a, a),
            Err(TreeError::WouldCreateCycle { child: a, parent: a })
        );
        assert!(tree.children(a).is_empty());
    }

    #[test]
    fn test_rejects_deep_cycle_without_mutation() {
        let mut tree = tree();
        let root = plain(&mut tree, 0.0, 0.0, 1.0, 1.0);
        let a = plain(&mut tree, 0.0, 0.0, 1.0, 1.0);
        let b = plain(&mut tree, 0.0, 0.0, 1.0, 1.0);
        tree.add_child(root, a).unwrap();
        tree.add_child(a, b).unwrap();

        assert!(tree.add_child(b, a).is_err());
        assert!(tree.add_child(b, root).is_err());
        assert!(tree.set_parent(root, b).is_err());

        assert_eq!(tree.children(root), &[a]);
        assert_eq!(tree.children(a), &[b]);
        assert!(tree.children(b).is_empty());
        assert_eq!(tree.parent(root), None);
    }

    #[test]
    fn test_set_parent_moves_between_lists() {
        let mut tree = tree();
        let first = plain(&mut tree, 0.0, 0.0, 1.0, 1.0);
        let second = plain(&mut tree, 0.0, 0.0, 1.0, 1.0);
        let child = plain(&mut tree, 0.0, 0.0, 1.0, 1.0);

        tree.add_child(first, child).unwrap();
        tree.set_parent(child, second).unwrap();

        assert!(tree.children(first).is_empty());
        assert_eq!(tree.children(second), &[child]);
        assert_eq!(tree.parent(child), Some(second));

        // Same parent again does not duplicate
        tree.add_child(second, child).unwrap();
        assert_eq!(tree.children(second), &[child]);
    }

    #[test]
    fn test_detach_and_remove() {
        let mut tree = tree();
        let root = plain(&mut tree, 0.0, 0.0, 1.0, 1.0);
        let a = plain(&mut tree, 0.0, 0.0, 1.0, 1.0);
        let b = plain(&mut tree, 0.0, 0.0, 1.0, 1.0);
        tree.add_child(root, a).unwrap();
        tree.add_child(a, b).unwrap();

        tree.detach(a).unwrap();
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.parent(a), None);
        assert_eq!(tree.root_of(b), a);

        assert_eq!(tree.remove(a), Ok(2));
        assert!(!tree.contains(a));
        assert!(!tree.contains(b));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.remove(a), Err(TreeError::UnknownComponent(a)));
    }

    #[test]
    fn test_root_absolute_equals_location() {
        let mut tree = tree();
        let root = plain(&mut tree, 12.0, 34.0, 100.0, 100.0);
        assert_eq!(tree.absolute_location(root), tree.location(root));
        assert_eq!(tree.location(root), Some(Vec2::new(12.0, 34.0)));
    }

    #[test]
    fn test_center_child_offset() {
        let mut tree = tree();
        let a = tree.insert(
            ComponentNode::new(Vec2::zeros(), Vec2::new(100.0, 50.0)).with_anchor(Anchoring::Center),
        );
        let b = tree.insert(
            ComponentNode::new(Vec2::zeros(), Vec2::new(10.0, 10.0)).with_origin(Anchoring::Center),
        );
        tree.add_child(a, b).unwrap();

        assert_eq!(tree.offset(b), Some(Vec2::new(45.0, 20.0)));
        assert_eq!(tree.location(b), Some(Vec2::new(45.0, 20.0)));
    }

    #[test]
    fn test_absolute_location_follows_ancestor_changes() {
        let mut tree = tree();
        let root = plain(&mut tree, 10.0, 10.0, 200.0, 200.0);
        let mid = tree.insert(
            ComponentNode::new(Vec2::new(5.0, 5.0), Vec2::new(50.0, 50.0)).with_anchor(Anchoring::BottomRight),
        );
        let leaf = plain(&mut tree, 1.0, 2.0, 4.0, 4.0);
        tree.add_child(root, mid).unwrap();
        tree.add_child(mid, leaf).unwrap();

        // root (10,10) + mid (5,5) + mid's bottom-right (50,50) + leaf (1,2)
        assert_eq!(tree.absolute_location(leaf), Some(Vec2::new(66.0, 67.0)));

        tree.set_size(mid, Vec2::new(20.0, 20.0)).unwrap();
        assert_eq!(tree.absolute_location(leaf), Some(Vec2::new(36.0, 37.0)));
    }

    #[test]
    fn test_resize_notifies_observers() {
        use std::cell::RefCell;

        let mut tree = tree();
        let id = plain(&mut tree, 0.0, 0.0, 1.0, 1.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        tree.node_mut(id).unwrap().observers_mut().on_resize(move |size| sink.borrow_mut().push(size));

        tree.set_size(id, Vec2::new(3.0, 4.0)).unwrap();
        assert_eq!(*seen.borrow(), vec![Vec2::new(3.0, 4.0)]);
    }

    #[test]
    fn test_click_focus_is_flat_broadcast() {
        let mut tree = tree();
        let root = plain(&mut tree, 0.0, 0.0, 100.0, 100.0);
        let overlap_a = plain(&mut tree, 10.0, 10.0, 50.0, 50.0);
        let overlap_b = plain(&mut tree, 20.0, 20.0, 50.0, 50.0);
        tree.add_child(root, overlap_a).unwrap();
        tree.add_child(root, overlap_b).unwrap();

        tree.notify_mouse_input(root, Vec2::new(30.0, 30.0), MouseState::LEFT_DOWN);
        assert!(tree.node(root).unwrap().focused());
        assert!(tree.node(overlap_a).unwrap().focused());
        assert!(tree.node(overlap_b).unwrap().focused());

        // Moves do not touch focus
        tree.notify_mouse_input(root, Vec2::new(90.0, 90.0), MouseState::MOVE);
        assert!(tree.node(overlap_a).unwrap().focused());

        // A press elsewhere clears it
        tree.notify_mouse_input(root, Vec2::new(90.0, 90.0), MouseState::LEFT_DOWN);
        assert_eq!(tree.focused_components(root), vec![root]);

        // A right click inside never focuses
        tree.notify_mouse_input(root, Vec2::new(30.0, 30.0), MouseState::RIGHT_DOWN);
        assert!(tree.focused_components(root).is_empty());
    }

    #[test]
    fn test_debug_key_toggles_flag() {
        let mut tree = ComponentTree::new(
            Rc::new(MonospaceMeasure::new(1.0)),
            UiConfig::default().with_debug_keys(true),
        );
        let root = plain(&mut tree, 0.0, 0.0, 10.0, 10.0);

        tree.notify_key_input(root, Key::LeftCtrl, KeyState::Press);
        assert!(tree.node(root).unwrap().debug_key_pressed());
        tree.notify_key_input(root, Key::LeftCtrl, KeyState::Hold);
        assert!(tree.node(root).unwrap().debug_key_pressed());
        tree.notify_key_input(root, Key::LeftCtrl, KeyState::Release);
        assert!(!tree.node(root).unwrap().debug_key_pressed());
    }

    #[test]
    fn test_debug_key_ignored_when_disabled() {
        let mut tree = ComponentTree::new(
            Rc::new(MonospaceMeasure::new(1.0)),
            UiConfig::default().with_debug_keys(false),
        );
        let root = plain(&mut tree, 0.0, 0.0, 10.0, 10.0);
        tree.notify_key_input(root, Key::LeftCtrl, KeyState::Press);
        assert!(!tree.node(root).unwrap().debug_key_pressed());
    }
}
