//! UI Manager
//!
//! Frame driver owning the component tree, the root component, the frame
//! clock and the pending input queue.

use std::collections::VecDeque;
use std::rc::Rc;

use crate::core::UiConfig;
use crate::foundation::math::Vec2;
use crate::foundation::time::FrameClock;
use crate::ui::backend::{RenderError, RenderTarget};
use crate::ui::input::{InputEvent, InputTranslator, MouseButton};
use crate::ui::rendering::{Brush, MonospaceMeasure, TextMeasure};
use crate::ui::tree::{ComponentId, ComponentNode, ComponentTree, TreeError};

/// Central UI management system
pub struct UiManager {
    /// Component arena
    tree: ComponentTree,

    /// Root component, sized to the screen
    root: ComponentId,

    /// Frame timestamps
    clock: FrameClock,

    /// Raw mouse to event translation
    input: InputTranslator,

    /// Events waiting for the next frame
    pending: VecDeque<InputEvent>,
}

impl UiManager {
    /// Create a manager measuring text with the built-in monospace measurer
    pub fn new(config: UiConfig) -> Self {
        let measure = Rc::new(MonospaceMeasure::new(config.monospace_advance));
        Self::with_measure(config, measure)
    }

    /// Create a manager with a host-provided text measurer
    pub fn with_measure(config: UiConfig, measure: Rc<dyn TextMeasure>) -> Self {
        let (width, height) = config.screen_size;
        let mut tree = ComponentTree::new(measure, config);
        let root = tree.insert(ComponentNode::new(Vec2::zeros(), Vec2::new(width, height)));
        log::info!("UI manager created with a {}x{} root", width, height);

        Self {
            tree,
            root,
            clock: FrameClock::new(),
            input: InputTranslator::new(),
            pending: VecDeque::new(),
        }
    }

    /// Root component id
    pub fn root(&self) -> ComponentId {
        self.root
    }

    /// Component tree
    pub fn tree(&self) -> &ComponentTree {
        &self.tree
    }

    /// Component tree, mutably
    pub fn tree_mut(&mut self) -> &mut ComponentTree {
        &mut self.tree
    }

    /// Toolkit configuration
    pub fn config(&self) -> &UiConfig {
        self.tree.config()
    }

    /// Frame clock
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Insert a component under `parent`
    pub fn add(&mut self, parent: ComponentId, node: ComponentNode) -> Result<ComponentId, TreeError> {
        let id = self.tree.insert(node);
        if let Err(err) = self.tree.add_child(parent, id) {
            self.tree.remove(id)?;
            return Err(err);
        }
        Ok(id)
    }

    /// Insert a component under the root
    pub fn add_to_root(&mut self, node: ComponentNode) -> Result<ComponentId, TreeError> {
        self.add(self.root, node)
    }

    /// Resize the root component
    pub fn set_screen_size(&mut self, width: f32, height: f32) -> Result<(), TreeError> {
        self.tree.config_mut().screen_size = (width, height);
        self.tree.set_size(self.root, Vec2::new(width, height))
    }

    /// Get screen size
    pub fn screen_size(&self) -> (f32, f32) {
        self.tree.config().screen_size
    }

    /// Queue an input event for the next frame
    pub fn push_event(&mut self, event: InputEvent) {
        log::trace!("Queued {:?}", event);
        self.pending.push_back(event);
    }

    /// Number of queued events
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Update mouse position, queueing a move if it changed
    pub fn update_mouse_position(&mut self, x: f32, y: f32) {
        if let Some(event) = self.input.update_mouse_position(x, y) {
            self.push_event(event);
        }
    }

    /// Update mouse button state, queueing a transition if there was one
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if let Some(event) = self.input.update_mouse_button(button, pressed) {
            self.push_event(event);
        }
    }

    /// Run one frame at `current_time` milliseconds
    ///
    /// One update traversal, then one notification traversal per queued
    /// event in arrival order.
    pub fn frame(&mut self, current_time: f64) {
        let now = self.clock.advance_to(current_time);
        self.tree.update_subcomponents(self.root, now);

        while let Some(event) = self.pending.pop_front() {
            self.dispatch(event);
        }
    }

    /// Run one frame at the clock's current time
    pub fn tick(&mut self) {
        let now = self.clock.elapsed_ms();
        self.frame(now);
    }

    /// Deliver an event to the tree immediately
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::Mouse { point, state } => self.tree.notify_mouse_input(self.root, point, state),
            InputEvent::Key { key, state } => self.tree.notify_key_input(self.root, key, state),
            InputEvent::Text(text) => self.tree.notify_text_input(self.root, &text),
        }
    }

    /// Whether anything changed since the last render
    pub fn needs_redraw(&self) -> bool {
        self.tree.needs_redraw(self.root)
    }

    /// Draw the tree into `target` if anything changed
    ///
    /// Returns whether a draw pass ran.
    pub fn render(&mut self, target: &mut dyn RenderTarget) -> Result<bool, RenderError> {
        if !self.needs_redraw() {
            return Ok(false);
        }

        let mut brush = Brush::bound(target, self.tree.measure_handle());
        self.tree.draw(self.root, &mut brush)?;
        log::debug!("UI frame {} rendered", self.clock.frame_count());
        Ok(true)
    }
}

impl Default for UiManager {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}
