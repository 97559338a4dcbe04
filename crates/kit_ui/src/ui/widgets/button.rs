//! Button widget - interactive clickable buttons

use std::any::Any;

use crate::foundation::math::{Color, Vec2, Vec4};
use crate::ui::backend::RenderError;
use crate::ui::input::MouseState;
use crate::ui::rendering::{Brush, Font};
use crate::ui::widget::{Widget, WidgetContext};

/// Button state for visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Normal resting state
    Normal,
    /// Mouse is hovering over button
    Hovered,
    /// Button is being pressed
    Pressed,
    /// Button is disabled (non-interactive)
    Disabled,
}

/// Click observer
pub type ClickObserver = Box<dyn FnMut()>;

/// Clickable button with a centred caption
pub struct Button {
    /// Button label text
    pub text: String,

    /// Caption font
    pub font: Font,

    state: ButtonState,

    /// Colors for different states
    pub normal_color: Color,
    /// Hover state color
    pub hover_color: Color,
    /// Pressed state color
    pub pressed_color: Color,
    /// Disabled state color
    pub disabled_color: Color,

    /// Text color
    pub text_color: Color,

    /// Border color
    pub border_color: Color,

    enabled: bool,
    click_observers: Vec<ClickObserver>,
}

impl Button {
    /// Create an enabled button
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self {
            text: text.into(),
            font,
            state: ButtonState::Normal,
            normal_color: Vec4::new(0.3, 0.3, 0.3, 0.9),
            hover_color: Vec4::new(0.4, 0.4, 0.5, 1.0),
            pressed_color: Vec4::new(0.5, 0.5, 0.6, 1.0),
            disabled_color: Vec4::new(0.2, 0.2, 0.2, 0.5),
            text_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            border_color: Vec4::new(0.6, 0.6, 0.6, 1.0),
            enabled: true,
            click_observers: Vec::new(),
        }
    }

    /// Subscribe to clicks (builder pattern)
    pub fn with_on_click(mut self, observer: impl FnMut() + 'static) -> Self {
        self.on_click(observer);
        self
    }

    /// Subscribe to clicks
    pub fn on_click(&mut self, observer: impl FnMut() + 'static) {
        self.click_observers.push(Box::new(observer));
    }

    /// Current visual state
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Whether the button reacts to the mouse
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the button
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.state = if enabled { ButtonState::Normal } else { ButtonState::Disabled };
    }

    /// Get the current color based on button state
    pub fn current_color(&self) -> Color {
        if !self.enabled {
            return self.disabled_color;
        }

        match self.state {
            ButtonState::Normal => self.normal_color,
            ButtonState::Hovered => self.hover_color,
            ButtonState::Pressed => self.pressed_color,
            ButtonState::Disabled => self.disabled_color,
        }
    }

    fn next_state(&self, inside: bool, state: MouseState) -> ButtonState {
        if state.contains(MouseState::LEFT_DOWN) {
            if inside { ButtonState::Pressed } else { ButtonState::Normal }
        } else if self.state == ButtonState::Pressed && !state.contains(MouseState::LEFT_UP) {
            ButtonState::Pressed
        } else if inside {
            ButtonState::Hovered
        } else {
            ButtonState::Normal
        }
    }
}

impl Widget for Button {
    fn on_mouse_input(&mut self, ctx: &mut WidgetContext<'_>, point: Vec2, state: MouseState) {
        if !self.enabled {
            return;
        }

        let inside = ctx.bounds().contains(point);
        let clicked = self.state == ButtonState::Pressed && inside && state.contains(MouseState::LEFT_UP);

        let next = self.next_state(inside, state);
        if next != self.state {
            log::trace!("Button {:?}: {:?} -> {:?}", ctx.id(), self.state, next);
            self.state = next;
            ctx.request_redraw();
        }

        if clicked {
            log::debug!("Button {:?} clicked", ctx.id());
            for observer in &mut self.click_observers {
                observer();
            }
        }
    }

    fn draw_component(&mut self, ctx: &mut WidgetContext<'_>, brush: &mut Brush<'_>) -> Result<(), RenderError> {
        let bounds = ctx.bounds();
        brush.draw_rectangle(bounds, true, self.current_color())?;
        brush.draw_rectangle(bounds, false, self.border_color)?;

        if !self.text.is_empty() {
            let text_size = brush.measure_text(&self.text, &self.font);
            let position = bounds.pos + (bounds.size - text_size) / 2.0;
            brush.draw_text(&self.text, &self.font, position, self.text_color)?;
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

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("text", &self.text)
            .field("state", &self.state)
            .field("enabled", &self.enabled)
            .field("click_observers", &self.click_observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use crate::core::UiConfig;
    use crate::ui::rendering::{MonospaceMeasure, RecordingTarget};
    use crate::ui::tree::{ComponentId, ComponentNode, ComponentTree};

    fn setup(clicks: &Rc<Cell<u32>>) -> (ComponentTree, ComponentId) {
        let mut tree = ComponentTree::new(Rc::new(MonospaceMeasure::new(1.0)), UiConfig::default());
        let counter = Rc::clone(clicks);
        let button = Button::new("OK", Font::new("Mono", 10.0))
            .with_on_click(move || counter.set(counter.get() + 1));
        let id = tree.insert(
            ComponentNode::new(Vec2::new(10.0, 10.0), Vec2::new(40.0, 20.0)).with_widget(button),
        );
        (tree, id)
    }

    fn state(tree: &ComponentTree, id: ComponentId) -> ButtonState {
        tree.widget::<Button>(id).unwrap().state()
    }

    #[test]
    fn test_hover_press_release_clicks() {
        let clicks = Rc::new(Cell::new(0));
        let (mut tree, id) = setup(&clicks);
        let inside = Vec2::new(20.0, 20.0);

        tree.notify_mouse_input(id, inside, MouseState::MOVE);
        assert_eq!(state(&tree, id), ButtonState::Hovered);

        tree.notify_mouse_input(id, inside, MouseState::LEFT_DOWN);
        assert_eq!(state(&tree, id), ButtonState::Pressed);

        tree.notify_mouse_input(id, inside, MouseState::LEFT_UP);
        assert_eq!(state(&tree, id), ButtonState::Hovered);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_release_outside_does_not_click() {
        let clicks = Rc::new(Cell::new(0));
        let (mut tree, id) = setup(&clicks);

        tree.notify_mouse_input(id, Vec2::new(20.0, 20.0), MouseState::LEFT_DOWN);
        tree.notify_mouse_input(id, Vec2::new(90.0, 90.0), MouseState::MOVE);
        assert_eq!(state(&tree, id), ButtonState::Pressed);

        tree.notify_mouse_input(id, Vec2::new(90.0, 90.0), MouseState::LEFT_UP);
        assert_eq!(state(&tree, id), ButtonState::Normal);
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_disabled_ignores_mouse() {
        let clicks = Rc::new(Cell::new(0));
        let (mut tree, id) = setup(&clicks);
        tree.widget_mut::<Button>(id).unwrap().set_enabled(false);

        tree.notify_mouse_input(id, Vec2::new(20.0, 20.0), MouseState::LEFT_DOWN);
        tree.notify_mouse_input(id, Vec2::new(20.0, 20.0), MouseState::LEFT_UP);

        assert_eq!(state(&tree, id), ButtonState::Disabled);
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_caption_is_centred() {
        let clicks = Rc::new(Cell::new(0));
        let (mut tree, id) = setup(&clicks);

        let mut target = RecordingTarget::new();
        let measure = tree.measure_handle();
        tree.draw(id, &mut Brush::bound(&mut target, measure)).unwrap();

        // 40x20 box at (10,10), 20x10 caption
        assert!(target.commands().iter().any(|c| matches!(
            c,
            crate::ui::rendering::DrawCommand::Text { position, .. } if *position == Vec2::new(20.0, 15.0)
        )));
    }
}
