//! Per-component observer lists
//!
//! Each component carries one subscription list per signal kind. Observers
//! return nothing and cannot stop propagation; they are invoked in
//! subscription order after the component's own widget hook has run.

use crate::foundation::math::Vec2;
use crate::ui::input::{Key, KeyState, MouseState};

/// Signal kinds a component can be observed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Per-frame update
    Update,
    /// Size changed
    Resize,
    /// Mouse notification
    MouseInput,
    /// Key notification
    KeyInput,
    /// Text notification
    TextInput,
}

/// Per-frame update observer
pub type UpdateObserver = Box<dyn FnMut()>;
/// Resize observer, receives the new size
pub type ResizeObserver = Box<dyn FnMut(Vec2)>;
/// Mouse observer, receives the point and the state flags
pub type MouseObserver = Box<dyn FnMut(Vec2, MouseState)>;
/// Key observer
pub type KeyObserver = Box<dyn FnMut(Key, KeyState)>;
/// Text observer, receives the inserted string
pub type TextObserver = Box<dyn FnMut(&str)>;

/// Subscription lists for one component
#[derive(Default)]
pub struct Observers {
    update: Vec<UpdateObserver>,
    resize: Vec<ResizeObserver>,
    mouse: Vec<MouseObserver>,
    key: Vec<KeyObserver>,
    text: Vec<TextObserver>,
}

impl Observers {
    /// Create empty subscription lists
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to per-frame updates
    pub fn on_update(&mut self, observer: impl FnMut() + 'static) {
        self.update.push(Box::new(observer));
    }

    /// Subscribe to size changes
    pub fn on_resize(&mut self, observer: impl FnMut(Vec2) + 'static) {
        self.resize.push(Box::new(observer));
    }

    /// Subscribe to mouse notifications
    pub fn on_mouse_input(&mut self, observer: impl FnMut(Vec2, MouseState) + 'static) {
        self.mouse.push(Box::new(observer));
    }

    /// Subscribe to key notifications
    pub fn on_key_input(&mut self, observer: impl FnMut(Key, KeyState) + 'static) {
        self.key.push(Box::new(observer));
    }

    /// Subscribe to text notifications
    pub fn on_text_input(&mut self, observer: impl FnMut(&str) + 'static) {
        self.text.push(Box::new(observer));
    }

    /// Number of observers subscribed to `event_type`
    pub fn count(&self, event_type: EventType) -> usize {
        match event_type {
            EventType::Update => self.update.len(),
            EventType::Resize => self.resize.len(),
            EventType::MouseInput => self.mouse.len(),
            EventType::KeyInput => self.key.len(),
            EventType::TextInput => self.text.len(),
        }
    }

    /// Drop every observer of `event_type`
    pub fn clear(&mut self, event_type: EventType) {
        match event_type {
            EventType::Update => self.update.clear(),
            EventType::Resize => self.resize.clear(),
            EventType::MouseInput => self.mouse.clear(),
            EventType::KeyInput => self.key.clear(),
            EventType::TextInput => self.text.clear(),
        }
    }

    pub(crate) fn fire_update(&mut self) {
        for observer in &mut self.update {
            observer();
        }
    }

    pub(crate) fn fire_resize(&mut self, size: Vec2) {
        for observer in &mut self.resize {
            observer(size);
        }
    }

    pub(crate) fn fire_mouse_input(&mut self, point: Vec2, state: MouseState) {
        for observer in &mut self.mouse {
            observer(point, state);
        }
    }

    pub(crate) fn fire_key_input(&mut self, key: Key, state: KeyState) {
        for observer in &mut self.key {
            observer(key, state);
        }
    }

    pub(crate) fn fire_text_input(&mut self, text: &str) {
        for observer in &mut self.text {
            observer(text);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("update", &self.update.len())
            .field("resize", &self.resize.len())
            .field("mouse", &self.mouse.len())
            .field("key", &self.key.len())
            .field("text", &self.text.len())
            .finish()
    }
}
