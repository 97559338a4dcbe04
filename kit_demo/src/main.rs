//! Kit UI demo
//!
//! Builds a small form (panel, text box, button) on a headless frame driver,
//! replays a scripted input session and logs every recorded draw command.
//!
//! Usage: `kit_demo [config.toml|config.ron]`

use std::cell::Cell;
use std::rc::Rc;

use kit_ui::foundation::logging;
use kit_ui::prelude::*;
use thiserror::Error;

/// Demo failures
#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Kit(#[from] KitError),

    #[error("Component {0:?} is not a text box")]
    NotATextBox(ComponentId),
}

impl From<TreeError> for DemoError {
    fn from(err: TreeError) -> Self {
        Self::Kit(err.into())
    }
}

impl From<RenderError> for DemoError {
    fn from(err: RenderError) -> Self {
        Self::Kit(err.into())
    }
}

impl From<ConfigError> for DemoError {
    fn from(err: ConfigError) -> Self {
        Self::Kit(err.into())
    }
}

struct Form {
    text_box: ComponentId,
    button: ComponentId,
    clicks: Rc<Cell<u32>>,
}

fn load_config() -> Result<UiConfig, DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => UiConfig::load_from_file(&path)?,
        None => UiConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn build_form(ui: &mut UiManager) -> Result<Form, DemoError> {
    let font = ui.config().default_font.clone();

    let panel = ui.add_to_root(
        ComponentNode::new(Vec2::zeros(), Vec2::new(320.0, 120.0))
            .with_origin(Anchoring::Center)
            .with_widget(Panel::new(colors::rgba(0.15, 0.15, 0.2, 1.0)).with_border(colors::white(), 1.0)),
    )?;
    // Centre the panel on the screen
    let root = ui.root();
    if let Some(node) = ui.tree_mut().node_mut(root) {
        node.anchor = Anchoring::Center;
    }

    let text_box = TextBox::create(ui.tree_mut(), font.clone(), 240.0, Vec2::new(16.0, 20.0))?;
    ui.tree_mut().add_child(panel, text_box)?;

    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let button = Button::new("Submit", font).with_on_click(move || {
        counter.set(counter.get() + 1);
        log::info!("Submit clicked");
    });
    let button = ui.add(
        panel,
        ComponentNode::new(Vec2::new(208.0, 76.0), Vec2::new(96.0, 28.0)).with_widget(button),
    )?;

    Ok(Form { text_box, button, clicks })
}

fn click(ui: &mut UiManager, point: Vec2) {
    ui.update_mouse_position(point.x, point.y);
    ui.update_mouse_button(MouseButton::Left, true);
    ui.update_mouse_button(MouseButton::Left, false);
}

fn run() -> Result<(), DemoError> {
    let config = load_config()?;
    logging::init_with_level(&config.log_level);
    log::info!("Starting Kit UI demo");

    let mut ui = UiManager::new(config);
    let form = build_form(&mut ui)?;
    let mut target = RecordingTarget::new();
    let mut now = 0.0;

    let field_bounds = ui.tree().bounds(form.text_box).unwrap_or_default();
    click(&mut ui, field_bounds.pos + Vec2::new(2.0, 2.0));
    ui.push_event(InputEvent::Text("hello world".to_string()));
    for key in [Key::Left, Key::Left, Key::Left, Key::Left, Key::Left] {
        ui.push_event(InputEvent::Key { key, state: KeyState::Press });
    }
    ui.push_event(InputEvent::Key { key: Key::LeftShift, state: KeyState::Press });
    ui.push_event(InputEvent::Key { key: Key::Home, state: KeyState::Press });
    ui.push_event(InputEvent::Key { key: Key::LeftShift, state: KeyState::Release });
    ui.push_event(InputEvent::Text("goodbye".to_string()));

    for _ in 0..3 {
        ui.frame(now);
        if ui.render(&mut target)? {
            log::debug!("Frame at {now} ms produced {} commands", target.commands().len());
        }
        now += 16.0;
    }

    if let Some(bounds) = ui.tree().bounds(form.button) {
        click(&mut ui, bounds.pos + bounds.size / 2.0);
    }
    ui.frame(now);
    ui.render(&mut target)?;

    let text = TextBox::text(ui.tree(), form.text_box).ok_or(DemoError::NotATextBox(form.text_box))?;
    log::info!("Text box contains {:?}, submit clicked {} time(s)", text, form.clicks.get());

    for (i, command) in target.take_commands().iter().enumerate() {
        log::info!("  Command {}: {:?}", i, command);
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("kit_demo failed: {err}");
        std::process::exit(1);
    }
}
