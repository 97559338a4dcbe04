//! Text box editing driven through the frame driver

use crate::core::UiConfig;
use crate::foundation::math::{Rect, Vec2};
use crate::ui::input::{InputEvent, Key, KeyState, MouseButton};
use crate::ui::manager::UiManager;
use crate::ui::rendering::{DrawCommand, Font, RecordingTarget};
use crate::ui::text_edit::{CursorLocation, CURSOR_END};
use crate::ui::tree::{ComponentId, ComponentNode};
use crate::ui::widgets::{Panel, TextBox};

/// 10px glyphs, text box at (20,20) inside a panel at (0,0)
fn setup() -> (UiManager, ComponentId) {
    let config = UiConfig {
        monospace_advance: 1.0,
        ..UiConfig::default()
    };
    let mut ui = UiManager::new(config);
    let panel = ui.add_to_root(
        ComponentNode::new(Vec2::zeros(), Vec2::new(300.0, 100.0)).with_widget(Panel::default()),
    ).unwrap();

    let text_box = TextBox::create(ui.tree_mut(), Font::new("Mono", 10.0), 200.0, Vec2::new(20.0, 20.0)).unwrap();
    ui.tree_mut().add_child(panel, text_box).unwrap();
    (ui, text_box)
}

fn click(ui: &mut UiManager, x: f32, y: f32) {
    ui.update_mouse_position(x, y);
    ui.update_mouse_button(MouseButton::Left, true);
    ui.update_mouse_button(MouseButton::Left, false);
}

fn type_text(ui: &mut UiManager, text: &str) {
    ui.push_event(InputEvent::Text(text.to_string()));
}

fn press(ui: &mut UiManager, key: Key) {
    ui.push_event(InputEvent::Key { key, state: KeyState::Press });
    ui.push_event(InputEvent::Key { key, state: KeyState::Release });
}

fn cursor(ui: &UiManager, id: ComponentId) -> CursorLocation {
    ui.tree().widget::<TextBox>(id).unwrap().formatter().cursor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_requires_a_click_first() {
        let (mut ui, text_box) = setup();

        type_text(&mut ui, "ignored");
        ui.frame(0.0);
        assert_eq!(TextBox::text(ui.tree(), text_box), Some(""));

        click(&mut ui, 25.0, 25.0);
        type_text(&mut ui, "hello");
        ui.frame(16.0);
        assert_eq!(TextBox::text(ui.tree(), text_box), Some("hello"));
        assert_eq!(cursor(&ui, text_box), CURSOR_END);
    }

    #[test]
    fn test_click_positions_and_insertion() {
        let (mut ui, text_box) = setup();
        click(&mut ui, 25.0, 25.0);
        type_text(&mut ui, "cd");
        ui.frame(0.0);

        // Field starts at x = 20
        click(&mut ui, 20.0, 25.0);
        ui.frame(32.0);
        assert_eq!(cursor(&ui, text_box), CursorLocation::At(0));

        type_text(&mut ui, "ab");
        ui.frame(48.0);
        assert_eq!(TextBox::text(ui.tree(), text_box), Some("abcd"));
        assert_eq!(cursor(&ui, text_box), CursorLocation::At(2));

        ui.frame(64.0);
        click(&mut ui, 150.0, 25.0);
        ui.frame(80.0);
        assert_eq!(cursor(&ui, text_box), CURSOR_END);
    }

    #[test]
    fn test_shift_selection_replaced_by_typing() {
        let (mut ui, text_box) = setup();
        click(&mut ui, 25.0, 25.0);
        type_text(&mut ui, "abcd");
        press(&mut ui, Key::Home);
        press(&mut ui, Key::Right);
        ui.push_event(InputEvent::Key { key: Key::LeftShift, state: KeyState::Press });
        press(&mut ui, Key::Right);
        press(&mut ui, Key::Right);
        ui.push_event(InputEvent::Key { key: Key::LeftShift, state: KeyState::Release });
        ui.frame(0.0);

        let formatter = ui.tree().widget::<TextBox>(text_box).unwrap().formatter();
        assert_eq!(formatter.selection(4), Some((1, 3)));

        type_text(&mut ui, "X");
        ui.frame(16.0);
        assert_eq!(TextBox::text(ui.tree(), text_box), Some("aXd"));
        assert_eq!(cursor(&ui, text_box), CursorLocation::At(2));
    }

    #[test]
    fn test_highlight_drawn_under_text() {
        let (mut ui, text_box) = setup();
        click(&mut ui, 25.0, 25.0);
        type_text(&mut ui, "abcd");
        ui.frame(0.0);
        ui.tree_mut().widget_mut::<TextBox>(text_box).unwrap().formatter_mut().select("abcd", 0, 2);
        ui.tree_mut().node_mut(text_box).unwrap().request_redraw();

        let mut target = RecordingTarget::new();
        assert_eq!(ui.render(&mut target), Ok(true));

        let highlight = ui.tree().widget::<TextBox>(text_box).unwrap().highlight_color;
        let commands = target.commands();
        let highlight_at = commands.iter().position(|c| matches!(c, DrawCommand::Rectangle { color, .. } if *color == highlight));
        let text_at = commands.iter().position(|c| matches!(c, DrawCommand::Text { .. }));
        assert!(highlight_at.is_some());
        assert!(highlight_at < text_at);

        // Spans the selected glyphs at the field's position and height
        let field = ui.tree().widget::<TextBox>(text_box).unwrap().field();
        assert_eq!(ui.tree().absolute_location(field), Some(Vec2::new(20.0, 22.0)));
        assert!(matches!(
            commands[highlight_at.unwrap()],
            DrawCommand::Rectangle { rect, filled: true, .. } if rect == Rect::from_xywh(20.0, 22.0, 20.0, 10.0)
        ));
    }

    #[test]
    fn test_click_after_typing_in_same_frame() {
        let (mut ui, text_box) = setup();
        click(&mut ui, 25.0, 25.0);
        ui.frame(0.0);

        // No update runs between the edit and the click
        type_text(&mut ui, "abcd");
        click(&mut ui, 31.0, 25.0);
        ui.frame(16.0);

        assert_eq!(TextBox::text(ui.tree(), text_box), Some("abcd"));
        assert_eq!(cursor(&ui, text_box), CursorLocation::At(1));
    }
}
