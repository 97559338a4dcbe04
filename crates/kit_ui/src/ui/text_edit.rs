//! Text edit formatter
//!
//! Cursor and selection state machine for single-line text editing. The
//! formatter never owns the text: every mutating call receives the buffer it
//! edits, and all indices are codepoint indices clamped to `[0, length]`.

use crate::foundation::math::{Rect, Vec2};
use crate::ui::input::{Key, KeyState};
use crate::ui::rendering::{Font, TextMeasure};

/// Cursor position within the bound text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorLocation {
    /// Before the codepoint at this index
    At(usize),
    /// After the last codepoint, wherever that currently is
    #[default]
    End,
}

/// Live end-of-text cursor; follows the text as it grows
pub const CURSOR_END: CursorLocation = CursorLocation::End;

impl CursorLocation {
    /// Concrete index for text of `len` codepoints
    pub fn resolve(self, len: usize) -> usize {
        match self {
            Self::At(index) => index.min(len),
            Self::End => len,
        }
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices().nth(char_index).map_or(text.len(), |(byte, _)| byte)
}

fn prefix(text: &str, char_index: usize) -> &str {
    &text[..byte_index(text, char_index)]
}

/// Cursor, selection and modifier state for one editable text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEditFormatter {
    cursor: CursorLocation,
    highlight_anchor: Option<usize>,
    shift_held: bool,
}

impl TextEditFormatter {
    /// Formatter with the cursor at the end and no selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor location
    pub fn cursor(&self) -> CursorLocation {
        self.cursor
    }

    /// Move the cursor, clearing any selection
    pub fn set_cursor(&mut self, cursor: CursorLocation) {
        self.cursor = cursor;
        self.highlight_anchor = None;
    }

    /// Cursor index for text of `len` codepoints
    pub fn cursor_index(&self, len: usize) -> usize {
        self.cursor.resolve(len)
    }

    /// Whether shift is currently held
    pub fn shift_held(&self) -> bool {
        self.shift_held
    }

    /// Whether a non-empty selection exists in text of `len` codepoints
    pub fn highlighting(&self, len: usize) -> bool {
        self.selection(len).is_some()
    }

    /// Selection as `(lower, upper)` codepoint bounds
    pub fn selection(&self, len: usize) -> Option<(usize, usize)> {
        let anchor = self.highlight_anchor?.min(len);
        let cursor = self.cursor_index(len);
        match anchor.cmp(&cursor) {
            std::cmp::Ordering::Less => Some((anchor, cursor)),
            std::cmp::Ordering::Greater => Some((cursor, anchor)),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Select `[start, end)`, leaving the cursor at `end`
    pub fn select(&mut self, text: &str, start: usize, end: usize) {
        let len = char_len(text);
        let start = start.min(len);
        let end = end.min(len);
        self.cursor = CursorLocation::At(end);
        self.highlight_anchor = (start != end).then_some(start);
    }

    /// Drop the selection, keeping the cursor where it is
    pub fn end_highlight(&mut self) {
        self.highlight_anchor = None;
    }

    /// Cursor to the end, no selection
    ///
    /// Called whenever the bound text is replaced wholesale.
    pub fn reset(&mut self) {
        self.cursor = CURSOR_END;
        self.highlight_anchor = None;
    }

    /// Track modifier state
    pub fn on_key(&mut self, key: Key, state: KeyState) {
        if key.is_shift() {
            self.shift_held = state.is_down();
        }
    }

    /// Insert `input` at the cursor, replacing the selection if any
    pub fn insert_text(&mut self, text: &mut String, input: &str) {
        self.delete_selection(text);

        let index = self.cursor_index(char_len(text));
        text.insert_str(byte_index(text, index), input);

        if let CursorLocation::At(_) = self.cursor {
            self.cursor = CursorLocation::At(index + char_len(input));
        }
        log::trace!("Inserted {:?}, cursor now {:?}", input, self.cursor);
    }

    /// React to a key press or auto-repeat
    ///
    /// Returns `true` when the text, cursor or selection changed.
    pub fn handle_key_press(&mut self, text: &mut String, key: Key) -> bool {
        let len = char_len(text);
        let index = self.cursor_index(len);

        match key {
            Key::Left => {
                if let (Some((lower, _)), false) = (self.selection(len), self.shift_held) {
                    self.set_cursor(CursorLocation::At(lower));
                    return true;
                }
                self.move_to(len, CursorLocation::At(index.saturating_sub(1)))
            }
            Key::Right => {
                if let (Some((_, upper)), false) = (self.selection(len), self.shift_held) {
                    self.set_cursor(Self::location_for(upper, len));
                    return true;
                }
                self.move_to(len, Self::location_for((index + 1).min(len), len))
            }
            Key::Home => self.move_to(len, CursorLocation::At(0)),
            Key::End => self.move_to(len, CURSOR_END),
            Key::Backspace => {
                if self.delete_selection(text) {
                    return true;
                }
                if index == 0 {
                    return false;
                }
                let start = byte_index(text, index - 1);
                text.replace_range(start..byte_index(text, index), "");
                if let CursorLocation::At(_) = self.cursor {
                    self.cursor = CursorLocation::At(index - 1);
                }
                true
            }
            Key::Delete => {
                if self.delete_selection(text) {
                    return true;
                }
                if index >= len {
                    return false;
                }
                let start = byte_index(text, index);
                text.replace_range(start..byte_index(text, index + 1), "");
                true
            }
            _ => false,
        }
    }

    /// Place the cursor from a click at `relative_x` pixels into the field
    ///
    /// Clears any selection.
    pub fn place_cursor(
        &mut self,
        text: &str,
        font: &Font,
        measure: &dyn TextMeasure,
        relative_x: f32,
        field_width: f32,
    ) -> CursorLocation {
        let cursor = Self::hit_test(text, font, measure, relative_x, field_width);
        self.set_cursor(cursor);
        cursor
    }

    /// Extend the selection to a click at `relative_x`
    ///
    /// Starts a selection at the current cursor when none is active.
    pub fn extend_highlight_to(
        &mut self,
        text: &str,
        font: &Font,
        measure: &dyn TextMeasure,
        relative_x: f32,
        field_width: f32,
    ) -> CursorLocation {
        let len = char_len(text);
        let anchor = self.highlight_anchor.unwrap_or_else(|| self.cursor_index(len));
        let cursor = Self::hit_test(text, font, measure, relative_x, field_width);

        self.cursor = cursor;
        self.highlight_anchor = (anchor != cursor.resolve(len)).then_some(anchor);
        cursor
    }

    /// Pixel offset of the cursor from the start of the text
    pub fn cursor_offset(&self, text: &str, font: &Font, measure: &dyn TextMeasure) -> f32 {
        let index = self.cursor_index(char_len(text));
        measure.measure_text(prefix(text, index), font).x
    }

    /// Selection box in the field's own coordinates, spanning `height`
    pub fn highlight_rect(&self, text: &str, font: &Font, measure: &dyn TextMeasure, height: f32) -> Option<Rect> {
        let (lower, upper) = self.selection(char_len(text))?;
        let start = measure.measure_text(prefix(text, lower), font).x;
        let end = measure.measure_text(prefix(text, upper), font).x;
        Some(Rect::new(Vec2::new(start, 0.0), Vec2::new(end - start, height)))
    }

    fn location_for(index: usize, len: usize) -> CursorLocation {
        if index >= len {
            CURSOR_END
        } else {
            CursorLocation::At(index)
        }
    }

    fn hit_test(text: &str, font: &Font, measure: &dyn TextMeasure, x: f32, field_width: f32) -> CursorLocation {
        if x <= 0.0 {
            return CursorLocation::At(0);
        }
        if x >= field_width {
            return CURSOR_END;
        }

        let len = char_len(text);
        let mut index = 0;
        while index < len {
            let before = measure.measure_text(prefix(text, index), font).x;
            let after = measure.measure_text(prefix(text, index + 1), font).x;
            if x >= before && x <= after {
                if x - before > after - x {
                    index += 1;
                }
                break;
            }
            index += 1;
        }

        Self::location_for(index, len)
    }

    fn move_to(&mut self, len: usize, target: CursorLocation) -> bool {
        let before = (self.cursor_index(len), self.selection(len));

        if self.shift_held {
            if self.highlight_anchor.is_none() {
                self.highlight_anchor = Some(self.cursor_index(len));
            }
        } else {
            self.highlight_anchor = None;
        }
        self.cursor = target;
        if self.highlight_anchor == Some(self.cursor_index(len)) {
            self.highlight_anchor = None;
        }

        before != (self.cursor_index(len), self.selection(len))
    }

    fn delete_selection(&mut self, text: &mut String) -> bool {
        let len = char_len(text);
        let Some((lower, upper)) = self.selection(len) else {
            self.highlight_anchor = None;
            return false;
        };

        let start = byte_index(text, lower);
        text.replace_range(start..byte_index(text, upper), "");
        self.cursor = CursorLocation::At(lower);
        self.highlight_anchor = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::rendering::MonospaceMeasure;

    fn font() -> Font {
        Font::new("Mono", 10.0)
    }

    #[test]
    fn test_insert_at_start() {
        let mut text = String::from("cd");
        let mut fmt = TextEditFormatter::new();
        fmt.set_cursor(CursorLocation::At(0));

        fmt.insert_text(&mut text, "ab");

        assert_eq!(text, "abcd");
        assert_eq!(fmt.cursor(), CursorLocation::At(2));
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut text = String::from("abcd");
        let mut fmt = TextEditFormatter::new();
        fmt.select(&text, 1, 3);
        assert!(fmt.highlighting(4));

        fmt.insert_text(&mut text, "X");

        assert_eq!(text, "aXd");
        assert_eq!(fmt.cursor_index(3), 2);
        assert!(!fmt.highlighting(3));
    }

    #[test]
    fn test_cursor_end_follows_text() {
        let mut text = String::from("abcd");
        let mut fmt = TextEditFormatter::new();
        assert_eq!(fmt.cursor(), CURSOR_END);
        assert_eq!(fmt.cursor_index(char_len(&text)), 4);

        fmt.insert_text(&mut text, "e");

        assert_eq!(text, "abcde");
        assert_eq!(fmt.cursor(), CURSOR_END);
        assert_eq!(fmt.cursor_index(char_len(&text)), 5);
    }

    #[test]
    fn test_indices_are_codepoints() {
        let mut text = String::from("héllo");
        let mut fmt = TextEditFormatter::new();
        fmt.set_cursor(CursorLocation::At(2));

        fmt.insert_text(&mut text, "ü");
        assert_eq!(text, "héüllo");

        assert!(fmt.handle_key_press(&mut text, Key::Backspace));
        assert!(fmt.handle_key_press(&mut text, Key::Backspace));
        assert_eq!(text, "hllo");
        assert_eq!(fmt.cursor(), CursorLocation::At(1));
    }

    #[test]
    fn test_out_of_range_cursor_clamps() {
        let mut text = String::from("ab");
        let mut fmt = TextEditFormatter::new();
        fmt.set_cursor(CursorLocation::At(99));
        assert_eq!(fmt.cursor_index(2), 2);

        fmt.insert_text(&mut text, "c");
        assert_eq!(text, "abc");
    }

    #[test]
    fn test_arrow_keys_move_and_stop_at_bounds() {
        let mut text = String::from("ab");
        let mut fmt = TextEditFormatter::new();

        assert!(!fmt.handle_key_press(&mut text, Key::Right));
        assert!(fmt.handle_key_press(&mut text, Key::Left));
        assert_eq!(fmt.cursor(), CursorLocation::At(1));
        assert!(fmt.handle_key_press(&mut text, Key::Left));
        assert!(!fmt.handle_key_press(&mut text, Key::Left));
        assert_eq!(fmt.cursor(), CursorLocation::At(0));

        assert!(fmt.handle_key_press(&mut text, Key::End));
        assert_eq!(fmt.cursor(), CURSOR_END);
        assert!(fmt.handle_key_press(&mut text, Key::Home));
        assert_eq!(fmt.cursor(), CursorLocation::At(0));
    }

    #[test]
    fn test_shift_arrows_extend_selection() {
        let mut text = String::from("abcd");
        let mut fmt = TextEditFormatter::new();
        fmt.set_cursor(CursorLocation::At(1));

        fmt.on_key(Key::LeftShift, KeyState::Press);
        fmt.handle_key_press(&mut text, Key::Right);
        fmt.on_key(Key::LeftShift, KeyState::Hold);
        fmt.handle_key_press(&mut text, Key::Right);
        assert_eq!(fmt.selection(4), Some((1, 3)));

        fmt.on_key(Key::LeftShift, KeyState::Release);
        assert!(!fmt.shift_held());

        // Collapses to the lower bound without shift
        assert!(fmt.handle_key_press(&mut text, Key::Left));
        assert_eq!(fmt.cursor(), CursorLocation::At(1));
        assert!(!fmt.highlighting(4));
    }

    #[test]
    fn test_right_collapses_to_upper_bound() {
        let mut text = String::from("abcd");
        let mut fmt = TextEditFormatter::new();
        fmt.select(&text, 3, 1);

        assert!(fmt.handle_key_press(&mut text, Key::Right));
        assert_eq!(fmt.cursor(), CursorLocation::At(3));
        assert!(!fmt.highlighting(4));
    }

    #[test]
    fn test_shift_back_to_anchor_clears_selection() {
        let mut text = String::from("abcd");
        let mut fmt = TextEditFormatter::new();
        fmt.set_cursor(CursorLocation::At(2));
        fmt.on_key(Key::RightShift, KeyState::Press);

        fmt.handle_key_press(&mut text, Key::Left);
        assert!(fmt.highlighting(4));
        fmt.handle_key_press(&mut text, Key::Right);
        assert!(!fmt.highlighting(4));
    }

    #[test]
    fn test_shift_home_selects_to_start() {
        let mut text = String::from("abcd");
        let mut fmt = TextEditFormatter::new();
        fmt.on_key(Key::LeftShift, KeyState::Press);

        assert!(fmt.handle_key_press(&mut text, Key::Home));
        assert_eq!(fmt.selection(4), Some((0, 4)));

        assert!(fmt.handle_key_press(&mut text, Key::Delete));
        assert_eq!(text, "");
        assert_eq!(fmt.cursor(), CursorLocation::At(0));
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut text = String::from("abcd");
        let mut fmt = TextEditFormatter::new();

        assert!(fmt.handle_key_press(&mut text, Key::Backspace));
        assert_eq!(text, "abc");
        assert_eq!(fmt.cursor(), CURSOR_END);
        assert!(!fmt.handle_key_press(&mut text, Key::Delete));

        fmt.set_cursor(CursorLocation::At(0));
        assert!(!fmt.handle_key_press(&mut text, Key::Backspace));
        assert!(fmt.handle_key_press(&mut text, Key::Delete));
        assert_eq!(text, "bc");
        assert_eq!(fmt.cursor(), CursorLocation::At(0));
    }

    #[test]
    fn test_unhandled_key_reports_no_change() {
        let mut text = String::from("abcd");
        let mut fmt = TextEditFormatter::new();
        assert!(!fmt.handle_key_press(&mut text, Key::Enter));
        assert!(!fmt.handle_key_press(&mut text, Key::Character('x')));
        assert_eq!(text, "abcd");
    }

    #[test]
    fn test_place_cursor_edges() {
        let measure = MonospaceMeasure::new(1.0);
        let mut fmt = TextEditFormatter::new();

        assert_eq!(fmt.place_cursor("abcd", &font(), &measure, 0.0, 40.0), CursorLocation::At(0));
        assert_eq!(fmt.place_cursor("abcd", &font(), &measure, -5.0, 40.0), CursorLocation::At(0));
        assert_eq!(fmt.place_cursor("abcd", &font(), &measure, 40.0, 40.0), CURSOR_END);
        assert_eq!(fmt.place_cursor("abcd", &font(), &measure, 400.0, 40.0), CURSOR_END);
    }

    #[test]
    fn test_place_cursor_rounds_to_nearer_edge() {
        let measure = MonospaceMeasure::new(1.0);
        let mut fmt = TextEditFormatter::new();

        assert_eq!(fmt.place_cursor("abcd", &font(), &measure, 14.0, 100.0), CursorLocation::At(1));
        assert_eq!(fmt.place_cursor("abcd", &font(), &measure, 16.0, 100.0), CursorLocation::At(2));
        // Past the last glyph edge but inside the field
        assert_eq!(fmt.place_cursor("abcd", &font(), &measure, 37.0, 100.0), CURSOR_END);
        assert_eq!(fmt.place_cursor("abcd", &font(), &measure, 60.0, 100.0), CURSOR_END);
    }

    #[test]
    fn test_click_clears_and_shift_click_extends() {
        let measure = MonospaceMeasure::new(1.0);
        let mut fmt = TextEditFormatter::new();
        fmt.place_cursor("abcd", &font(), &measure, 10.0, 100.0);

        fmt.extend_highlight_to("abcd", &font(), &measure, 30.0, 100.0);
        assert_eq!(fmt.selection(4), Some((1, 3)));

        fmt.place_cursor("abcd", &font(), &measure, 20.0, 100.0);
        assert!(!fmt.highlighting(4));
    }

    #[test]
    fn test_offsets_and_highlight_rect() {
        let measure = MonospaceMeasure::new(1.0);
        let mut fmt = TextEditFormatter::new();

        assert_eq!(fmt.cursor_offset("abcd", &font(), &measure), 40.0);
        assert_eq!(fmt.highlight_rect("abcd", &font(), &measure, 12.0), None);

        fmt.select("abcd", 3, 1);
        assert_eq!(fmt.cursor_offset("abcd", &font(), &measure), 10.0);
        assert_eq!(
            fmt.highlight_rect("abcd", &font(), &measure, 12.0),
            Some(Rect::from_xywh(10.0, 0.0, 20.0, 12.0))
        );
    }

    #[test]
    fn test_reset() {
        let mut fmt = TextEditFormatter::new();
        fmt.select("abcd", 0, 2);
        fmt.reset();
        assert_eq!(fmt.cursor(), CURSOR_END);
        assert!(!fmt.highlighting(4));
    }

    #[test]
    fn test_highlighting_agrees_with_clamped_selection() {
        let mut fmt = TextEditFormatter::new();
        fmt.select("abcdef", 4, 6);
        assert!(fmt.highlighting(6));

        // Text shrank underneath the formatter: anchor and cursor both clamp to 2
        assert_eq!(fmt.selection(2), None);
        assert!(!fmt.highlighting(2));
    }
}
