//! Text Input Widget: Single-line labelled text field with cursor.
//!
//! The field edits its own buffer and reports each edit as
//! [`InputOutcome::Changed`]; the owner forwards the new content to the state
//! cell the field is bound to. Content is never transformed or truncated:
//! what is typed is what [`content`](TextInput::content) returns. The one
//! exception is a multi-line paste, whose line breaks are dropped.

use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::{text_columns, Buffer, Cell, Modifiers, Rgb, Style};
use unicode_segmentation::UnicodeSegmentation;
use crate::layout::Rect;

/// Colors for the text input widget.
#[derive(Debug, Clone)]
pub struct TextInputConfig {
    /// Text style.
    pub text: Style,
    /// Label style when focused.
    pub label_focused: Style,
    /// Label style when not focused.
    pub label: Style,
    /// Cursor style.
    pub cursor: Style,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        let bg = Rgb::new(30, 30, 30);
        Self {
            text: Style::new(Rgb::WHITE, bg),
            label_focused: Style::new(Rgb::new(0, 255, 255), bg).with_modifiers(Modifiers::BOLD),
            label: Style::new(Rgb::new(120, 120, 120), bg),
            cursor: Style::new(bg, Rgb::new(0, 255, 255)),
        }
    }
}

/// Result of feeding an event to a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Not handled by this field.
    Ignored,
    /// Handled, content unchanged (cursor movement).
    Consumed,
    /// Content changed.
    Changed,
}

/// A single-line text input with a label, cursor and editing support.
#[derive(Debug)]
pub struct TextInput {
    label: String,
    content: String,
    /// Cursor position as a byte offset on a char boundary.
    cursor: usize,
    bounds: Rect,
    focused: bool,
    config: TextInputConfig,
    dirty: bool,
}

impl TextInput {
    /// Create an empty, unfocused field.
    pub fn new(label: impl Into<String>, bounds: Rect) -> Self {
        Self {
            label: label.into(),
            content: String::new(),
            cursor: 0,
            bounds,
            focused: false,
            config: TextInputConfig::default(),
            dirty: true,
        }
    }

    /// Get the current text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The field label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Set the content, moving cursor to end.
    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.content.len();
        self.dirty = true;
    }

    /// Set focus state.
    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.dirty = true;
    }

    /// Check if focused.
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Feed one input event to the field.
    pub fn edit(&mut self, event: &InputEvent) -> InputOutcome {
        if !self.focused {
            return InputOutcome::Ignored;
        }

        match event {
            InputEvent::Key { code, modifiers } => match code {
                KeyCode::Char(c) if !modifiers.control && !modifiers.alt => {
                    self.insert_str(c.encode_utf8(&mut [0; 4]));
                    InputOutcome::Changed
                }
                KeyCode::Backspace => self.changed_if(Self::backspace),
                KeyCode::Delete => self.changed_if(Self::delete),
                KeyCode::Left => self.consumed(Self::cursor_left),
                KeyCode::Right => self.consumed(Self::cursor_right),
                KeyCode::Home => self.consumed(|input| input.cursor = 0),
                KeyCode::End => self.consumed(|input| input.cursor = input.content.len()),
                _ => InputOutcome::Ignored,
            },
            // Line breaks would split the single-line field; everything
            // else, tabs included, is kept as pasted.
            InputEvent::Paste(text) => {
                let line: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
                if line.is_empty() {
                    InputOutcome::Consumed
                } else {
                    self.insert_str(&line);
                    InputOutcome::Changed
                }
            }
            _ => InputOutcome::Ignored,
        }
    }

    fn changed_if(&mut self, op: fn(&mut Self) -> bool) -> InputOutcome {
        if op(self) {
            self.dirty = true;
            InputOutcome::Changed
        } else {
            InputOutcome::Consumed
        }
    }

    fn consumed(&mut self, op: impl FnOnce(&mut Self)) -> InputOutcome {
        op(self);
        self.dirty = true;
        InputOutcome::Consumed
    }

    fn insert_str(&mut self, text: &str) {
        self.content.insert_str(self.cursor, text);
        self.cursor += text.len();
        self.dirty = true;
    }

    fn prev_boundary(&self) -> usize {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.content.remove(prev);
        self.cursor = prev;
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.content.remove(self.cursor);
        true
    }

    fn cursor_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    fn cursor_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }
}

impl Widget for TextInput {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        if self.bounds.is_empty() {
            return;
        }
        let Rect { x, y, width, .. } = self.bounds;
        buffer.fill_rect(self.bounds, Cell::styled(' ', self.config.text));

        let label_style = if self.focused {
            self.config.label_focused
        } else {
            self.config.label
        };
        let label = format!("{}: ", self.label);
        let used = buffer.draw_text(x, y, &label, width, label_style);

        let text_x = x + used;
        let text_width = width - used;
        if text_width == 0 {
            return;
        }

        // Keep the cursor visible: drop leading graphemes until at most
        // `text_width - 1` columns sit before it.
        let before = &self.content[..self.cursor];
        let cursor_col = text_columns(before);
        let mut skipped_cols = 0;
        let mut skipped_bytes = 0;
        for grapheme in before.graphemes(true) {
            if cursor_col - skipped_cols < usize::from(text_width) {
                break;
            }
            skipped_cols += text_columns(grapheme);
            skipped_bytes += grapheme.len();
        }
        buffer.draw_text(text_x, y, &self.content[skipped_bytes..], text_width, self.config.text);

        if self.focused {
            let offset = u16::try_from(cursor_col - skipped_cols).unwrap_or(text_width - 1);
            let cursor_x = text_x + offset.min(text_width - 1);
            let symbol = buffer.get(cursor_x, y).map_or(' ', Cell::symbol);
            buffer.set(cursor_x, y, Cell::styled(symbol, self.config.cursor));
        }
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::KeyModifiers;

    fn focused() -> TextInput {
        let mut input = TextInput::new("Name", Rect::new(0, 0, 40, 1));
        input.set_focused(true);
        input
    }

    fn type_str(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.edit(&InputEvent::key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_round_trips() {
        let mut input = focused();
        type_str(&mut input, "Zoë 日本");
        assert_eq!(input.content(), "Zoë 日本");
    }

    #[test]
    fn test_unfocused_ignores_input() {
        let mut input = TextInput::new("Name", Rect::new(0, 0, 40, 1));
        let outcome = input.edit(&InputEvent::key(KeyCode::Char('a')));

        assert_eq!(outcome, InputOutcome::Ignored);
        assert_eq!(input.content(), "");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = focused();
        input.set_content("Hello");

        assert_eq!(input.edit(&InputEvent::key(KeyCode::Backspace)), InputOutcome::Changed);
        assert_eq!(input.content(), "Hell");

        // Delete at the end has nothing to remove.
        assert_eq!(input.edit(&InputEvent::key(KeyCode::Delete)), InputOutcome::Consumed);

        input.edit(&InputEvent::key(KeyCode::Home));
        assert_eq!(input.edit(&InputEvent::key(KeyCode::Delete)), InputOutcome::Changed);
        assert_eq!(input.content(), "ell");
    }

    #[test]
    fn test_cursor_movement_multibyte() {
        let mut input = focused();
        input.set_content("añb");

        input.edit(&InputEvent::key(KeyCode::Left));
        input.edit(&InputEvent::key(KeyCode::Left));
        assert_eq!(input.cursor, 1);

        input.edit(&InputEvent::key(KeyCode::Right));
        assert_eq!(input.cursor, 3);

        input.edit(&InputEvent::key(KeyCode::End));
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn test_control_chars_are_not_text() {
        let mut input = focused();
        let outcome = input.edit(&InputEvent::Key {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        });
        assert_eq!(outcome, InputOutcome::Ignored);
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut input = focused();
        input.edit(&InputEvent::Paste("Jane\r\nDoe".into()));
        assert_eq!(input.content(), "JaneDoe");
    }

    #[test]
    fn test_paste_keeps_tabs() {
        let mut input = focused();
        input.edit(&InputEvent::Paste("a\tb".into()));
        assert_eq!(input.content(), "a\tb");
    }

    #[test]
    fn test_cursor_after_wide_text() {
        let mut input = focused();
        type_str(&mut input, "日本");
        let mut buffer = Buffer::new(40, 1);
        input.render(&mut buffer);

        // "Name: " is 6 columns, each glyph 2 more.
        assert_eq!(buffer.row_text(0), "Name: 日本");
        let cursor = buffer.get(10, 0).map(Cell::style);
        assert_eq!(cursor, Some(input.config.cursor));
        assert!(buffer.get(9, 0).is_some_and(Cell::is_wide_continuation));
    }

    #[test]
    fn test_wide_text_scrolls_by_columns() {
        let mut input = TextInput::new("N", Rect::new(0, 0, 8, 1));
        input.set_focused(true);
        type_str(&mut input, "日本語");
        let mut buffer = Buffer::new(8, 1);
        input.render(&mut buffer);

        // 5 text columns: "日" scrolls off so "本語" and the cursor fit.
        assert_eq!(buffer.row_text(0), "N: 本語");
        assert_eq!(buffer.get(7, 0).map(Cell::style), Some(input.config.cursor));
    }

    #[test]
    fn test_render_label_and_text() {
        let mut input = focused();
        type_str(&mut input, "Jane");
        let mut buffer = Buffer::new(40, 1);
        input.render(&mut buffer);

        assert_eq!(buffer.row_text(0), "Name: Jane");
    }
}
