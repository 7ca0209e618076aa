//! Status Bar Widget: One row with left, center and right sections.
//!
//! The demo uses it for the active variant (left), the last keystroke's
//! effect (center) and running render counters (right).

use super::traits::Widget;
use crate::buffer::{Buffer, Cell, Modifiers, Rgb, Style};
use crate::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Where a section sits on the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Flush left.
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

#[derive(Debug, Clone)]
struct Section {
    text: String,
    align: Align,
    style: Style,
}

/// A one-row, three-section status bar.
#[derive(Debug)]
pub struct StatusBar {
    sections: [Section; 3],
    bounds: Rect,
    bg: Rgb,
    dirty: bool,
}

impl StatusBar {
    /// Create an empty status bar.
    pub fn new(bounds: Rect) -> Self {
        let bg = Rgb::new(40, 40, 40);
        let section = |align, fg| Section {
            text: String::new(),
            align,
            style: Style::new(fg, bg),
        };
        Self {
            sections: [
                Section {
                    style: Style::new(Rgb::WHITE, bg).with_modifiers(Modifiers::BOLD),
                    ..section(Align::Left, Rgb::WHITE)
                },
                section(Align::Center, Rgb::new(150, 150, 150)),
                section(Align::Right, Rgb::new(100, 200, 100)),
            ],
            bounds,
            bg,
            dirty: true,
        }
    }

    fn set(&mut self, align: Align, text: impl Into<String>) {
        let text = text.into();
        if let Some(section) = self.sections.iter_mut().find(|s| s.align == align) {
            if section.text != text {
                section.text = text;
                self.dirty = true;
            }
        }
    }

    fn get(&self, align: Align) -> &str {
        self.sections
            .iter()
            .find(|s| s.align == align)
            .map_or("", |s| s.text.as_str())
    }

    /// Set the left section content.
    pub fn set_left(&mut self, text: impl Into<String>) {
        self.set(Align::Left, text);
    }

    /// Set the center section content.
    pub fn set_center(&mut self, text: impl Into<String>) {
        self.set(Align::Center, text);
    }

    /// Set the right section content.
    pub fn set_right(&mut self, text: impl Into<String>) {
        self.set(Align::Right, text);
    }

    /// Get the left section content.
    pub fn left(&self) -> &str {
        self.get(Align::Left)
    }

    /// Get the center section content.
    pub fn center(&self) -> &str {
        self.get(Align::Center)
    }

    /// Get the right section content.
    pub fn right(&self) -> &str {
        self.get(Align::Right)
    }
}

impl Widget for StatusBar {
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
        buffer.fill_rect(self.bounds, Cell::new(' ').with_bg(self.bg));

        let text_width = |s: &Section| u16::try_from(s.text.width()).unwrap_or(u16::MAX);
        let [left, center, right] = &self.sections;

        // Left wins, right takes what is left, center only paints in the gap.
        let left_end = buffer.draw_text(x, y, &left.text, width, left.style);
        let room = width.saturating_sub(left_end + 1);
        let right_width = text_width(right).min(room);
        let right_start = x + width - right_width;
        buffer.draw_text(right_start, y, &right.text, right_width, right.style);

        let center_width = text_width(center);
        let start = x + width.saturating_sub(center_width) / 2;
        if start > x + left_end && start + center_width < right_start {
            buffer.draw_text(start, y, &center.text, center_width, center.style);
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

    #[test]
    fn test_status_bar_sections() {
        let mut bar = StatusBar::new(Rect::new(0, 0, 60, 1));
        bar.set_left("Left");
        bar.set_center("Center");
        bar.set_right("Right");

        assert_eq!(bar.left(), "Left");
        assert_eq!(bar.center(), "Center");
        assert_eq!(bar.right(), "Right");
    }

    #[test]
    fn test_status_bar_render_positions() {
        let mut bar = StatusBar::new(Rect::new(0, 0, 30, 1));
        bar.set_left("L");
        bar.set_center("C");
        bar.set_right("R");
        let mut buffer = Buffer::new(30, 1);
        bar.render(&mut buffer);

        let row = buffer.row_text(0);
        assert!(row.starts_with('L'));
        assert_eq!(row.chars().nth(14), Some('C'));
        assert!(row.ends_with('R'));
    }

    #[test]
    fn test_same_text_keeps_clean() {
        let mut bar = StatusBar::new(Rect::new(0, 0, 30, 1));
        bar.set_left("x");
        bar.clear_redraw();
        bar.set_left("x");
        assert!(!bar.needs_redraw());
    }
}
