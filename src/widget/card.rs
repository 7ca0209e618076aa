//! Card Widget: Paints a component view under a title row.
//!
//! The title row carries a badge saying whether the last evaluation rendered
//! the component or reused its previous view, and the running render count.

use super::traits::Widget;
use crate::buffer::{Buffer, Cell, Modifiers, Rgb, Style};
use crate::component::View;
use crate::layout::Rect;
use crate::memo::RenderOutcome;
use unicode_width::UnicodeWidthStr;

const BG: Rgb = Rgb::new(24, 24, 36);

/// A titled box showing the latest view of one component.
#[derive(Debug)]
pub struct Card {
    title: String,
    view: View,
    outcome: Option<RenderOutcome>,
    renders: u64,
    bounds: Rect,
    dirty: bool,
}

impl Card {
    /// Create an empty card.
    pub fn new(title: impl Into<String>, bounds: Rect) -> Self {
        Self {
            title: title.into(),
            view: View::new(),
            outcome: None,
            renders: 0,
            bounds,
            dirty: true,
        }
    }

    /// Show a new view. `renders` is the component's total render count.
    pub fn update(&mut self, view: &View, outcome: RenderOutcome, renders: u64) {
        if self.view != *view {
            self.view = view.clone();
        }
        self.outcome = Some(outcome);
        self.renders = renders;
        self.dirty = true;
    }

    /// The view currently shown.
    pub const fn view(&self) -> &View {
        &self.view
    }

    /// Badge text for the title row.
    pub fn badge(&self) -> String {
        match self.outcome {
            Some(RenderOutcome::Rendered) => format!("● rendered · {} renders", self.renders),
            Some(RenderOutcome::Skipped) => format!("○ reused · {} renders", self.renders),
            None => String::from("not mounted"),
        }
    }
}

impl Widget for Card {
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
        buffer.fill_rect(self.bounds, Cell::new(' ').with_bg(BG));

        let title_style = Style::new(Rgb::new(200, 200, 255), BG).with_modifiers(Modifiers::BOLD);
        let used = buffer.draw_text(x + 1, y, &self.title, width.saturating_sub(2), title_style);

        let badge = self.badge();
        let badge_fg = match self.outcome {
            Some(RenderOutcome::Rendered) => Rgb::new(255, 200, 0),
            _ => Rgb::new(110, 110, 110),
        };
        let badge_width = u16::try_from(badge.width()).unwrap_or(u16::MAX);
        // Badge sits right-aligned and is dropped when it would hit the title.
        if used + badge_width + 3 <= width {
            let bx = x + width - badge_width - 1;
            buffer.draw_text(bx, y, &badge, badge_width, Style::new(badge_fg, BG));
        }

        let text_style = Style::new(Rgb::new(220, 220, 220), BG);
        for (row, line) in (y + 1..self.bounds.bottom()).zip(self.view.lines()) {
            buffer.draw_text(x + 2, row, line, width.saturating_sub(3), text_style);
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
    fn test_card_paints_title_and_lines() {
        let mut card = Card::new("NameCard", Rect::new(0, 0, 50, 3));
        card.update(&View::new().line("Name: Jane"), RenderOutcome::Rendered, 1);
        let mut buffer = Buffer::new(50, 3);
        card.render(&mut buffer);

        assert!(buffer.row_text(0).contains("NameCard"));
        assert!(buffer.row_text(0).ends_with("● rendered · 1 renders"));
        assert_eq!(buffer.row_text(1), "  Name: Jane");
    }

    #[test]
    fn test_card_badge_reused() {
        let mut card = Card::new("SurnameCard", Rect::new(0, 0, 50, 3));
        card.update(&View::new(), RenderOutcome::Skipped, 4);
        assert_eq!(card.badge(), "○ reused · 4 renders");
    }

    #[test]
    fn test_card_clips_to_height() {
        let mut card = Card::new("T", Rect::new(0, 0, 20, 2));
        card.update(
            &View::new().line("one").line("two"),
            RenderOutcome::Rendered,
            1,
        );
        let mut buffer = Buffer::new(20, 3);
        card.render(&mut buffer);

        assert_eq!(buffer.row_text(1), "  one");
        assert_eq!(buffer.row_text(2), "");
    }
}
