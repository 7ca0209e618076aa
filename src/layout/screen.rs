//! ScreenLayout: Fixed placement of the demo widgets.

use super::rect::Rect;

/// Rows reserved for each card: title plus up to three view lines.
pub const CARD_HEIGHT: u16 = 4;

/// Pre-computed widget areas for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Top status bar.
    pub status: Rect,
    /// Name text field.
    pub name_input: Rect,
    /// Surname text field.
    pub surname_input: Rect,
    /// Name card.
    pub name_card: Rect,
    /// Surname card.
    pub surname_card: Rect,
    /// Bottom help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Stack the widgets top to bottom inside `area`.
    ///
    /// On terminals too short for everything, lower widgets get empty
    /// rectangles and simply do not paint.
    pub fn compute(area: Rect) -> Self {
        let (status, rest) = area.split_vertical(1);
        let (_, rest) = rest.split_vertical(1);
        let (name_input, rest) = rest.split_vertical(1);
        let (surname_input, rest) = rest.split_vertical(1);
        let (_, rest) = rest.split_vertical(1);
        let (name_card, rest) = rest.split_vertical(CARD_HEIGHT);
        let (_, rest) = rest.split_vertical(1);
        let (surname_card, rest) = rest.split_vertical(CARD_HEIGHT);

        let help = if rest.is_empty() {
            Rect::new(area.x, area.bottom(), area.width, 0)
        } else {
            Rect::new(area.x, area.bottom() - 1, area.width, 1)
        };

        Self {
            status,
            name_input: name_input.inset_x(1),
            surname_input: surname_input.inset_x(1),
            name_card: name_card.inset_x(1),
            surname_card: surname_card.inset_x(1),
            help,
        }
    }
}
