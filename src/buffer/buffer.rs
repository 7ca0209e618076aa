//! Buffer: A grid of cells representing the terminal screen.
//!
//! Cells are stored in row-major order: `index = y * width + x`.

use super::cell::{Cell, Style};
use crate::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A grid of cells representing the terminal screen.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Buffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Buffer {
    /// Create a new buffer filled with blank cells.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Buffer dimensions must be non-zero");
        Self {
            cells: vec![Cell::EMPTY; usize::from(width) * usize::from(height)],
            width,
            height,
        }
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full area of the buffer.
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Get a reference to a cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set a cell at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// One row of cells, or `None` past the bottom edge.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        let start = self.index_of(0, y)?;
        Some(&self.cells[start..start + usize::from(self.width)])
    }

    /// Fill a rectangle (clipped to the buffer) with `cell`.
    pub fn fill_rect(&mut self, rect: Rect, cell: Cell) {
        let right = rect.right().min(self.width);
        let bottom = rect.bottom().min(self.height);
        for y in rect.y..bottom {
            for x in rect.x..right {
                self.set(x, y, cell);
            }
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Resize, discarding the content.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn resize(&mut self, width: u16, height: u16) {
        *self = Self::new(width, height);
    }

    /// Draw `text` starting at (x, y), never past column `x + max_width`.
    ///
    /// Text is split into grapheme clusters; wide clusters take two columns
    /// and are dropped if only one column is left. Multi-scalar clusters keep
    /// their first scalar. Returns the number of columns used.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: Style) -> u16 {
        let limit = x.saturating_add(max_width).min(self.width);
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let Some(symbol) = grapheme.chars().next() else {
                continue;
            };
            // Control characters would move the real terminal cursor.
            let symbol = if symbol.is_control() { ' ' } else { symbol };
            let width = grapheme_columns(grapheme);
            if col + width > limit {
                break;
            }
            self.set(col, y, Cell::styled(symbol, style));
            if width == 2 {
                self.set(col + 1, y, Cell::wide_continuation(style));
            }
            col += width;
        }
        col - x
    }

    /// The symbols of row `y` as a string, trailing blanks trimmed.
    ///
    /// Wide continuation cells are skipped, so wide text reads back as typed.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|cells| {
                cells
                    .iter()
                    .filter(|cell| !cell.is_wide_continuation())
                    .map(Cell::symbol)
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .unwrap_or_default()
    }
}

/// Columns one grapheme cluster takes in [`Buffer::draw_text`].
///
/// Zero-width clusters (lone combining marks, control characters) still
/// take one column so cell positions never desync.
fn grapheme_columns(grapheme: &str) -> u16 {
    u16::try_from(grapheme.width()).unwrap_or(2).clamp(1, 2)
}

/// Columns `text` occupies when drawn with [`Buffer::draw_text`].
pub fn text_columns(text: &str) -> usize {
    text.graphemes(true)
        .map(|g| usize::from(grapheme_columns(g)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;

    #[test]
    fn test_buffer_new() {
        let buf = Buffer::new(80, 24);
        assert_eq!(buf.width(), 80);
        assert_eq!(buf.height(), 24);
        assert_eq!(buf.get(0, 0), Some(&Cell::EMPTY));
    }

    #[test]
    #[should_panic(expected = "Buffer dimensions must be non-zero")]
    fn test_buffer_zero_width() {
        let _ = Buffer::new(0, 24);
    }

    #[test]
    fn test_buffer_bounds() {
        let mut buf = Buffer::new(10, 5);
        assert!(buf.set(9, 4, Cell::new('Z')));
        assert!(!buf.set(10, 0, Cell::new('X')));
        assert!(buf.get(0, 5).is_none());
        assert!(buf.row(5).is_none());
    }

    #[test]
    fn test_draw_text_reads_back() {
        let mut buf = Buffer::new(20, 2);
        let used = buf.draw_text(2, 1, "Doe", 10, Style::DEFAULT);

        assert_eq!(used, 3);
        assert_eq!(buf.row_text(1), "  Doe");
    }

    #[test]
    fn test_draw_text_clips() {
        let mut buf = Buffer::new(20, 1);
        let used = buf.draw_text(0, 0, "abcdefgh", 4, Style::DEFAULT);

        assert_eq!(used, 4);
        assert_eq!(buf.row_text(0), "abcd");
    }

    #[test]
    fn test_draw_text_wide() {
        let mut buf = Buffer::new(10, 1);
        let used = buf.draw_text(0, 0, "日本", 10, Style::DEFAULT);

        assert_eq!(used, 4);
        assert!(buf.get(1, 0).is_some_and(Cell::is_wide_continuation));
        assert_eq!(buf.row_text(0), "日本");
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buf = Buffer::new(4, 4);
        let cell = Cell::new('#').with_bg(Rgb::new(1, 2, 3));
        buf.fill_rect(Rect::new(2, 2, 10, 10), cell);

        assert_eq!(buf.get(3, 3), Some(&cell));
        assert_eq!(buf.get(1, 1), Some(&Cell::EMPTY));
    }

    #[test]
    fn test_clear_and_resize() {
        let mut buf = Buffer::new(4, 2);
        buf.set(0, 0, Cell::new('x'));
        buf.clear();
        assert_eq!(buf.row_text(0), "");

        buf.resize(8, 3);
        assert_eq!(buf.area(), Rect::new(0, 0, 8, 3));
    }

    #[test]
    fn test_control_chars_draw_as_blank() {
        let mut buf = Buffer::new(10, 1);
        let used = buf.draw_text(0, 0, "a\tb", 10, Style::DEFAULT);

        assert_eq!(used, 3);
        assert_eq!(buf.row_text(0), "a b");
    }

    #[test]
    fn test_text_columns_matches_draw() {
        for text in ["Doe", "日本", "Zoë", "a\tb", "e\u{301}x"] {
            let mut buf = Buffer::new(20, 1);
            let used = buf.draw_text(0, 0, text, 20, Style::DEFAULT);
            assert_eq!(usize::from(used), text_columns(text), "{text:?}");
        }
    }
}
