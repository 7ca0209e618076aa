//! `OutputBuffer`: Accumulates ANSI output for a single write.

use crate::buffer::{Modifiers, Style};
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// A frame is encoded here first and then written with one `write_all`, so
/// the terminal never shows a half-painted frame.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
    /// Last style emitted, to skip redundant SGR sequences.
    style: Option<Style>,
}

impl OutputBuffer {
    /// Create a buffer sized for a typical terminal frame.
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(4096),
            style: None,
        }
    }

    /// Clear the buffer for reuse. Forgets the emitted style too.
    pub fn clear(&mut self) {
        self.data.clear();
        self.style = None;
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Move cursor to (x, y), 0-indexed.
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // CSI row ; col H (1-indexed)
        let _ = write!(self.data, "\x1b[{};{}H", y + 1, x + 1);
    }

    /// Switch to `style` unless it is already active.
    pub fn set_style(&mut self, style: Style) {
        if self.style == Some(style) {
            return;
        }
        self.data.extend_from_slice(b"\x1b[0");
        for (flag, code) in [
            (Modifiers::BOLD, "1"),
            (Modifiers::DIM, "2"),
            (Modifiers::ITALIC, "3"),
            (Modifiers::UNDERLINE, "4"),
            (Modifiers::REVERSED, "7"),
        ] {
            if style.modifiers.contains(flag) {
                self.data.push(b';');
                self.data.extend_from_slice(code.as_bytes());
            }
        }
        let (fg, bg) = (style.fg, style.bg);
        let _ = write!(
            self.data,
            ";38;2;{};{};{};48;2;{};{};{}m",
            fg.r, fg.g, fg.b, bg.r, bg.g, bg.b
        );
        self.style = Some(style);
    }

    /// Write one symbol in the current style.
    pub fn write_char(&mut self, c: char) {
        let mut utf8 = [0; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }

    /// Reset all attributes.
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
        self.style = None;
    }

    /// Clear the entire screen.
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Flush to a writer in a single call.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}
