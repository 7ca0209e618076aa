//! `ScreenWriter`: Presents buffers, repainting only rows that changed.

use super::output::OutputBuffer;
use crate::buffer::Buffer;
use std::io::{self, Write};

/// What a present call wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentStats {
    /// Rows repainted.
    pub rows: u16,
    /// Bytes sent to the terminal.
    pub bytes: usize,
    /// Whether the whole screen was repainted.
    pub full: bool,
}

/// Remembers the last presented frame and diffs against it by row.
#[derive(Debug, Default)]
pub struct ScreenWriter {
    previous: Option<Buffer>,
    output: OutputBuffer,
}

impl ScreenWriter {
    /// Create a writer with no frame on screen yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the last frame; the next present repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Write `next` to `writer`.
    pub fn present<W: Write>(&mut self, next: &Buffer, writer: &mut W) -> io::Result<PresentStats> {
        self.output.clear();

        let previous = self
            .previous
            .as_ref()
            .filter(|prev| prev.width() == next.width() && prev.height() == next.height());
        let full = previous.is_none();
        if full {
            self.output.clear_screen();
        }

        let mut rows = 0;
        for y in 0..next.height() {
            let Some(row) = next.row(y) else { break };
            if previous.and_then(|prev| prev.row(y)) == Some(row) {
                continue;
            }
            rows += 1;
            self.output.cursor_move(0, y);
            for cell in row.iter().filter(|cell| !cell.is_wide_continuation()) {
                self.output.set_style(cell.style());
                self.output.write_char(cell.symbol());
            }
        }

        if rows > 0 || full {
            self.output.reset_attrs();
            self.output.flush_to(writer)?;
        }

        let stats = PresentStats {
            rows,
            bytes: if rows > 0 || full { self.output.as_bytes().len() } else { 0 },
            full,
        };
        tracing::trace!(rows = stats.rows, bytes = stats.bytes, full, "present");
        self.previous = Some(next.clone());
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Style;

    #[test]
    fn test_first_present_is_full() {
        let mut writer = ScreenWriter::new();
        let buffer = Buffer::new(10, 3);
        let mut sink = Vec::new();

        let stats = writer.present(&buffer, &mut sink).expect("present");
        assert!(stats.full);
        assert_eq!(stats.rows, 3);
        assert!(sink.starts_with(b"\x1b[2J"));
    }

    #[test]
    fn test_only_changed_rows_repaint() {
        let mut writer = ScreenWriter::new();
        let mut buffer = Buffer::new(10, 3);
        let mut sink = Vec::new();
        writer.present(&buffer, &mut sink).expect("present");

        buffer.draw_text(0, 1, "Doe", 10, Style::DEFAULT);
        sink.clear();
        let stats = writer.present(&buffer, &mut sink).expect("present");

        assert!(!stats.full);
        assert_eq!(stats.rows, 1);
        assert!(sink.starts_with(b"\x1b[2;1H"));
    }

    #[test]
    fn test_unchanged_frame_writes_nothing() {
        let mut writer = ScreenWriter::new();
        let buffer = Buffer::new(4, 2);
        let mut sink = Vec::new();
        writer.present(&buffer, &mut sink).expect("present");
        sink.clear();

        let stats = writer.present(&buffer, &mut sink).expect("present");
        assert_eq!(stats, PresentStats::default());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_invalidate_forces_full() {
        let mut writer = ScreenWriter::new();
        let buffer = Buffer::new(4, 2);
        let mut sink = Vec::new();
        writer.present(&buffer, &mut sink).expect("present");
        writer.invalidate();

        assert!(writer.present(&buffer, &mut sink).expect("present").full);
    }
}
