//! View: The textual output of a component render.

/// Lines of text produced by a render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    lines: Vec<String>,
}

impl View {
    /// An empty view.
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a line (builder style).
    #[must_use]
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// All lines, top to bottom.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
