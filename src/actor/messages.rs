//! Events sent from the input thread to the main loop.

/// The keys the demo reacts to.
///
/// Anything else crossterm reports (function keys, media keys, ...) is
/// dropped on the input thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Text input.
    Char(char),
    /// Erase before the cursor.
    Backspace,
    /// Erase under the cursor.
    Delete,
    /// Cursor one character left.
    Left,
    /// Cursor one character right.
    Right,
    /// Cursor to the start of the field.
    Home,
    /// Cursor to the end of the field.
    End,
    /// Focus the previous field.
    Up,
    /// Focus the next field.
    Down,
    /// Focus the next field.
    Tab,
    /// Shift+Tab: focus the previous field.
    BackTab,
    /// Leave the demo.
    Esc,
}

/// Modifier keys held with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift.
    pub shift: bool,
    /// Control. `Ctrl+C` quits; other control chords are not text.
    pub control: bool,
    /// Alt / Option.
    pub alt: bool,
}

impl KeyModifiers {
    /// Nothing held.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Control only.
    pub const CONTROL: Self = Self {
        control: true,
        ..Self::NONE
    };
}

/// One message on the input channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Key press (releases and repeats are filtered out).
    Key {
        /// Which key.
        code: KeyCode,
        /// Held modifiers.
        modifiers: KeyModifiers,
    },

    /// The terminal has a new size.
    Resize {
        /// Columns.
        width: u16,
        /// Rows.
        height: u16,
    },

    /// Bracketed paste, delivered as one event.
    Paste(String),

    /// Polling or reading the terminal failed.
    Error(String),

    /// The input thread is stopping.
    Shutdown,
}

impl InputEvent {
    /// A key press without modifiers.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}
