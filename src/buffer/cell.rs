//! Cell: One terminal column of styled text.

use bitflags::bitflags;

/// 24-bit color sent as a true-color SGR sequence.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb {
    /// Color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Terminal background of every unpainted cell.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Default foreground.
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

bitflags! {
    /// SGR attributes layered on top of the colors.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct Modifiers: u8 {
        /// SGR 1.
        const BOLD = 0b0000_0001;
        /// SGR 2.
        const DIM = 0b0000_0010;
        /// SGR 3.
        const ITALIC = 0b0000_0100;
        /// SGR 4.
        const UNDERLINE = 0b0000_1000;
        /// SGR 7.
        const REVERSED = 0b0001_0000;
    }
}

/// Foreground, background and modifiers applied together.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Style {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// White on black, no modifiers.
    pub const DEFAULT: Self = Self::new(Rgb::WHITE, Rgb::BLACK);

    /// Create a style without modifiers.
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            modifiers: Modifiers::empty(),
        }
    }

    /// Same style with extra modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single cell: one symbol plus its style.
///
/// Wide symbols (CJK, emoji) occupy two columns; the second column holds a
/// continuation cell that the screen writer skips.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    symbol: char,
    style: Style,
    wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// A blank cell with the default style.
    pub const EMPTY: Self = Self::new(' ');

    /// Create a cell with the default style.
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            style: Style::DEFAULT,
            wide_continuation: false,
        }
    }

    /// Create a cell with an explicit style.
    pub const fn styled(symbol: char, style: Style) -> Self {
        Self {
            symbol,
            style,
            wide_continuation: false,
        }
    }

    /// The placeholder occupying the right half of a wide symbol.
    pub const fn wide_continuation(style: Style) -> Self {
        Self {
            symbol: ' ',
            style,
            wide_continuation: true,
        }
    }

    /// The displayed symbol.
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// The cell style.
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Check if this is the right half of a wide symbol.
    pub const fn is_wide_continuation(&self) -> bool {
        self.wide_continuation
    }

    /// Same cell with a new foreground color.
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.style.fg = fg;
        self
    }

    /// Same cell with a new background color.
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.style.bg = bg;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.symbol(), ' ');
        assert_eq!(cell.style(), Style::DEFAULT);
        assert!(!cell.is_wide_continuation());
    }

    #[test]
    fn test_cell_equality_includes_style() {
        let a = Cell::new('A').with_fg(Rgb::new(255, 0, 0));
        let b = Cell::new('A').with_fg(Rgb::new(0, 255, 0));
        assert_ne!(a, b);
        assert_eq!(a, a.with_fg(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_rgb_debug() {
        assert_eq!(format!("{:?}", Rgb::new(255, 128, 0)), "#ff8000");
    }
}
