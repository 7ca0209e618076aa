//! Layout module: Screen areas for the demo's fixed arrangement.
//!
//! The demo screen is a static column: status bar, two inputs, two cards,
//! help line. It is recomputed only on terminal resize.

mod rect;
mod screen;

pub use rect::Rect;
pub use screen::ScreenLayout;
