//! Terminal output: ANSI encoding and row-level repainting.

mod output;
mod screen;

pub use output::OutputBuffer;
pub use screen::{PresentStats, ScreenWriter};
