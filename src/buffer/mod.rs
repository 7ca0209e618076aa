//! Buffer module: The off-screen grid that widgets paint into.
//!
//! This module contains:
//! - [`Cell`]: One column of styled text
//! - [`Buffer`]: A grid of cells representing the terminal screen
//! - [`Rgb`], [`Style`], [`Modifiers`]: Styling

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use buffer::{text_columns, Buffer};
pub use cell::{Cell, Modifiers, Rgb, Style};
