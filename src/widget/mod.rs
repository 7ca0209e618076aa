//! Widgets: What the demo paints on screen.
//!
//! - [`TextInput`]: labelled field bound to one state cell
//! - [`Card`]: latest view of one component plus its render badge
//! - [`StatusBar`]: variant and running counters
//!
//! All of them implement [`Widget`].

mod card;
mod status_bar;
mod text_input;
mod traits;

pub use card::Card;
pub use status_bar::{Align, StatusBar};
pub use text_input::{InputOutcome, TextInput, TextInputConfig};
pub use traits::Widget;
