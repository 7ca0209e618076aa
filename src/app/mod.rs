//! App: The root component, its variants and the two ways to drive it.
//!
//! - [`Root`]: owns the name and surname [`State`] cells and composes the
//!   two cards
//! - [`Variant`]: which optimization steps the root applies
//! - [`Session`]: replays scripted [`Edit`]s without a terminal
//! - [`DemoApp`] / [`run`]: the interactive terminal page

mod demo;
mod root;
mod session;
mod state;
mod variant;

pub use demo::{run, Control, DemoApp};
pub use root::{Frame, RenderStats, Root, NAME_LABEL, SURNAME_LABEL};
pub use session::{write_report, Edit, Field, Session};
pub use state::State;
pub use variant::Variant;
