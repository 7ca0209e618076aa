//! Components: Presentational units rendered from props.
//!
//! A [`Component`] turns props into a [`View`]: a few lines of text. The leaf
//! components in this module own no state and log every render, so the
//! render log shows exactly how often each one ran.

mod name_card;
mod surname_card;
mod view;

pub use name_card::{NameCard, NameCardProps};
pub use surname_card::{SurnameCard, SurnameCardProps, SurnameData};
pub use view::View;

use crate::memo::Props;

/// Target used for the per-render log events of leaf components.
pub const RENDER_TARGET: &str = "memoscope::render";

/// A unit that renders props into a view.
///
/// Implementations must be deterministic: the same props always produce the
/// same view. Memoization relies on it.
pub trait Component {
    /// The prop set this component renders from.
    type Props: Props + std::fmt::Debug;

    /// Display name used in logs.
    const NAME: &'static str;

    /// Produce the view for `props`.
    fn render(&self, props: &Self::Props) -> View;
}
