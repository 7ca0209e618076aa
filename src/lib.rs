//! # Memoscope
//!
//! A terminal walkthrough of render memoization.
//!
//! A root component holds two text fields, name and surname, and renders two
//! leaf cards from them. Every keystroke re-evaluates the root. The question
//! the demo answers is which cards render again:
//!
//! - **plain**: both, every time
//! - **naive**: cards are guarded by a shallow prop comparison, but the
//!   surname card receives a freshly built data object and callback on every
//!   evaluation, so it still renders on every keystroke
//! - **optimized**: the data object and callback come from dependency-keyed
//!   caches, and typing into the name field never renders the surname card
//!
//! ## Core Concepts
//!
//! - **Shallow equality**: values compare by value, [`Shared`] values and
//!   [`Callback`]s by identity
//! - **Render guard**: [`Memo`] skips a component whose props are shallowly
//!   equal to the last rendered ones
//! - **Dependency caches**: [`MemoSlot`] and [`CallbackSlot`] hand back the
//!   same allocation while their dependencies are unchanged
//!
//! ## Example
//!
//! ```rust
//! use memoscope::{Edit, Field, Session, Variant};
//!
//! let mut session = Session::new(Variant::Optimized);
//! session.replay(&Edit::typing(Field::Surname, "Doe"));
//! session.replay(&Edit::typing(Field::Name, "Jane"));
//!
//! // Mount plus one render per surname keystroke; name keystrokes never
//! // reach the surname card.
//! assert_eq!(session.stats().surname_renders, 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod app;
pub mod buffer;
pub mod component;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod memo;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use app::{DemoApp, Edit, Field, Frame, RenderStats, Root, Session, State, Variant};
pub use buffer::{Buffer, Cell, Modifiers, Rgb, Style};
pub use component::{Component, View};
pub use config::DemoConfig;
pub use error::{Error, Result};
pub use layout::Rect;
pub use memo::{Callback, CallbackSlot, DepCache, Memo, MemoSlot, Props, RenderOutcome, Shared, ShallowEq};
