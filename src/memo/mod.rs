//! Memo module: Equality-gated recomputation.
//!
//! Everything in here answers one question: "did my inputs change since the
//! last time I ran?" The answer is always a *shallow* comparison:
//!
//! - Primitive values (`String`, `&str`, integers, `bool`) compare by value.
//! - Shared values ([`Shared`]) and callbacks ([`Callback`]) compare by
//!   pointer identity. Two separately allocated but structurally identical
//!   values are *different*.
//!
//! # Building blocks
//!
//! - [`ShallowEq`]: field-level comparison.
//! - [`Props`]: key-by-key comparison of a whole prop set, usually derived
//!   with [`shallow_props!`](crate::shallow_props).
//! - [`Memo`]: render-memoization guard around a [`Component`](crate::component::Component).
//! - [`DepCache`]: single-slot cache keyed on an explicit dependency tuple,
//!   with [`MemoSlot`] and [`CallbackSlot`] built on top.
//!
//! ```text
//!   deps ──▶ ShallowEq? ──yes──▶ reuse cached value / view
//!                 │
//!                 no
//!                 ▼
//!            recompute ──▶ store (deps, value)
//! ```

mod cache;
mod guard;
mod shallow;
mod shared;

pub use cache::{CallbackSlot, DepCache, MemoSlot};
pub use guard::{GuardPolicy, Memo, RenderOutcome};
pub use shallow::{Props, ShallowEq};
pub use shared::{Callback, Shared};
