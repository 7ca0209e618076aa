//! Variant: Which optimization steps the root applies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three stages of the walkthrough.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// No guards: every leaf renders on every root evaluation.
    Plain,
    /// Guards on, but the data object and callback are rebuilt on every
    /// evaluation, so the surname card still renders on every keystroke.
    Naive,
    /// Guards on, data object and callback cached on their dependencies.
    #[default]
    Optimized,
}

impl Variant {
    /// All variants in walkthrough order.
    pub const ALL: [Self; 3] = [Self::Plain, Self::Naive, Self::Optimized];

    /// Whether leaves are wrapped in shallow-comparing guards.
    pub const fn guards_leaves(self) -> bool {
        !matches!(self, Self::Plain)
    }

    /// Whether structured props go through dependency-keyed caches.
    pub const fn caches_props(self) -> bool {
        matches!(self, Self::Optimized)
    }

    /// One-line explanation for the status bar.
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Plain => "no memoization",
            Self::Naive => "memoized cards, fresh data + callback each render",
            Self::Optimized => "memoized cards, memoized data + callback",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Plain => "plain",
            Self::Naive => "naive",
            Self::Optimized => "optimized",
        })
    }
}
