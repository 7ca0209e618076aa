//! Root: Owns the two text state cells and composes the two cards.
//!
//! Every call to [`Root::evaluate`] is one root re-evaluation. It builds
//! fresh prop sets for both cards and offers them to the cards' guards.
//! How the structured props are built depends on the [`Variant`]; that
//! choice alone decides whether a name edit reaches the surname card.

use super::state::State;
use super::variant::Variant;
use crate::component::{
    NameCard, NameCardProps, SurnameCard, SurnameCardProps, SurnameData, View,
};
use crate::memo::{Callback, CallbackSlot, Memo, MemoSlot, RenderOutcome, Shared};

/// Label shown by the name card.
pub const NAME_LABEL: &str = "Name";
/// Label shown by the surname card.
pub const SURNAME_LABEL: &str = "Surname";

/// Render counters for one root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Root evaluations, including the mount.
    pub root_evaluations: u64,
    /// Times the name card's render logic ran.
    pub name_renders: u64,
    /// Times the surname card's render logic ran.
    pub surname_renders: u64,
    /// Name card renders skipped by its guard.
    pub name_skips: u64,
    /// Surname card renders skipped by its guard.
    pub surname_skips: u64,
}

/// The result of one root evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Current name card view.
    pub name: View,
    /// Current surname card view.
    pub surname: View,
    /// What the name card's guard did this evaluation.
    pub name_outcome: RenderOutcome,
    /// What the surname card's guard did this evaluation.
    pub surname_outcome: RenderOutcome,
    /// Counters after this evaluation.
    pub stats: RenderStats,
}

/// The root composition unit.
#[derive(Debug)]
pub struct Root {
    variant: Variant,
    name: State<String>,
    surname: State<String>,
    name_card: Memo<NameCard>,
    surname_card: Memo<SurnameCard>,
    /// `SurnameData` keyed on `(surname,)`.
    data_slot: MemoSlot<(String,), SurnameData>,
    /// `on_select` keyed on no dependencies at all.
    select_slot: CallbackSlot<()>,
    evaluations: u64,
}

impl Root {
    /// Create an unmounted root with empty name and surname.
    pub fn new(variant: Variant) -> Self {
        let (name_card, surname_card) = if variant.guards_leaves() {
            (Memo::new(NameCard), Memo::new(SurnameCard))
        } else {
            (Memo::unguarded(NameCard), Memo::unguarded(SurnameCard))
        };
        Self {
            variant,
            name: State::default(),
            surname: State::default(),
            name_card,
            surname_card,
            data_slot: MemoSlot::new(),
            select_slot: CallbackSlot::new(),
            evaluations: 0,
        }
    }

    /// The variant this root was built with.
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Current name.
    pub fn name(&self) -> &str {
        self.name.get()
    }

    /// Current surname.
    pub fn surname(&self) -> &str {
        self.surname.get()
    }

    /// Update the name cell. Returns `true` if it changed.
    pub fn set_name(&mut self, value: impl Into<String>) -> bool {
        self.name.set(value.into())
    }

    /// Update the surname cell. Returns `true` if it changed.
    pub fn set_surname(&mut self, value: impl Into<String>) -> bool {
        self.surname.set(value.into())
    }

    /// Re-evaluate the root and offer new props to both cards.
    pub fn evaluate(&mut self) -> Frame {
        self.evaluations += 1;
        tracing::debug!(
            evaluation = self.evaluations,
            variant = %self.variant,
            name = %self.name.get(),
            surname = %self.surname.get(),
            "root evaluate"
        );

        let name_outcome = self.name_card.render(NameCardProps {
            label: NAME_LABEL,
            value: self.name.get().clone(),
        });

        let surname = self.surname.get().clone();
        let (data, on_select) = if self.variant.caches_props() {
            (
                self.data_slot
                    .get((surname.clone(),), |(surname,)| SurnameData::new(surname)),
                self.select_slot.get((), || {}),
            )
        } else {
            (Shared::new(SurnameData::new(&surname)), Callback::noop())
        };
        let surname_outcome = self.surname_card.render(SurnameCardProps {
            label: SURNAME_LABEL,
            value: surname,
            data,
            on_select,
        });

        Frame {
            name: self.name_card.view().clone(),
            surname: self.surname_card.view().clone(),
            name_outcome,
            surname_outcome,
            stats: self.stats(),
        }
    }

    /// Current render counters.
    pub const fn stats(&self) -> RenderStats {
        RenderStats {
            root_evaluations: self.evaluations,
            name_renders: self.name_card.render_count(),
            surname_renders: self.surname_card.render_count(),
            name_skips: self.name_card.skip_count(),
            surname_skips: self.surname_card.skip_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(variant: Variant) -> Root {
        let mut root = Root::new(variant);
        root.evaluate();
        root
    }

    /// Append `word` to a field one character at a time, evaluating after
    /// every keystroke.
    fn type_into(root: &mut Root, surname: bool, word: &str) {
        let mut text = if surname { root.surname() } else { root.name() }.to_string();
        for c in word.chars() {
            text.push(c);
            let changed = if surname {
                root.set_surname(text.clone())
            } else {
                root.set_name(text.clone())
            };
            assert!(changed);
            root.evaluate();
        }
    }

    #[test]
    fn test_mount_renders_both_cards() {
        for variant in Variant::ALL {
            let root = mounted(variant);
            let stats = root.stats();
            assert_eq!(stats.root_evaluations, 1);
            assert_eq!(stats.name_renders, 1);
            assert_eq!(stats.surname_renders, 1);
        }
    }

    #[test]
    fn test_optimized_name_edits_skip_surname_card() {
        let mut root = mounted(Variant::Optimized);
        type_into(&mut root, false, "Jane Elizabeth");

        let stats = root.stats();
        assert_eq!(stats.root_evaluations, 15);
        assert_eq!(stats.name_renders, 15);
        assert_eq!(stats.surname_renders, 1);
        assert_eq!(stats.surname_skips, 14);
    }

    #[test]
    fn test_optimized_surname_renders_per_distinct_value() {
        let mut root = mounted(Variant::Optimized);
        let before = root.stats().surname_renders;
        type_into(&mut root, true, "Doe");

        assert_eq!(root.stats().surname_renders - before, 3);
        // The name card never saw a changed prop.
        assert_eq!(root.stats().name_renders, 1);
    }

    #[test]
    fn test_naive_name_edit_rerenders_surname_card() {
        let mut root = mounted(Variant::Naive);
        type_into(&mut root, false, "D");

        let stats = root.stats();
        assert_eq!(stats.surname_renders, 2);
        assert_eq!(stats.surname_skips, 0);

        type_into(&mut root, false, "o");
        assert_eq!(root.stats().surname_renders, 3);
    }

    #[test]
    fn test_plain_renders_everything() {
        let mut root = mounted(Variant::Plain);
        type_into(&mut root, true, "Doe");

        let stats = root.stats();
        assert_eq!(stats.name_renders, 4);
        assert_eq!(stats.surname_renders, 4);
        assert_eq!(stats.name_skips, 0);
    }

    #[test]
    fn test_repeat_evaluation_is_idempotent() {
        let mut root = mounted(Variant::Optimized);
        root.set_surname("Doe");
        let first = root.evaluate();
        let second = root.evaluate();

        assert_eq!(first.surname_outcome, RenderOutcome::Rendered);
        assert_eq!(second.surname_outcome, RenderOutcome::Skipped);
        assert_eq!(second.name_outcome, RenderOutcome::Skipped);
        assert_eq!(first.surname, second.surname);
    }

    #[test]
    fn test_display_never_stale() {
        for variant in Variant::ALL {
            let mut root = mounted(variant);
            root.set_name("Jane");
            root.evaluate();
            root.set_surname("Doe");
            let frame = root.evaluate();

            assert_eq!(frame.name.lines(), ["Name: Jane"]);
            assert_eq!(
                frame.surname.lines(),
                ["Surname: Doe", r#"Data: {"surname":"Doe"}"#]
            );
        }
    }

    #[test]
    fn test_unchanged_set_reports_false() {
        let mut root = mounted(Variant::Optimized);
        assert!(root.set_name("Jane"));
        assert!(!root.set_name("Jane"));
        assert_eq!(root.name(), "Jane");
    }
}
