//! Render-memoization guard.
//!
//! [`Memo`] wraps a component and remembers the props and view of its last
//! render. A new render only happens when the incoming props differ from the
//! remembered ones under shallow comparison; otherwise the previous view is
//! reused as-is.

use super::shallow::Props;
use crate::component::{Component, View};

/// Whether a guard compares props before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardPolicy {
    /// Render on every call.
    Always,
    /// Skip the render when props are shallowly equal to the previous ones.
    #[default]
    Shallow,
}

/// What a guard did with a set of props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The component's render logic ran.
    Rendered,
    /// Props were unchanged; the previous view was reused.
    Skipped,
}

impl RenderOutcome {
    /// Returns `true` if the component actually rendered.
    pub const fn is_rendered(self) -> bool {
        matches!(self, Self::Rendered)
    }
}

/// A component wrapped in a render-memoization guard.
#[derive(Debug)]
pub struct Memo<C: Component> {
    component: C,
    policy: GuardPolicy,
    /// Props of the last render. `None` until mounted.
    previous: Option<C::Props>,
    /// View produced by the last render.
    view: View,
    render_count: u64,
    skip_count: u64,
}

impl<C: Component> Memo<C> {
    /// Wrap `component` with shallow prop comparison.
    pub fn new(component: C) -> Self {
        Self::with_policy(component, GuardPolicy::Shallow)
    }

    /// Wrap `component` without any comparison: every call renders.
    pub fn unguarded(component: C) -> Self {
        Self::with_policy(component, GuardPolicy::Always)
    }

    /// Wrap `component` with an explicit policy.
    pub fn with_policy(component: C, policy: GuardPolicy) -> Self {
        Self {
            component,
            policy,
            previous: None,
            view: View::default(),
            render_count: 0,
            skip_count: 0,
        }
    }

    /// Offer a new set of props to the component.
    pub fn render(&mut self, props: C::Props) -> RenderOutcome {
        let changed = match (self.policy, &self.previous) {
            (GuardPolicy::Shallow, Some(previous)) => {
                let changed = props.changed_keys(previous);
                if changed.is_empty() {
                    self.skip_count += 1;
                    tracing::trace!(component = C::NAME, "props unchanged, render skipped");
                    return RenderOutcome::Skipped;
                }
                changed
            }
            _ => Vec::new(),
        };

        if self.previous.is_none() {
            tracing::debug!(component = C::NAME, "mount");
        } else if !changed.is_empty() {
            tracing::debug!(component = C::NAME, changed = ?changed, "props changed");
        }

        self.view = self.component.render(&props);
        self.previous = Some(props);
        self.render_count += 1;
        RenderOutcome::Rendered
    }

    /// The view from the most recent render (empty before the first one).
    pub const fn view(&self) -> &View {
        &self.view
    }

    /// The props the current view was rendered from.
    pub const fn props(&self) -> Option<&C::Props> {
        self.previous.as_ref()
    }

    /// The guard's comparison policy.
    pub const fn policy(&self) -> GuardPolicy {
        self.policy
    }

    /// How many times the component's render logic ran.
    pub const fn render_count(&self) -> u64 {
        self.render_count
    }

    /// How many renders were skipped.
    pub const fn skip_count(&self) -> u64 {
        self.skip_count
    }

    /// The wrapped component.
    pub const fn component(&self) -> &C {
        &self.component
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memo::Shared;

    #[derive(Debug, Default)]
    struct Echo;

    #[derive(Debug, Clone)]
    struct EchoProps {
        text: String,
        extra: Shared<u32>,
    }

    crate::shallow_props!(EchoProps { text, extra });

    impl Component for Echo {
        type Props = EchoProps;
        const NAME: &'static str = "Echo";

        fn render(&self, props: &EchoProps) -> View {
            View::new().line(format!("{} {}", props.text, *props.extra))
        }
    }

    fn props(text: &str, extra: &Shared<u32>) -> EchoProps {
        EchoProps {
            text: text.to_string(),
            extra: extra.clone(),
        }
    }

    #[test]
    fn test_first_render_always_runs() {
        let mut memo = Memo::new(Echo);
        let extra = Shared::new(1);

        assert_eq!(memo.render(props("a", &extra)), RenderOutcome::Rendered);
        assert_eq!(memo.view().text(), "a 1");
        assert_eq!(memo.render_count(), 1);
    }

    #[test]
    fn test_same_props_render_once() {
        let mut memo = Memo::new(Echo);
        let extra = Shared::new(1);

        memo.render(props("a", &extra));
        assert_eq!(memo.render(props("a", &extra)), RenderOutcome::Skipped);
        assert_eq!(memo.render_count(), 1);
        assert_eq!(memo.skip_count(), 1);
    }

    #[test]
    fn test_changed_value_renders_fresh_view() {
        let mut memo = Memo::new(Echo);
        let extra = Shared::new(1);

        memo.render(props("a", &extra));
        assert_eq!(memo.render(props("b", &extra)), RenderOutcome::Rendered);
        assert_eq!(memo.view().text(), "b 1");
    }

    #[test]
    fn test_new_allocation_defeats_guard() {
        let mut memo = Memo::new(Echo);

        memo.render(props("a", &Shared::new(1)));
        let outcome = memo.render(props("a", &Shared::new(1)));

        assert_eq!(outcome, RenderOutcome::Rendered);
        assert_eq!(memo.render_count(), 2);
    }

    #[test]
    fn test_unguarded_always_renders() {
        let mut memo = Memo::unguarded(Echo);
        let extra = Shared::new(1);

        for _ in 0..4 {
            assert!(memo.render(props("a", &extra)).is_rendered());
        }
        assert_eq!(memo.render_count(), 4);
        assert_eq!(memo.skip_count(), 0);
    }
}
