//! Name card: label and a single string value.

use super::{Component, View, RENDER_TARGET};

/// Props of [`NameCard`]. Both fields compare by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCardProps {
    /// Label shown before the value.
    pub label: &'static str,
    /// The value to display.
    pub value: String,
}

crate::shallow_props!(NameCardProps { label, value });

/// Leaf card showing one labelled string.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameCard;

impl Component for NameCard {
    type Props = NameCardProps;
    const NAME: &'static str = "NameCard";

    fn render(&self, props: &NameCardProps) -> View {
        tracing::info!(
            target: RENDER_TARGET,
            component = Self::NAME,
            value = %props.value,
            "render"
        );
        View::new().line(format!("{}: {}", props.label, props.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_card_render() {
        let view = NameCard.render(&NameCardProps {
            label: "Name",
            value: String::from("Jane"),
        });
        assert_eq!(view.lines(), ["Name: Jane"]);
    }

    #[test]
    fn test_name_card_empty_value() {
        let view = NameCard.render(&NameCardProps {
            label: "Name",
            value: String::new(),
        });
        assert_eq!(view.text(), "Name: ");
    }
}
