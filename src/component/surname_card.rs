//! Surname card: label, value, a structured value and an unused callback.
//!
//! The structured value and the callback are the two props that compare by
//! identity. The card never calls `on_select`; it is only there so the
//! caller has to decide whether to keep its reference stable.

use super::{Component, View, RENDER_TARGET};
use crate::memo::{Callback, Shared};
use serde::Serialize;

/// Structured value derived from the surname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurnameData {
    /// The surname this data was derived from.
    pub surname: String,
}

impl SurnameData {
    /// Derive the data object for `surname`.
    pub fn new(surname: &str) -> Self {
        Self {
            surname: surname.to_string(),
        }
    }
}

/// Props of [`SurnameCard`].
#[derive(Debug, Clone)]
pub struct SurnameCardProps {
    /// Label shown before the value.
    pub label: &'static str,
    /// The surname to display.
    pub value: String,
    /// Derived data, compared by identity.
    pub data: Shared<SurnameData>,
    /// Callback, compared by identity. Never invoked.
    pub on_select: Callback,
}

crate::shallow_props!(SurnameCardProps {
    label,
    value,
    data,
    on_select
});

/// Leaf card showing the surname and its serialized data object.
#[derive(Debug, Default, Clone, Copy)]
pub struct SurnameCard;

impl SurnameCard {
    fn data_text(data: &SurnameData) -> String {
        serde_json::to_string(data).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to serialize surname data");
            format!("{data:?}")
        })
    }
}

impl Component for SurnameCard {
    type Props = SurnameCardProps;
    const NAME: &'static str = "SurnameCard";

    fn render(&self, props: &SurnameCardProps) -> View {
        let data = Self::data_text(&props.data);
        tracing::info!(
            target: RENDER_TARGET,
            component = Self::NAME,
            value = %props.value,
            data = %data,
            "render"
        );
        View::new()
            .line(format!("{}: {}", props.label, props.value))
            .line(format!("Data: {data}"))
    }
}
