//! Labelled date input.

use chat_filter_core::dates;
use chrono::NaiveDate;
use dioxus::prelude::*;

/// A single `<input type="date">`. Emptying the input reports `None`.
#[component]
pub fn DateField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: Option<NaiveDate>,
    on_change: EventHandler<Option<NaiveDate>>,
) -> Element {
    let current = dates::input_value(value);

    rsx! {
        div {
            style: "flex: 1; display: flex; flex-direction: column; gap: 4px;",
            label {
                r#for: "{id}",
                style: "font-weight: bold;",
                "{label}"
            }
            input {
                id: "{id}",
                r#type: "date",
                placeholder: "{placeholder}",
                value: "{current}",
                style: "padding: 6px 8px; border: 1px solid #ddd; border-radius: 4px;",
                onchange: move |evt| {
                    on_change.call(dates::parse_input_date(&evt.value()));
                },
            }
        }
    }
}
