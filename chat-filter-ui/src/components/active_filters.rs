//! "Aktive Filter" summary line.

use chat_filter_core::ActiveFilterSummary;
use dioxus::prelude::*;

#[component]
pub fn ActiveFilters(summary: ActiveFilterSummary) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 8px; align-items: center; padding: 8px 12px; background: #F3F6FA; border-radius: 4px; font-size: 13px;",
            strong { "Aktive Filter:" }
            for tag in summary.tags() {
                span {
                    style: "padding: 2px 8px; background: #E3EEF9; border: 1px solid #B6CFEA; border-radius: 12px;",
                    "{tag}"
                }
            }
        }
    }
}
