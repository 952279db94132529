//! Project and date range filter for the chat log view.

use super::{ActiveFilters, DateField, ProjectSelector};
use chat_filter_core::{ChatFilters, FilterPanelState, ProjectCatalog};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FilterPanelProps {
    /// Receives the full filter tuple after every change, once per change.
    pub on_filters_change: EventHandler<ChatFilters>,
    /// Options for the project dropdown
    #[props(default)]
    pub catalog: ProjectCatalog,
}

/// Filter panel with a project dropdown, start/end date inputs and a reset
/// button. Its selection state is local; the owner only sees snapshots.
#[component]
pub fn FilterPanel(props: FilterPanelProps) -> Element {
    let mut panel = use_signal(FilterPanelState::new);
    let on_filters_change = props.on_filters_change;

    let emit = move |filters: ChatFilters| {
        log::debug!("FilterPanel: emitting {:?}", filters);
        on_filters_change.call(filters);
    };

    let state = panel.read().clone();
    let summary = state.summary(&props.catalog);

    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 6px; background: #fff;",
            div {
                style: "display: flex; flex-direction: column; gap: 15px;",
                label {
                    style: "font-weight: bold; font-size: 16px;",
                    "🔍 Filter"
                }
                div {
                    style: "display: flex; gap: 20px; align-items: flex-end;",
                    ProjectSelector {
                        options: props.catalog.options().to_vec(),
                        selected: state.selected_project().to_string(),
                        on_select: move |key: String| {
                            let filters = panel.write().select_project(Some(&key));
                            emit(filters);
                        },
                    }
                    DateField {
                        id: "filter-start-date",
                        label: "Von Datum",
                        placeholder: "Startdatum wählen",
                        value: state.start_date(),
                        on_change: move |date| {
                            let filters = panel.write().select_start_date(date);
                            emit(filters);
                        },
                    }
                    DateField {
                        id: "filter-end-date",
                        label: "Bis Datum",
                        placeholder: "Enddatum wählen",
                        value: state.end_date(),
                        on_change: move |date| {
                            let filters = panel.write().select_end_date(date);
                            emit(filters);
                        },
                    }
                    button {
                        title: "Filter zurücksetzen",
                        style: "padding: 6px 12px; border: 1px solid #ccc; border-radius: 4px; background: #f5f5f5; cursor: pointer;",
                        onclick: move |_| {
                            let filters = panel.write().clear_all();
                            emit(filters);
                        },
                        "✕ Zurücksetzen"
                    }
                }
                if let Some(summary) = summary {
                    ActiveFilters { summary }
                }
            }
        }
    }
}
