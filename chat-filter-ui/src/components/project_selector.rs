//! Dropdown selector for choosing a project.

use chat_filter_core::ProjectOption;
use dioxus::prelude::*;

/// Project dropdown. Reports the key of the chosen option; the
/// "all projects" option reports `""`.
#[component]
pub fn ProjectSelector(
    options: Vec<ProjectOption>,
    selected: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            style: "flex: 1; display: flex; flex-direction: column; gap: 4px;",
            label {
                r#for: "project-select",
                style: "font-weight: bold;",
                "Projekt"
            }
            select {
                id: "project-select",
                title: "Projekt auswählen",
                style: "width: 100%; padding: 6px 8px; border: 1px solid #ddd; border-radius: 4px;",
                onchange: move |evt| {
                    on_select.call(evt.value());
                },
                for project in options.iter() {
                    option {
                        value: "{project.key}",
                        selected: project.key == selected,
                        "{project.label}"
                    }
                }
            }
        }
    }
}
