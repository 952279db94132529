//! Chat log viewer
//!
//! Hosts the `FilterPanel` and lists the chat log entries matching the
//! filters it last reported.
//!
//! Data flow:
//! 1. `include_str!` embeds the project table and the chat log CSVs.
//! 2. On mount: parse both; a broken project table falls back to the
//!    built-in catalog.
//! 3. On every filter change: store the snapshot and re-filter the list.

mod chat_log;

use chat_filter_core::{dates, ChatFilters, ProjectCatalog};
use chat_filter_ui::FilterPanel;
use chat_log::{parse_chat_log, visible_entries, ChatLogEntry};
use dioxus::prelude::*;

static PROJECTS_CSV: &str = include_str!("../../fixtures/projects.csv");
static CHAT_LOG_CSV: &str = include_str!("../../fixtures/chat_log.csv");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("chat-log-root"))
        .launch(App);
}

fn load_catalog() -> ProjectCatalog {
    match ProjectCatalog::from_csv(PROJECTS_CSV) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load project table, using built-in: {}", e);
            ProjectCatalog::default()
        }
    }
}

/// "date · project · author" line above each message.
fn entry_meta(catalog: &ProjectCatalog, entry: &ChatLogEntry) -> String {
    let project = catalog
        .label_for(&entry.project_id)
        .unwrap_or(entry.project_id.as_str());
    format!(
        "{} · {} · {}",
        dates::format_display_date(&entry.date),
        project,
        entry.author
    )
}

#[component]
fn App() -> Element {
    let catalog = use_hook(load_catalog);
    let mut entries: Signal<Vec<ChatLogEntry>> = use_signal(Vec::new);
    let mut error_msg: Signal<Option<String>> = use_signal(|| None);
    let mut filters: Signal<ChatFilters> = use_signal(ChatFilters::default);

    use_effect(move || match parse_chat_log(CHAT_LOG_CSV) {
        Ok(parsed) => entries.set(parsed),
        Err(e) => {
            log::error!("Failed to load chat log: {}", e);
            error_msg.set(Some(format!("Chat-Verlauf konnte nicht geladen werden: {}", e)));
        }
    });

    let current = filters.read().clone();
    let rows: Vec<(String, String)> = visible_entries(&entries.read(), &current)
        .into_iter()
        .map(|entry| (entry_meta(&catalog, entry), entry.message.clone()))
        .collect();
    let filters_json = serde_json::to_string(&current).unwrap_or_default();

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = error_msg.read().as_ref() {
                div {
                    style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                    strong { "Fehler: " }
                    "{err}"
                }
            }

            FilterPanel {
                catalog: catalog.clone(),
                on_filters_change: move |next: ChatFilters| {
                    log::info!("Filters changed: {}", serde_json::to_string(&next).unwrap_or_default());
                    filters.set(next);
                },
            }

            if rows.is_empty() {
                p {
                    style: "padding: 24px; color: #666; text-align: center;",
                    "Keine Einträge für die gewählten Filter."
                }
            } else {
                ul {
                    style: "list-style: none; padding: 0; margin: 0;",
                    for (meta, message) in rows.iter() {
                        li {
                            style: "padding: 8px 0; border-bottom: 1px solid #eee;",
                            div {
                                style: "font-size: 12px; color: #888;",
                                "{meta}"
                            }
                            div { "{message}" }
                        }
                    }
                }
            }

            p {
                style: "font-size: 11px; color: #888; margin-top: 8px;",
                code { "{filters_json}" }
            }
        }
    }
}
