//! Reusable Dioxus RSX components for the filter panel.

mod active_filters;
mod date_field;
mod filter_panel;
mod project_selector;

pub use active_filters::ActiveFilters;
pub use date_field::DateField;
pub use filter_panel::{FilterPanel, FilterPanelProps};
pub use project_selector::ProjectSelector;
