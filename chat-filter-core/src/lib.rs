//! Framework-free core of the chat log filter panel.
//!
//! - `filters`: the `ChatFilters` snapshot handed to the owner
//! - `project`: the project id -> label table
//! - `panel`: `FilterPanelState`, the selection state behind the panel
//! - `dates`: parsing and formatting of calendar dates

pub mod dates;
pub mod filters;
pub mod panel;
pub mod project;

pub use filters::ChatFilters;
pub use panel::{ActiveFilterSummary, FilterPanelState};
pub use project::{ProjectCatalog, ProjectOption};
