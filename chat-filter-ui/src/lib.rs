//! Dioxus components for filtering the chat log view.
//!
//! `FilterPanel` owns the selection state and reports every change to its
//! owner as a `ChatFilters` snapshot. The remaining components are the
//! controls it is built from.

pub mod components;

pub use chat_filter_core::{ChatFilters, ProjectCatalog};
pub use components::FilterPanel;
