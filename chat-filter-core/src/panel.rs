//! Selection state behind the filter panel.
//!
//! Every mutator returns the resulting `ChatFilters`, so the component
//! emits exactly one snapshot per user action and that snapshot always
//! carries all three fields as they are after the action.

use crate::dates::format_display_date;
use crate::filters::ChatFilters;
use crate::project::ProjectCatalog;
use chrono::NaiveDate;
use std::fmt;

/// Project, start date and end date as currently selected in the panel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterPanelState {
    selected_project: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl FilterPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_project(&self) -> &str {
        &self.selected_project
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Select a project by dropdown key. `None` (no option chosen) clears
    /// the project filter. Keys outside the catalog are kept verbatim.
    pub fn select_project(&mut self, key: Option<&str>) -> ChatFilters {
        self.selected_project = key.unwrap_or_default().to_string();
        self.snapshot()
    }

    pub fn select_start_date(&mut self, date: Option<NaiveDate>) -> ChatFilters {
        self.start_date = date;
        self.snapshot()
    }

    pub fn select_end_date(&mut self, date: Option<NaiveDate>) -> ChatFilters {
        self.end_date = date;
        self.snapshot()
    }

    /// Reset all three fields at once.
    pub fn clear_all(&mut self) -> ChatFilters {
        *self = Self::default();
        self.snapshot()
    }

    pub fn snapshot(&self) -> ChatFilters {
        ChatFilters {
            project_id: self.selected_project.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// Summary line for the active filters, `None` while nothing is set.
    pub fn summary(&self, catalog: &ProjectCatalog) -> Option<ActiveFilterSummary> {
        if *self == Self::default() {
            return None;
        }
        Some(ActiveFilterSummary {
            project_label: catalog
                .label_for(&self.selected_project)
                .map(str::to_string),
            start_date: self.start_date.as_ref().map(format_display_date),
            end_date: self.end_date.as_ref().map(format_display_date),
        })
    }
}

/// Display-only parts of the "Aktive Filter" line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilterSummary {
    /// Absent for the empty or an unknown project id.
    pub project_label: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ActiveFilterSummary {
    /// The individual tags in display order.
    pub fn tags(&self) -> Vec<String> {
        let mut tags = Vec::with_capacity(3);
        if let Some(label) = &self.project_label {
            tags.push(format!("📁 {}", label));
        }
        if let Some(start) = &self.start_date {
            tags.push(format!("📅 Ab: {}", start));
        }
        if let Some(end) = &self.end_date {
            tags.push(format!("📅 Bis: {}", end));
        }
        tags
    }
}

impl fmt::Display for ActiveFilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aktive Filter:")?;
        for tag in self.tags() {
            write!(f, " {}", tag)?;
        }
        Ok(())
    }
}
