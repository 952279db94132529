use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Snapshot of the filter panel, handed to the owner on every change.
///
/// An empty `project_id` means "all projects"; an absent date leaves that
/// side of the range open. Start and end are not checked against each
/// other.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatFilters {
    pub project_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ChatFilters {
    /// True when no field filters anything.
    pub fn is_cleared(&self) -> bool {
        self.project_id.is_empty() && self.start_date.is_none() && self.end_date.is_none()
    }

    /// Whether an entry of `project_id` dated `date` passes the filter.
    ///
    /// Both bounds are inclusive. An inverted range matches nothing.
    pub fn matches(&self, project_id: &str, date: NaiveDate) -> bool {
        if !self.project_id.is_empty() && self.project_id != project_id {
            return false;
        }
        if self.start_date.is_some_and(|start| date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| date > end) {
            return false;
        }
        true
    }
}
