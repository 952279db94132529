//! Project identifier -> display label table.
//!
//! Project ids are opaque GUIDs assigned by the system that owns the chat
//! data. The table is fixed per deployment: either the built-in one or a
//! CSV supplied by the owner.
//!
//! # CSV Format
//!
//! Has headers: `ID,LABEL`. A row with an empty `ID` overrides the label of
//! the "all projects" option.
//!
//! ```text
//! ID,LABEL
//! ,Alle Projekte
//! EC6B05B0-7D92-1242-A9BC-5068CDEBDDE5,Energie
//! ```

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Key of the option that disables the project filter.
pub const ALL_PROJECTS_KEY: &str = "";

/// Label of the option that disables the project filter.
pub const ALL_PROJECTS_LABEL: &str = "Alle Projekte";

const BUILTIN_PROJECTS: &[(&str, &str)] = &[
    (ALL_PROJECTS_KEY, ALL_PROJECTS_LABEL),
    ("EC6B05B0-7D92-1242-A9BC-5068CDEBDDE5", "Energie"),
    ("AE03B6DF-89AD-8B4B-87A8-4D8178E7DDC5", "Wien"),
    ("19DB2B4A-231B-BB49-9698-1FF3B49461C4", "Oberösterreich"),
    ("AA144B6E-8568-3749-818F-511EC90DF1D3", "Niederösterreich"),
    ("108ACFBA-148C-B041-9F4E-803834FE7957", "Kärnten"),
    ("06FC5C24-26CE-D641-96C6-92344406FE63", "Steiermark"),
    ("619EAD15-268A-E642-A24F-8F11EDACA3AC", "Magistrat Graz"),
    ("F6911461-4109-CD43-8233-43F75FBA0891", "Land Salzburg"),
    ("E7499CCF-434A-A547-B429-3B6F073C56E3", "Frauen"),
    ("B2B1DA20-4526-B54E-81F5-44A6F415CEFB", "Gesundheit"),
    ("CDA39FA9-EACE-1241-9DFE-D25EE3039071", "Sport"),
    ("F0A10347-3894-8146-BD50-EC92D43DB3DD", "Arbeiterkammer"),
];

/// One entry of the project dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOption {
    pub key: String,
    pub label: String,
}

impl ProjectOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    pub fn is_all_projects(&self) -> bool {
        self.key == ALL_PROJECTS_KEY
    }
}

/// Ordered set of project options. The "all projects" option is always first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCatalog {
    options: Vec<ProjectOption>,
}

impl Default for ProjectCatalog {
    /// The built-in table.
    fn default() -> Self {
        Self {
            options: BUILTIN_PROJECTS
                .iter()
                .map(|(key, label)| ProjectOption::new(*key, *label))
                .collect(),
        }
    }
}

impl ProjectCatalog {
    /// Load a project table from CSV (see module docs for the format).
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut all_projects_label = ALL_PROJECTS_LABEL.to_string();
        let mut options = Vec::new();
        let mut seen = HashSet::new();
        for result in rdr.records() {
            let r = result?;
            let key = r.get(0).unwrap_or("").trim();
            let label = r.get(1).unwrap_or("").trim();

            if label.is_empty() {
                bail!("project {:?} has no label", key);
            }
            if !seen.insert(key.to_string()) {
                bail!("duplicate project id {:?}", key);
            }
            if key == ALL_PROJECTS_KEY {
                all_projects_label = label.to_string();
            } else {
                options.push(ProjectOption::new(key, label));
            }
        }
        options.insert(0, ProjectOption::new(ALL_PROJECTS_KEY, all_projects_label));

        log::info!("Loaded {} project options", options.len());
        Ok(Self { options })
    }

    pub fn options(&self) -> &[ProjectOption] {
        &self.options
    }

    /// Display label for a project id.
    ///
    /// `None` for the empty id and for ids that are not in the table.
    pub fn label_for(&self, key: &str) -> Option<&str> {
        if key == ALL_PROJECTS_KEY {
            return None;
        }
        self.options
            .iter()
            .find(|option| option.key == key)
            .map(|option| option.label.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.options.iter().any(|option| option.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_starts_with_all_projects() {
        let catalog = ProjectCatalog::default();
        assert_eq!(catalog.options().len(), 13);
        assert!(catalog.options()[0].is_all_projects());
        assert_eq!(catalog.options()[0].label, "Alle Projekte");
    }

    #[test]
    fn test_label_for_known_project() {
        let catalog = ProjectCatalog::default();
        assert_eq!(
            catalog.label_for("EC6B05B0-7D92-1242-A9BC-5068CDEBDDE5"),
            Some("Energie")
        );
        assert_eq!(
            catalog.label_for("619EAD15-268A-E642-A24F-8F11EDACA3AC"),
            Some("Magistrat Graz")
        );
    }

    #[test]
    fn test_label_for_empty_or_unknown_is_none() {
        let catalog = ProjectCatalog::default();
        assert_eq!(catalog.label_for(""), None);
        assert_eq!(catalog.label_for("not-a-project"), None);
        // ids are matched exactly
        assert_eq!(catalog.label_for("ec6b05b0-7d92-1242-a9bc-5068cdebdde5"), None);
    }

    #[test]
    fn test_from_csv() {
        let csv = "ID,LABEL\nP1,Erstes\nP2,Zweites\n";
        let catalog = ProjectCatalog::from_csv(csv).unwrap();
        let keys: Vec<&str> = catalog.options().iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["", "P1", "P2"]);
        assert_eq!(catalog.options()[0].label, ALL_PROJECTS_LABEL);
        assert_eq!(catalog.label_for("P2"), Some("Zweites"));
        assert!(catalog.contains("P1"));
        assert!(!catalog.contains("P3"));
    }

    #[test]
    fn test_from_csv_moves_all_projects_row_first() {
        let csv = "ID,LABEL\nP1, Erstes \n,Alle\n";
        let catalog = ProjectCatalog::from_csv(csv).unwrap();
        assert_eq!(catalog.options()[0], ProjectOption::new("", "Alle"));
        assert_eq!(catalog.options()[1], ProjectOption::new("P1", "Erstes"));
    }

    #[test]
    fn test_from_csv_rejects_duplicates() {
        let csv = "ID,LABEL\nP1,Erstes\nP1,Nochmal\n";
        assert!(ProjectCatalog::from_csv(csv).is_err());
    }

    #[test]
    fn test_from_csv_rejects_missing_label() {
        let csv = "ID,LABEL\nP1\n";
        assert!(ProjectCatalog::from_csv(csv).is_err());
    }

    #[test]
    fn test_from_csv_header_only() {
        let catalog = ProjectCatalog::from_csv("ID,LABEL\n").unwrap();
        assert_eq!(catalog.options().len(), 1);
        assert!(catalog.options()[0].is_all_projects());
    }

    #[test]
    fn test_bundled_fixture_matches_builtin() {
        let catalog = ProjectCatalog::from_csv(include_str!("../../fixtures/projects.csv")).unwrap();
        assert_eq!(catalog, ProjectCatalog::default());
    }
}
