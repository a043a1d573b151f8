//! Required dataset columns and header validation.

use crate::error::{IngestError, Result};

/// The full required column set, in canonical order.
///
/// Header match is exact (case- and spelling-sensitive); an import missing
/// any of these is rejected wholesale.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "File Name",
    "Summary",
    "Key Takeaway",
    "Decision or Action Required",
    "Priority Level",
    "Audience",
    "Dependencies",
];

/// Positions of the required columns within a validated header row.
///
/// Extra columns are permitted and ignored.
#[derive(Debug, Clone, Copy)]
pub struct ColumnIndex {
    pub title: usize,
    pub summary: usize,
    pub key_takeaway: usize,
    pub action_required: usize,
    pub priority: usize,
    pub audience: usize,
    pub dependencies: usize,
}

impl ColumnIndex {
    /// Locate every required column, reporting all missing names at once.
    pub fn locate(columns: &[String]) -> Result<Self> {
        let mut missing = Vec::new();
        let mut find = |name: &str| match columns.iter().position(|c| c == name) {
            Some(idx) => idx,
            None => {
                missing.push(name.to_string());
                usize::MAX
            }
        };

        let index = Self {
            title: find(REQUIRED_COLUMNS[0]),
            summary: find(REQUIRED_COLUMNS[1]),
            key_takeaway: find(REQUIRED_COLUMNS[2]),
            action_required: find(REQUIRED_COLUMNS[3]),
            priority: find(REQUIRED_COLUMNS[4]),
            audience: find(REQUIRED_COLUMNS[5]),
            dependencies: find(REQUIRED_COLUMNS[6]),
        };

        if missing.is_empty() {
            Ok(index)
        } else {
            Err(IngestError::MissingColumns { missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_locate_full_header() {
        let index = ColumnIndex::locate(&columns(&REQUIRED_COLUMNS)).unwrap();
        assert_eq!(index.title, 0);
        assert_eq!(index.dependencies, 6);
    }

    #[test]
    fn test_locate_reorders_and_ignores_extras() {
        let index = ColumnIndex::locate(&columns(&[
            "Notes",
            "Dependencies",
            "Audience",
            "Priority Level",
            "Decision or Action Required",
            "Key Takeaway",
            "Summary",
            "File Name",
        ]))
        .unwrap();
        assert_eq!(index.title, 7);
        assert_eq!(index.dependencies, 1);
    }

    #[test]
    fn test_locate_reports_every_missing_column() {
        let result = ColumnIndex::locate(&columns(&["File Name", "Summary", "Audience"]));
        match result {
            Err(IngestError::MissingColumns { missing }) => {
                assert_eq!(
                    missing,
                    vec![
                        "Key Takeaway",
                        "Decision or Action Required",
                        "Priority Level",
                        "Dependencies",
                    ]
                );
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_locate_is_case_sensitive() {
        let mut names = columns(&REQUIRED_COLUMNS);
        names[0] = "file name".to_string();
        let result = ColumnIndex::locate(&names);
        assert!(matches!(result, Err(IngestError::MissingColumns { .. })));
    }
}
