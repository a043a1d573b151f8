//! Document records and the multi-value fields they carry.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::priority::Priority;

/// Splits a denormalized comma-separated field into trimmed labels.
///
/// Empty segments are dropped; order is preserved. This runs once at the
/// ingestion boundary so readers never re-split raw strings.
pub fn split_multi_value(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Upstream dependencies of a document.
///
/// The source column uses the literal string `None` as a no-dependencies
/// sentinel; everything else is a comma-separated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dependencies {
    None,
    On(Vec<String>),
}

impl Dependencies {
    /// Parse the raw source value, honoring the `None` sentinel
    /// (case-insensitive) and treating blank input as no dependencies.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Dependencies::None;
        }
        let items = split_multi_value(trimmed);
        if items.is_empty() {
            Dependencies::None
        } else {
            Dependencies::On(items)
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Dependencies::None)
    }
}

impl fmt::Display for Dependencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dependencies::None => write!(f, "None"),
            Dependencies::On(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

/// One row of the briefing dataset.
///
/// `title` is the identity of the document within a loaded set and the
/// join key for all per-document user state (bookmarks, progress,
/// annotations). Two documents in a set must not share a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub title: String,
    pub summary: String,
    pub key_takeaway: String,
    pub action_required: String,
    pub priority: Priority,
    /// Audience labels, normalized from the comma-separated source field.
    pub audience: Vec<String>,
    pub dependencies: Dependencies,
}

impl DocumentRecord {
    /// Build a record from raw source fields, normalizing the multi-value
    /// audience and dependency columns.
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        key_takeaway: impl Into<String>,
        action_required: impl Into<String>,
        priority: Priority,
        audience: &str,
        dependencies: &str,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            key_takeaway: key_takeaway.into(),
            action_required: action_required.into(),
            priority,
            audience: split_multi_value(audience),
            dependencies: Dependencies::parse(dependencies),
        }
    }

    /// Returns true if the document carries the given audience label
    /// (exact match against the normalized list).
    pub fn has_audience(&self, label: &str) -> bool {
        self.audience.iter().any(|a| a == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_multi_value() {
        assert_eq!(
            split_multi_value("Finance, Executive Board ,Tech Leaders"),
            vec!["Finance", "Executive Board", "Tech Leaders"]
        );
        assert_eq!(split_multi_value("  "), Vec::<String>::new());
        assert_eq!(split_multi_value("Solo"), vec!["Solo"]);
    }

    #[test]
    fn test_dependencies_sentinel() {
        assert_eq!(Dependencies::parse("None"), Dependencies::None);
        assert_eq!(Dependencies::parse("none"), Dependencies::None);
        assert_eq!(Dependencies::parse(""), Dependencies::None);
        assert_eq!(
            Dependencies::parse("Budget approval, Market analysis"),
            Dependencies::On(vec![
                "Budget approval".to_string(),
                "Market analysis".to_string()
            ])
        );
    }

    #[test]
    fn test_dependencies_display() {
        assert_eq!(Dependencies::None.to_string(), "None");
        assert_eq!(
            Dependencies::On(vec!["A".to_string(), "B".to_string()]).to_string(),
            "A, B"
        );
    }

    #[test]
    fn test_has_audience_exact_match() {
        let record = DocumentRecord::new(
            "Doc",
            "",
            "",
            "",
            Priority::Medium,
            "Finance, Executive Board",
            "None",
        );
        assert!(record.has_audience("Executive Board"));
        assert!(!record.has_audience("Executive"));
    }
}
