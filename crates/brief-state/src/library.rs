//! The loaded document set and its derived audience index.

use std::collections::HashSet;

use brief_model::{DocumentRecord, ModelError, Result};

/// Holds the current document set.
///
/// The set is replaced wholesale on load (never patched incrementally);
/// the audience index is recomputed on every replacement. A failed load
/// leaves the previous set untouched.
#[derive(Debug, Default)]
pub struct Library {
    documents: Vec<DocumentRecord>,
    audience_index: Vec<String>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document set.
    ///
    /// Revalidates title uniqueness (records can be constructed
    /// programmatically, not only through ingest). On error nothing
    /// changes.
    pub fn load(&mut self, records: Vec<DocumentRecord>) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for record in &records {
            if !seen.insert(&record.title) {
                return Err(ModelError::DuplicateTitle {
                    title: record.title.clone(),
                });
            }
        }

        self.audience_index = audience_index(&records);
        self.documents = records;
        tracing::debug!(
            documents = self.documents.len(),
            audiences = self.audience_index.len(),
            "document set replaced"
        );
        Ok(())
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    /// Distinct audience labels across the set, in first-seen order.
    pub fn audience_index(&self) -> &[String] {
        &self.audience_index
    }

    pub fn get(&self, title: &str) -> Option<&DocumentRecord> {
        self.documents.iter().find(|doc| doc.title == title)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Union of audience labels in first-seen order, so dropdown-style
/// rendering stays stable across recomputations.
fn audience_index(records: &[DocumentRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut index = Vec::new();
    for record in records {
        for label in &record.audience {
            if seen.insert(label) {
                index.push(label.clone());
            }
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use brief_model::Priority;

    fn record(title: &str, audience: &str) -> DocumentRecord {
        DocumentRecord::new(title, "", "", "", Priority::Medium, audience, "None")
    }

    #[test]
    fn test_load_replaces_and_indexes() {
        let mut library = Library::new();
        library
            .load(vec![
                record("A", "Finance, Executive Board"),
                record("B", "Executive Board, Tech Leaders"),
            ])
            .unwrap();

        assert_eq!(library.len(), 2);
        assert_eq!(
            library.audience_index(),
            ["Finance", "Executive Board", "Tech Leaders"]
        );
    }

    #[test]
    fn test_failed_load_keeps_previous_set() {
        let mut library = Library::new();
        library.load(vec![record("A", "Finance")]).unwrap();

        let result = library.load(vec![record("B", "Finance"), record("B", "Finance")]);
        assert!(matches!(result, Err(ModelError::DuplicateTitle { .. })));
        assert_eq!(library.len(), 1);
        assert!(library.get("A").is_some());
    }

    #[test]
    fn test_reload_recomputes_index() {
        let mut library = Library::new();
        library.load(vec![record("A", "Finance")]).unwrap();
        library.load(vec![record("B", "Marketing")]).unwrap();
        assert_eq!(library.audience_index(), ["Marketing"]);
    }
}
