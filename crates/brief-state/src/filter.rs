//! The pure filter engine.

use brief_model::{DocumentRecord, FilterCriteria};
use brief_store::ProgressMap;

/// Apply the active filter clauses to the document set.
///
/// Returns an order-preserving subsequence of `documents`. Each clause is
/// applied only when its criterion is active; active clauses combine with
/// AND. The result is recomputed in full from the inputs on every call --
/// there is no cached state to go stale.
pub fn apply_filters<'a>(
    documents: &'a [DocumentRecord],
    criteria: &FilterCriteria,
    bookmarks: &[String],
    progress: &ProgressMap,
) -> Vec<&'a DocumentRecord> {
    let needle = criteria.search.to_lowercase();

    documents
        .iter()
        .filter(|doc| {
            if let Some(priority) = criteria.priority {
                if doc.priority != priority {
                    return false;
                }
            }
            if let Some(audience) = &criteria.audience {
                if !doc.has_audience(audience) {
                    return false;
                }
            }
            if criteria.bookmarked_only && !bookmarks.iter().any(|b| b == &doc.title) {
                return false;
            }
            if criteria.in_progress_only {
                // 0 is "not started" and 100 is "complete"; neither is in progress.
                match progress.get(&doc.title) {
                    Some(&value) if value > 0 && value < 100 => {}
                    _ => return false,
                }
            }
            if !criteria.search.is_empty() {
                let matched = doc.title.to_lowercase().contains(&needle)
                    || doc.summary.to_lowercase().contains(&needle)
                    || doc.key_takeaway.to_lowercase().contains(&needle);
                if !matched {
                    return false;
                }
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use brief_model::Priority;

    fn security_framework() -> DocumentRecord {
        DocumentRecord::new(
            "Security Framework",
            "Comprehensive overview of security protocols.",
            "Exceeds industry security standards.",
            "Review and sign-off.",
            Priority::High,
            "Tech Leaders, Executive Board",
            "Updated compliance requirements",
        )
    }

    fn no_user_state() -> (Vec<String>, ProgressMap) {
        (Vec::new(), ProgressMap::new())
    }

    #[test]
    fn test_inactive_criteria_is_identity() {
        let documents = vec![security_framework()];
        let (bookmarks, progress) = no_user_state();
        let result = apply_filters(&documents, &FilterCriteria::default(), &bookmarks, &progress);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_priority_exact_match() {
        let documents = vec![security_framework()];
        let (bookmarks, progress) = no_user_state();

        let high = FilterCriteria::default().with_priority(Priority::High);
        assert_eq!(apply_filters(&documents, &high, &bookmarks, &progress).len(), 1);

        let critical = FilterCriteria::default().with_priority(Priority::Critical);
        assert!(apply_filters(&documents, &critical, &bookmarks, &progress).is_empty());
    }

    #[test]
    fn test_audience_matches_normalized_label() {
        let documents = vec![security_framework()];
        let (bookmarks, progress) = no_user_state();

        let criteria = FilterCriteria::default().with_audience("Executive Board");
        assert_eq!(
            apply_filters(&documents, &criteria, &bookmarks, &progress).len(),
            1
        );

        // Substrings of a label do not match.
        let partial = FilterCriteria::default().with_audience("Executive");
        assert!(apply_filters(&documents, &partial, &bookmarks, &progress).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let documents = vec![security_framework()];
        let (bookmarks, progress) = no_user_state();

        let criteria = FilterCriteria::default().with_search("security");
        assert_eq!(
            apply_filters(&documents, &criteria, &bookmarks, &progress).len(),
            1
        );

        let criteria = FilterCriteria::default().with_search("takeaway text not present");
        assert!(apply_filters(&documents, &criteria, &bookmarks, &progress).is_empty());
    }

    #[test]
    fn test_bookmarked_only() {
        let documents = vec![security_framework()];
        let progress = ProgressMap::new();
        let criteria = FilterCriteria::default().with_bookmarked_only(true);

        assert!(apply_filters(&documents, &criteria, &[], &progress).is_empty());

        let bookmarks = vec!["Security Framework".to_string()];
        assert_eq!(
            apply_filters(&documents, &criteria, &bookmarks, &progress).len(),
            1
        );
    }

    #[test]
    fn test_in_progress_excludes_unread_and_complete() {
        let documents = vec![security_framework()];
        let bookmarks = Vec::new();
        let criteria = FilterCriteria::default().with_in_progress_only(true);

        let mut progress = ProgressMap::new();
        assert!(apply_filters(&documents, &criteria, &bookmarks, &progress).is_empty());

        progress.insert("Security Framework".to_string(), 0);
        assert!(apply_filters(&documents, &criteria, &bookmarks, &progress).is_empty());

        progress.insert("Security Framework".to_string(), 100);
        assert!(apply_filters(&documents, &criteria, &bookmarks, &progress).is_empty());

        progress.insert("Security Framework".to_string(), 50);
        assert_eq!(
            apply_filters(&documents, &criteria, &bookmarks, &progress).len(),
            1
        );
    }

    #[test]
    fn test_clauses_combine_with_and() {
        let documents = vec![security_framework()];
        let (bookmarks, progress) = no_user_state();

        let criteria = FilterCriteria::default()
            .with_priority(Priority::High)
            .with_search("no such phrase");
        assert!(apply_filters(&documents, &criteria, &bookmarks, &progress).is_empty());
    }
}
