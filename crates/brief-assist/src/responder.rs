//! Keyword matching against the document set.

use brief_model::DocumentRecord;

/// Opening system message for a fresh transcript.
pub const GREETING: &str =
    "Hello! I can help you find information about the briefing documents. Ask me anything!";

/// Reply when nothing matches the query.
pub const FALLBACK_REPLY: &str = "I'm sorry, I don't have specific information about that. \
     Would you like me to help you find a relevant document?";

/// Answer a free-text query by substring matching over titles and
/// summaries. Matching is case-insensitive; the whole query is one
/// needle, not tokenized.
pub fn respond(query: &str, documents: &[DocumentRecord]) -> String {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return FALLBACK_REPLY.to_string();
    }

    let matches: Vec<&DocumentRecord> = documents
        .iter()
        .filter(|doc| {
            doc.title.to_lowercase().contains(&needle)
                || doc.summary.to_lowercase().contains(&needle)
        })
        .collect();

    match matches.first() {
        Some(first) => format!(
            "I found {} document(s) related to your query. The most relevant one is \"{}\". \
             Would you like me to show you the details?",
            matches.len(),
            first.title
        ),
        None => FALLBACK_REPLY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brief_model::Priority;

    fn documents() -> Vec<DocumentRecord> {
        vec![
            DocumentRecord::new(
                "Security Framework",
                "Security protocols and compliance overview.",
                "Exceeds standards.",
                "Sign off.",
                Priority::High,
                "Security Team",
                "None",
            ),
            DocumentRecord::new(
                "Platform Roadmap",
                "Deployment timeline with security milestones.",
                "Phased rollout.",
                "Approve budget.",
                Priority::Critical,
                "Executive Board",
                "Budget approval",
            ),
        ]
    }

    #[test]
    fn test_respond_names_first_match_and_count() {
        let reply = respond("security", &documents());
        assert!(reply.contains("2 document(s)"));
        assert!(reply.contains("\"Security Framework\""));
    }

    #[test]
    fn test_respond_is_case_insensitive() {
        let reply = respond("ROADMAP", &documents());
        assert!(reply.contains("\"Platform Roadmap\""));
    }

    #[test]
    fn test_respond_falls_back_on_no_match() {
        assert_eq!(respond("quarterly tax filings", &documents()), FALLBACK_REPLY);
    }

    #[test]
    fn test_respond_falls_back_on_blank_query() {
        assert_eq!(respond("   ", &documents()), FALLBACK_REPLY);
    }
}
