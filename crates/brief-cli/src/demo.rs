//! Embedded demo dataset, used when no dataset file is configured.

use brief_model::{DocumentRecord, Priority};

/// The demo briefing set. Mirrors the shape of a real export so every
/// command has something to work on out of the box.
pub fn demo_documents() -> Vec<DocumentRecord> {
    vec![
        DocumentRecord::new(
            "Platform Architecture Overview",
            "Overview of the key components and principles behind the platform \
             architecture, including its layered structure and integration points.",
            "The modular design allows incremental adoption across business units.",
            "Determine which business units should prioritize integration in Q2.",
            Priority::High,
            "Tech Leaders, Executive Board",
            "None",
        ),
        DocumentRecord::new(
            "Implementation Roadmap",
            "Strategic timeline for deployment across all business units with \
             milestones and resource requirements.",
            "Full implementation requires 18 months with incremental benefits from month 3.",
            "Approve phased budget release for the implementation team.",
            Priority::Critical,
            "Finance, Executive Board, Tech Leaders",
            "Budget approval, Technical foundation assessment",
        ),
        DocumentRecord::new(
            "Security Framework",
            "Comprehensive overview of security protocols, compliance standards, \
             and risk mitigation strategies for the deployment.",
            "The framework exceeds industry security standards while maintaining \
             performance targets.",
            "Review and sign-off on the security implementation plan.",
            Priority::High,
            "Security Team, Compliance, Tech Leaders",
            "Updated compliance requirements",
        ),
        DocumentRecord::new(
            "ROI Analysis",
            "Detailed financial analysis of expected returns, cost savings, and \
             productivity improvements from the implementation.",
            "Projected 267% ROI over 5 years with break-even at month 22.",
            "Confirm financial projections align with quarterly targets.",
            Priority::Medium,
            "Finance, Executive Board",
            "Updated market analysis, Competitive benchmarking",
        ),
        DocumentRecord::new(
            "Competitive Landscape Review",
            "Analysis of how the program positions the company against key \
             competitors and emerging market trends.",
            "An 18-month competitive advantage in market response time and \
             customer personalization.",
            "Determine which advantages to highlight in the upcoming investor briefing.",
            Priority::Medium,
            "Executive Board, Marketing, Investor Relations",
            "Competitive analysis report",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_titles_are_unique() {
        let documents = demo_documents();
        let mut titles: Vec<&str> = documents.iter().map(|d| d.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), documents.len());
    }

    #[test]
    fn test_demo_loads_into_a_library() {
        let mut library = brief_state::Library::new();
        library.load(demo_documents()).unwrap();
        assert_eq!(library.len(), 5);
        assert!(library.audience_index().contains(&"Executive Board".to_string()));
    }
}
