//! Filter criteria narrowing the displayed document set.

use serde::{Deserialize, Serialize};

use crate::priority::Priority;

/// The active combination of filter predicates.
///
/// Fields are independent; every active clause combines with logical AND.
/// The default value is fully inactive and filters nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Keep only documents with exactly this priority.
    pub priority: Option<Priority>,
    /// Keep only documents whose audience list contains this label.
    pub audience: Option<String>,
    /// Keep only bookmarked documents.
    pub bookmarked_only: bool,
    /// Keep only documents with progress strictly between 0 and 100.
    pub in_progress_only: bool,
    /// Case-insensitive substring over title, summary, and key takeaway.
    /// The empty string is inactive.
    pub search: String,
}

impl FilterCriteria {
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    #[must_use]
    pub fn with_bookmarked_only(mut self, enabled: bool) -> Self {
        self.bookmarked_only = enabled;
        self
    }

    #[must_use]
    pub fn with_in_progress_only(mut self, enabled: bool) -> Self {
        self.in_progress_only = enabled;
        self
    }

    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    /// Returns true if no clause is active.
    pub fn is_inactive(&self) -> bool {
        self.priority.is_none()
            && self.audience.is_none()
            && !self.bookmarked_only
            && !self.in_progress_only
            && self.search.is_empty()
    }
}
