//! User-authored notes attached to documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note attached to one document.
///
/// `id` is unique and monotonic within a store (epoch milliseconds at
/// creation, bumped past the previous id on collision), so deletion by id
/// is unambiguous even for notes created in the same millisecond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: i64,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub author: String,
}

impl Annotation {
    pub fn new(id: i64, text: impl Into<String>, timestamp: DateTime<Utc>, author: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            timestamp,
            author: author.into(),
        }
    }
}
