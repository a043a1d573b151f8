//! Priority levels attached to briefing documents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document priority as it appears in the `Priority Level` source column.
///
/// Source data produces `Critical`, `High`, and `Medium`; `Low` is valid
/// but rare. Anything else parses leniently to [`Priority::Unspecified`]
/// so a single odd row does not reject an otherwise usable dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    /// Fallback for values outside the known set. Rendered dimmed.
    Unspecified,
}

impl Priority {
    /// Returns the canonical name as it appears in source data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Unspecified => "Unspecified",
        }
    }

    /// Sort order for list rendering. Critical first, unknown last.
    pub fn sort_order(&self) -> u8 {
        match self {
            Priority::Critical => 1,
            Priority::High => 2,
            Priority::Medium => 3,
            Priority::Low => 4,
            Priority::Unspecified => 9,
        }
    }

    /// Parse a source value, mapping unknown input to `Unspecified`
    /// instead of failing.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or(Priority::Unspecified)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    /// Parse a priority string (case-insensitive, trimmed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CRITICAL" => Ok(Priority::Critical),
            "HIGH" => Ok(Priority::High),
            "MEDIUM" => Ok(Priority::Medium),
            "LOW" => Ok(Priority::Low),
            _ => Err(format!("Unknown priority level: {s}")),
        }
    }
}
