use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a visit, normalized from free-form upstream strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    Scheduled,
    Completed,
    Cancelled,
    Expired,
}

impl VisitStatus {
    /// Case-insensitive containment check against a raw status string, so
    /// upstream variants like "CANCELLED_BY_PATIENT" still match "cancelled".
    pub fn matches_raw(raw: &str, target: &str) -> bool {
        raw.trim().to_lowercase().contains(&target.trim().to_lowercase())
    }

    /// Normalizes a raw status string into the closed set.
    ///
    /// Statuses are checked in a fixed order so a string matching several
    /// keywords always resolves the same way. Anything unrecognized is
    /// treated as still scheduled.
    pub fn from_raw(raw: &str) -> Self {
        for status in [Self::Cancelled, Self::Completed, Self::Expired] {
            if Self::matches_raw(raw, status.keyword()) {
                return status;
            }
        }
        Self::Scheduled
    }

    fn keyword(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Expired => "expired",
        }
    }

    /// True once the visit can no longer change state on its own.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Scheduled)
    }

    /// Badge color token for the dashboard, derived only from the
    /// normalized status so every view agrees.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Scheduled => "blue",
            Self::Completed => "green",
            Self::Cancelled => "red",
            Self::Expired => "grey",
        }
    }
}

impl fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
