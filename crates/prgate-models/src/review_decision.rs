use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Decision expressed by a single review submission.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Copy, Clone)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    /// Approved.
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Commented.
    Commented,
    /// Dismissed.
    Dismissed,
    /// Anything else (pending reviews, unknown states).
    Other,
}

impl ReviewDecision {
    /// Convert decision to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }

    /// Only approvals and change requests alter a reviewer state.
    pub fn is_stateful(self) -> bool {
        matches!(self, Self::Approved | Self::ChangesRequested)
    }
}

impl Display for ReviewDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl From<ReviewDecision> for &'static str {
    fn from(decision: ReviewDecision) -> Self {
        match decision {
            ReviewDecision::Approved => "approved",
            ReviewDecision::ChangesRequested => "changes_requested",
            ReviewDecision::Commented => "commented",
            ReviewDecision::Dismissed => "dismissed",
            ReviewDecision::Other => "other",
        }
    }
}
