use serde::{Deserialize, Serialize};

use super::GhUser;

/// Triggering event payload.
///
/// Only the fields needed to route the event are kept, everything is
/// optional so any event kind can be parsed.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct EventPayload {
    /// Action.
    pub action: Option<String>,
    /// Review, for review events.
    pub review: Option<GhEventReview>,
    /// Pull request.
    pub pull_request: Option<GhEventPullRequest>,
}

impl EventPayload {
    /// Parse a payload from its JSON representation.
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }

    /// Review state, if any.
    pub fn review_state(&self) -> Option<&str> {
        self.review.as_ref().and_then(|r| r.state.as_deref())
    }
}

/// Review attached to an event.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct GhEventReview {
    /// State.
    pub state: Option<String>,
    /// User.
    pub user: Option<GhUser>,
}

/// Pull request attached to an event.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct GhEventPullRequest {
    /// Number.
    pub number: u64,
}
