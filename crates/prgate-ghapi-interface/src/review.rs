use prgate_models::ReviewDecision;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use crate::types::GhUser;

/// Review state (API version)
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GhReviewStateApi {
    /// Approved.
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Commented.
    Commented,
    /// Dismissed.
    Dismissed,
    /// Pending.
    #[default]
    Pending,
    /// Any state unknown to this client.
    #[serde(other)]
    Other,
}

impl From<GhReviewStateApi> for ReviewDecision {
    fn from(state_api: GhReviewStateApi) -> Self {
        match state_api {
            GhReviewStateApi::Approved => Self::Approved,
            GhReviewStateApi::ChangesRequested => Self::ChangesRequested,
            GhReviewStateApi::Commented => Self::Commented,
            GhReviewStateApi::Dismissed => Self::Dismissed,
            GhReviewStateApi::Pending | GhReviewStateApi::Other => Self::Other,
        }
    }
}

/// Review (API version)
#[derive(Deserialize, Serialize, Clone, Debug, SmartDefault, PartialEq, Eq)]
pub struct GhReviewApi {
    /// Review ID.
    #[serde(default)]
    pub id: u64,
    /// User, missing for deleted accounts.
    pub user: Option<GhUser>,
    /// Submitted at, missing for pending reviews.
    #[default(Some(OffsetDateTime::now_utc()))]
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
    /// State.
    pub state: GhReviewStateApi,
}

impl GhReviewApi {
    /// Build a review for a user with a state.
    pub fn new<T: Into<String>>(login: T, state: GhReviewStateApi) -> Self {
        Self {
            user: Some(GhUser {
                login: login.into(),
            }),
            state,
            ..Default::default()
        }
    }

    /// Reviewer login, if the account still exists.
    pub fn reviewer(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }

    pub fn decision(&self) -> ReviewDecision {
        self.state.into()
    }
}
