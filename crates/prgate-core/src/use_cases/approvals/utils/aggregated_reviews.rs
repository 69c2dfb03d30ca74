use futures::{pin_mut, Stream, TryStreamExt};
use prgate_ghapi_interface::{review::GhReviewApi, ApiError};
use prgate_models::{ReviewDecision, ReviewerState};
use tracing::{debug, info};

/// Login GitHub shows for reviews left by deleted accounts.
const DELETED_ACCOUNT_LOGIN: &str = "ghost";

/// Reviewer states folded from a pull request review history.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregatedReviews {
    /// Latest approval or change request per reviewer.
    pub states: ReviewerState,
    /// Reviewer whose change request stopped the aggregation.
    pub blocking_changes_requested: Option<String>,
}

impl AggregatedReviews {
    /// Consume a review stream, in submission order.
    ///
    /// With `check_changes_requested`, the first change request stops the
    /// consumption and blocks the approval whatever comes after it.
    /// Otherwise every review is consumed and the last decision of each
    /// reviewer wins.
    pub async fn from_stream<S>(reviews: S, check_changes_requested: bool) -> Result<Self, ApiError>
    where
        S: Stream<Item = Result<GhReviewApi, ApiError>>,
    {
        pin_mut!(reviews);

        let mut output = Self::default();
        while let Some(review) = reviews.try_next().await? {
            if output.push(&review, check_changes_requested) {
                break;
            }
        }

        Ok(output)
    }

    /// Returns `true` when the aggregation must stop.
    fn push(&mut self, review: &GhReviewApi, check_changes_requested: bool) -> bool {
        let decision = review.decision();
        let Some(login) = review.reviewer() else {
            // Deleted accounts cannot supersede anything, but their change
            // requests still block.
            if check_changes_requested && decision == ReviewDecision::ChangesRequested {
                info!("{DELETED_ACCOUNT_LOGIN} requested changes");
                self.blocking_changes_requested = Some(DELETED_ACCOUNT_LOGIN.to_string());
                return true;
            }

            debug!(review_id = review.id, "Skipping review from a deleted account");
            return false;
        };

        match decision {
            ReviewDecision::Approved => {
                info!("{login} approved");
                self.states.record(login, ReviewDecision::Approved);
                false
            }
            ReviewDecision::ChangesRequested => {
                info!("{login} requested changes");
                self.states.record(login, ReviewDecision::ChangesRequested);
                if check_changes_requested {
                    self.blocking_changes_requested = Some(login.to_string());
                    true
                } else {
                    false
                }
            }
            other => {
                debug!(reviewer = login, decision = %other, "Ignoring review");
                false
            }
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.blocking_changes_requested.is_some()
    }
}
