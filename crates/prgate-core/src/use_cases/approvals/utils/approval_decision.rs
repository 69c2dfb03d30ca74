use prgate_models::ApprovalPolicy;

use super::AggregatedReviews;

/// Outcome of an approval check.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ApprovalDecision {
    /// Policy is satisfied.
    pub approved: bool,
    /// Reviewer whose change request blocked the evaluation.
    pub blocked_by: Option<String>,
    /// Reviewers whose latest decision is a change request.
    pub changes_requested_by: Vec<String>,
    /// Reviewers whose latest decision is an approval.
    pub approved_by: Vec<String>,
    /// Required approvers who did not approve (named mode only).
    pub missing_approvers: Vec<String>,
}

impl ApprovalDecision {
    /// Evaluate a policy against aggregated reviews.
    ///
    /// A blocking change request fails the check before the policy is
    /// looked at.
    pub fn evaluate(reviews: &AggregatedReviews, policy: &ApprovalPolicy) -> Self {
        let approved = !reviews.is_blocked() && policy.is_satisfied_by(&reviews.states);

        Self {
            approved,
            blocked_by: reviews.blocking_changes_requested.clone(),
            changes_requested_by: to_owned_vec(reviews.states.changes_requesters()),
            approved_by: to_owned_vec(reviews.states.approvers()),
            missing_approvers: to_owned_vec(policy.missing_approvers(&reviews.states)),
        }
    }

    /// Some reviewer currently requests changes.
    pub fn changes_requested(&self) -> bool {
        self.blocked_by.is_some() || !self.changes_requested_by.is_empty()
    }
}

fn to_owned_vec(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}
