use std::collections::BTreeMap;

use crate::ReviewDecision;

/// Latest known decision per reviewer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReviewerState {
    decisions: BTreeMap<String, ReviewDecision>,
}

impl ReviewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a decision for a reviewer.
    ///
    /// Only approvals and change requests are kept, and they supersede any
    /// previous entry for the same reviewer. Returns `true` when the state
    /// was updated.
    pub fn record(&mut self, reviewer: &str, decision: ReviewDecision) -> bool {
        if !decision.is_stateful() {
            return false;
        }

        self.decisions.insert(reviewer.to_string(), decision);
        true
    }

    /// Get the current decision of a reviewer.
    pub fn decision(&self, reviewer: &str) -> Option<ReviewDecision> {
        self.decisions.get(reviewer).copied()
    }

    pub fn has_approved(&self, reviewer: &str) -> bool {
        self.decision(reviewer) == Some(ReviewDecision::Approved)
    }

    /// Reviewers whose latest decision is an approval, sorted by login.
    pub fn approvers(&self) -> Vec<&str> {
        self.reviewers_with(ReviewDecision::Approved)
    }

    /// Reviewers whose latest decision is a change request, sorted by login.
    pub fn changes_requesters(&self) -> Vec<&str> {
        self.reviewers_with(ReviewDecision::ChangesRequested)
    }

    pub fn approval_count(&self) -> usize {
        self.approvers().len()
    }

    fn reviewers_with(&self, decision: ReviewDecision) -> Vec<&str> {
        self.decisions
            .iter()
            .filter(|(_, d)| **d == decision)
            .map(|(r, _)| r.as_str())
            .collect()
    }
}

impl<'a> FromIterator<(&'a str, ReviewDecision)> for ReviewerState {
    fn from_iter<T: IntoIterator<Item = (&'a str, ReviewDecision)>>(iter: T) -> Self {
        let mut state = Self::new();
        for (reviewer, decision) in iter {
            state.record(reviewer, decision);
        }
        state
    }
}
