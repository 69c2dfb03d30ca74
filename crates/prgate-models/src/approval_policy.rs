use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use thiserror::Error;

use crate::ReviewerState;

const DEFAULT_MIN_APPROVALS: u64 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApprovalPolicyError {
    #[error("Invalid approvals count: {}", value)]
    InvalidCount { value: String },

    #[error("Invalid approver login: '{}'", login)]
    InvalidApprover { login: String },

    #[error("Approvers list is empty: '{}'", value)]
    EmptyApproverList { value: String },
}

/// Rule converting reviewer states into a pass/fail outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalPolicy {
    /// At least this many distinct approvers (never zero).
    MinApprovals(u64),
    /// Every listed login must have approved.
    RequiredApprovers(BTreeSet<String>),
}

impl Default for ApprovalPolicy {
    fn default() -> Self {
        Self::MinApprovals(DEFAULT_MIN_APPROVALS)
    }
}

impl ApprovalPolicy {
    /// Build a count policy, falling back to the default for zero.
    pub fn min_approvals(count: u64) -> Self {
        if count == 0 {
            Self::default()
        } else {
            Self::MinApprovals(count)
        }
    }

    pub fn required_approvers<I, S>(logins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::RequiredApprovers(logins.into_iter().map(Into::into).collect())
    }

    /// Check the policy against aggregated reviewer states.
    pub fn is_satisfied_by(&self, state: &ReviewerState) -> bool {
        match self {
            Self::MinApprovals(count) => state.approval_count() as u64 >= *count,
            Self::RequiredApprovers(logins) => logins.iter().all(|l| state.has_approved(l)),
        }
    }

    /// Required approvers who have not approved yet.
    ///
    /// Always empty in count mode.
    pub fn missing_approvers<'a>(&'a self, state: &ReviewerState) -> Vec<&'a str> {
        match self {
            Self::MinApprovals(_) => vec![],
            Self::RequiredApprovers(logins) => logins
                .iter()
                .filter(|l| !state.has_approved(l))
                .map(String::as_str)
                .collect(),
        }
    }

    fn parse_approvers(value: &str) -> Result<BTreeSet<String>, ApprovalPolicyError> {
        let mut logins = BTreeSet::new();
        for entry in value.split(',') {
            let login = entry.trim();
            let login = login.strip_prefix('@').unwrap_or(login);
            if login.is_empty() {
                continue;
            }

            if login.chars().any(|c| c.is_whitespace() || c == '@') {
                return Err(ApprovalPolicyError::InvalidApprover {
                    login: login.into(),
                });
            }

            logins.insert(login.to_string());
        }

        if logins.is_empty() {
            Err(ApprovalPolicyError::EmptyApproverList {
                value: value.into(),
            })
        } else {
            Ok(logins)
        }
    }
}

impl FromStr for ApprovalPolicy {
    type Err = ApprovalPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Ok(Self::default());
        }

        if value.chars().all(|c| c.is_ascii_digit()) {
            return value
                .parse::<u64>()
                .map(Self::min_approvals)
                .map_err(|_| ApprovalPolicyError::InvalidCount {
                    value: value.into(),
                });
        }

        if looks_like_number(value) {
            return Err(ApprovalPolicyError::InvalidCount {
                value: value.into(),
            });
        }

        Self::parse_approvers(value).map(Self::RequiredApprovers)
    }
}

/// Signed or decimal values (`-1`, `+2`, `1.5`) are mistyped counts, never logins.
fn looks_like_number(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    unsigned.chars().any(|c| c.is_ascii_digit())
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
}

impl Display for ApprovalPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinApprovals(count) => write!(f, "at least {count} approval(s)"),
            Self::RequiredApprovers(logins) => {
                let logins = logins.iter().map(String::as_str).collect::<Vec<_>>();
                write!(f, "approvals from {}", logins.join(", "))
            }
        }
    }
}
