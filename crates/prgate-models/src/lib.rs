mod approval_policy;
mod pull_request_handle;
mod repository_path;
mod review_decision;
mod reviewer_state;

pub use approval_policy::{ApprovalPolicy, ApprovalPolicyError};
pub use pull_request_handle::PullRequestHandle;
pub use repository_path::{RepositoryPath, RepositoryPathError};
pub use review_decision::ReviewDecision;
pub use reviewer_state::ReviewerState;
