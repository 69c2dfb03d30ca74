pub(crate) mod check_pull_request_approval;
pub(crate) mod utils;

pub use check_pull_request_approval::CheckPullRequestApprovalInterface;
#[cfg(any(test, feature = "testkit"))]
pub use check_pull_request_approval::MockCheckPullRequestApprovalInterface;
pub use utils::{AggregatedReviews, ApprovalDecision};
