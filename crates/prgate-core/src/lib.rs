//! Approval gate logic.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::{ApprovalSettings, CoreContext};
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    approvals::check_pull_request_approval::CheckPullRequestApproval,
    events::handle_review_event::HandleReviewEvent,
};

module! {
    pub CoreModule {
        components = [CheckPullRequestApproval, HandleReviewEvent],
        providers = []
    }
}
