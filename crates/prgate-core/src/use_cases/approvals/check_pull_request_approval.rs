use async_trait::async_trait;
use prgate_ghapi_interface::reviews::ReviewApi;
use prgate_models::PullRequestHandle;
use shaku::{Component, Interface};
use tracing::info;

use super::{AggregatedReviews, ApprovalDecision};
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CheckPullRequestApprovalInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
    ) -> Result<ApprovalDecision>;
}

#[derive(Component)]
#[shaku(interface = CheckPullRequestApprovalInterface)]
pub(crate) struct CheckPullRequestApproval;

#[async_trait]
impl CheckPullRequestApprovalInterface for CheckPullRequestApproval {
    #[tracing::instrument(
        skip_all,
        fields(
            pr_handle = %pr_handle,
            policy = %ctx.settings.policy,
            check_changes_requested = ctx.settings.check_changes_requested
        )
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
    ) -> Result<ApprovalDecision> {
        let reviews = ReviewApi::stream_reviews_for_pull_request(
            ctx.api_service,
            pr_handle.owner(),
            pr_handle.name(),
            pr_handle.number(),
        );

        let aggregated =
            AggregatedReviews::from_stream(reviews, ctx.settings.check_changes_requested).await?;
        let decision = ApprovalDecision::evaluate(&aggregated, &ctx.settings.policy);

        if let Some(reviewer) = &decision.blocked_by {
            info!("Approval blocked by changes requested from {reviewer}");
        }
        if !decision.missing_approvers.is_empty() {
            info!(
                "Missing approvals from {}",
                decision.missing_approvers.join(", ")
            );
        }
        info!(
            approved = decision.approved,
            approvals = decision.approved_by.len(),
            "Pull request {} {} the policy ({})",
            pr_handle,
            if decision.approved { "satisfies" } else { "does not satisfy" },
            ctx.settings.policy
        );

        Ok(decision)
    }
}
