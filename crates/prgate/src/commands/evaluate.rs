use async_trait::async_trait;
use clap::Parser;
use prgate_core::use_cases::approvals::CheckPullRequestApprovalInterface;
use prgate_models::{PullRequestHandle, RepositoryPath};
use shaku::HasComponent;

use super::PolicyArgs;
use crate::{
    commands::{Command, CommandContext},
    outputs::StepOutputs,
};

/// Check a pull request without event payload
#[derive(Parser)]
pub(crate) struct EvaluateCommand {
    /// Repository path (e.g. 'MyOrganization/my-project')
    repository_path: RepositoryPath,

    /// Pull request number
    number: u64,

    #[command(flatten)]
    policy: PolicyArgs,
}

#[async_trait]
impl Command for EvaluateCommand {
    async fn execute(self, ctx: CommandContext) -> anyhow::Result<()> {
        let settings = self.policy.to_settings(&ctx.config)?;
        let pr_handle = PullRequestHandle::new(self.repository_path, self.number);

        let check_pull_request_approval: &dyn CheckPullRequestApprovalInterface =
            ctx.core_module.resolve_ref();
        let decision = check_pull_request_approval
            .run(&ctx.as_core_context(&settings), &pr_handle)
            .await?;

        StepOutputs::from_decision(&decision).write(&ctx).await
    }
}

#[cfg(test)]
mod tests {
    use prgate_ghapi_interface::review::{GhReviewApi, GhReviewStateApi};
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn change_request_blocks() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_pull_reviews_page()
            .once()
            .withf(|owner, name, number, page, per_page| {
                owner == "other" && name == "repo" && number == &5 && page == &1 && per_page == &100
            })
            .return_once(|_, _, _, _, _| {
                Ok(vec![
                    GhReviewApi::new("alice", GhReviewStateApi::Approved),
                    GhReviewApi::new("bob", GhReviewStateApi::ChangesRequested),
                    GhReviewApi::new("bob", GhReviewStateApi::Approved),
                ])
            });

        assert_eq!(
            test_command(ctx, &["evaluate", "other/repo", "5", "--approvals", "2"]).await,
            "::set-output name=approved::false\n::set-output name=changes_requested::true\n"
        );
    }

    #[tokio::test]
    async fn superseded_change_request() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_pull_reviews_page()
            .once()
            .return_once(|_, _, _, _, _| {
                Ok(vec![
                    GhReviewApi::new("alice", GhReviewStateApi::Approved),
                    GhReviewApi::new("bob", GhReviewStateApi::ChangesRequested),
                    GhReviewApi::new("bob", GhReviewStateApi::Approved),
                ])
            });

        assert_eq!(
            test_command(
                ctx,
                &[
                    "evaluate",
                    "other/repo",
                    "5",
                    "--approvals",
                    "2",
                    "--check-changes-requested",
                    "false"
                ]
            )
            .await,
            "::set-output name=approved::true\n::set-output name=changes_requested::false\n"
        );
    }
}
