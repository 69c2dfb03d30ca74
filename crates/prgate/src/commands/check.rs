use async_trait::async_trait;
use clap::Parser;
use prgate_core::use_cases::events::{
    read_event_payload, route_event, EventOutcome, EventRoute, HandleReviewEventInterface,
};
use prgate_models::RepositoryPath;
use shaku::HasComponent;
use tracing::info;

use super::PolicyArgs;
use crate::{
    commands::{Command, CommandContext},
    outputs::StepOutputs,
};

/// Check the pull request of the triggering event (default)
#[derive(Parser, Default)]
pub(crate) struct CheckCommand {
    #[command(flatten)]
    policy: PolicyArgs,
}

#[async_trait]
impl Command for CheckCommand {
    async fn execute(self, ctx: CommandContext) -> anyhow::Result<()> {
        let repository = RepositoryPath::new(&ctx.config.workflow.repository)?;
        let payload = read_event_payload(&ctx.config.workflow.event_path).await?;

        // Skipped events must not depend on the policy inputs.
        let route = route_event(
            ctx.config.inputs.evaluate_without_review,
            &ctx.config.workflow.event_name,
            &payload,
        )?;
        if let EventRoute::Skip { reason } = route {
            info!("{reason}");
            return Ok(());
        }

        let settings = self.policy.to_settings(&ctx.config)?;

        let handle_review_event: &dyn HandleReviewEventInterface = ctx.core_module.resolve_ref();
        let outcome = handle_review_event
            .run(
                &ctx.as_core_context(&settings),
                &repository,
                &ctx.config.workflow.event_name,
                &payload,
            )
            .await?;

        if let EventOutcome::Evaluated { decision, .. } = outcome {
            StepOutputs::from_decision(&decision).write(&ctx).await?;
        }

        Ok(())
    }
}
