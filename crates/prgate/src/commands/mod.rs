//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::{Args, Subcommand};
use prgate_config::Config;
use prgate_core::{ApprovalSettings, CoreContext, CoreModule};
use prgate_ghapi_interface::ApiService;
use prgate_models::ApprovalPolicy;
use tokio::sync::RwLock;

use self::{check::CheckCommand, evaluate::EvaluateCommand};

mod check;
mod evaluate;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context<'a>(&'a self, settings: &'a ApprovalSettings) -> CoreContext<'a> {
        CoreContext {
            settings,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> anyhow::Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Check(CheckCommand),
    Evaluate(EvaluateCommand),
}

impl Default for SubCommand {
    fn default() -> Self {
        Self::Check(CheckCommand::default())
    }
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> anyhow::Result<()> {
        match self {
            Self::Check(sub) => sub.execute(ctx).await,
            Self::Evaluate(sub) => sub.execute(ctx).await,
        }
    }
}

/// Policy options, overriding the action inputs.
#[derive(Args, Default, Debug)]
pub(crate) struct PolicyArgs {
    /// Needed approvals count, or comma-separated list of required approvers
    #[arg(long)]
    approvals: Option<String>,

    /// Block on any change request, even when superseded by an approval
    #[arg(long)]
    check_changes_requested: Option<bool>,
}

impl PolicyArgs {
    /// Resolve the approval settings, once, from arguments and inputs.
    pub fn to_settings(&self, config: &Config) -> anyhow::Result<ApprovalSettings> {
        let approvals = self
            .approvals
            .as_deref()
            .unwrap_or(&config.inputs.approvals);

        Ok(ApprovalSettings {
            policy: approvals.parse::<ApprovalPolicy>()?,
            check_changes_requested: self
                .check_changes_requested
                .unwrap_or(config.inputs.check_changes_requested),
            evaluate_without_review: config.inputs.evaluate_without_review,
        })
    }
}
