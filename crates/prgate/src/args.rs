use std::sync::Arc;

use clap::Parser;
use prgate_config::{ApiDriver, Config};
use prgate_core::CoreModule;
use prgate_ghapi_github::GitHubApiService;
use prgate_ghapi_interface::ApiService;
use prgate_ghapi_null::NullApiService;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    config_validator::Requirements,
};

/// Check that a pull request has enough approving reviews.
#[derive(Parser)]
#[command(long_about = None)]
pub(crate) struct Args {
    /// Defaults to `check`.
    #[command(subcommand)]
    cmd: Option<SubCommand>,
}

impl Args {
    /// Environment values the selected command depends on.
    pub fn requirements(&self) -> Requirements {
        match &self.cmd {
            None | Some(SubCommand::Check(_)) => Requirements {
                repository: true,
                event_path: true,
            },
            Some(SubCommand::Evaluate(_)) => Requirements {
                repository: false,
                event_path: false,
            },
        }
    }
}

pub(crate) struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> anyhow::Result<()> {
        let api_service: Box<dyn ApiService> = {
            if config.api.driver == ApiDriver::GitHub {
                info!("Using GitHubApiService API driver");
                Box::new(GitHubApiService::new(config.clone())?)
            } else {
                info!("Using NullApiService API driver");
                Box::new(NullApiService::new())
            }
        };

        let ctx = CommandContext {
            config,
            api_service,
            core_module: CoreModule::builder().build(),
            writer: Arc::new(RwLock::new(std::io::stdout())),
        };

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(Self::parse_args_async(args, ctx))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> anyhow::Result<()> {
        args.cmd
            .unwrap_or_default()
            .execute(ctx)
            .await
    }
}
