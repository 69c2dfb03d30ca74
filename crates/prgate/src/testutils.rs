use std::{io::Write, path::PathBuf, sync::Arc};

use clap::Parser;
use prgate_config::Config;
use prgate_core::CoreModule;
use prgate_ghapi_interface::MockApiService;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: MockApiService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        let mut config = Config::from_vars("0.0.0".into(), |_| None).unwrap();
        config.workflow.repository = "me/test".into();
        config.workflow.event_name = "pull_request_review".into();

        Self {
            config,
            core_module: CoreModule::builder().build(),
            api_service: MockApiService::new(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            api_service: Box::new(self.api_service),
            writer,
        }
    }
}

/// Write an event payload in a per-test temporary file.
pub(crate) async fn write_event_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "prgate-cli-{}-{}.json",
        name,
        std::process::id()
    ));
    tokio::fs::write(&path, content).await.unwrap();
    path
}

pub(crate) async fn try_command(
    ctx: CommandContextTest,
    command_args: &[&str],
) -> (anyhow::Result<()>, String) {
    let buf = Arc::new(RwLock::new(Vec::new()));

    let result = {
        let command_args = {
            let mut tmp_args = vec!["prgate"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => {
                CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone())).await
            }
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    };

    let vec = buf.read().await.to_vec();
    (result, std::str::from_utf8(&vec).unwrap().to_string())
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let (result, output) = try_command(ctx, command_args).await;
    result.unwrap();
    output
}
