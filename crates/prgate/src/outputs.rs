//! Step outputs.

use prgate_core::use_cases::approvals::ApprovalDecision;
use tokio::io::AsyncWriteExt;

use crate::commands::CommandContext;

/// Named values exposed to the following workflow steps.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct StepOutputs {
    values: Vec<(&'static str, String)>,
}

impl StepOutputs {
    pub fn from_decision(decision: &ApprovalDecision) -> Self {
        Self {
            values: vec![
                ("approved", decision.approved.to_string()),
                ("changes_requested", decision.changes_requested().to_string()),
            ],
        }
    }

    /// Append outputs to the output file when the runner provides one,
    /// or print them as workflow commands.
    pub async fn write(&self, ctx: &CommandContext) -> anyhow::Result<()> {
        match &ctx.config.workflow.output_path {
            Some(path) => {
                let mut file = tokio::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .await?;
                file.write_all(self.to_file_format().as_bytes()).await?;
                file.flush().await?;
            }
            None => {
                let mut writer = ctx.writer.write().await;
                for (name, value) in &self.values {
                    writeln!(
                        writer,
                        "::set-output name={}::{}",
                        name,
                        escape_command_data(value)
                    )?;
                }
            }
        }

        Ok(())
    }

    fn to_file_format(&self) -> String {
        self.values
            .iter()
            .map(|(name, value)| format!("{name}={value}\n"))
            .collect()
    }
}

/// Escape a value embedded in a workflow command.
pub fn escape_command_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
