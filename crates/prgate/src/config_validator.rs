//! Validation utilities.

use prgate_config::{ApiDriver, Config};
use prgate_models::RepositoryPath;
use thiserror::Error;

/// Environment values needed by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Requirements {
    pub repository: bool,
    pub event_path: bool,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config, requirements: Requirements) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        error.push_str(&format!("  - Missing env. var.: {name}"));
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        error.push('\n');
        error.push_str(&format!("  - Invalid env. var.: {name} ({reason})"));
    }

    let mut error = String::new();

    // Check API credentials
    if config.api.driver == ApiDriver::GitHub && config.api.github.token.is_empty() {
        _missing(&mut error, "GITHUB_TOKEN");
    }

    // Check workflow values
    if requirements.repository {
        if config.workflow.repository.is_empty() {
            _missing(&mut error, "GITHUB_REPOSITORY");
        } else if let Err(e) = RepositoryPath::new(&config.workflow.repository) {
            _invalid(&mut error, "GITHUB_REPOSITORY", &e.to_string());
        }
    }
    if requirements.event_path && config.workflow.event_path.is_empty() {
        _missing(&mut error, "GITHUB_EVENT_PATH");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub(crate) fn validate_configuration(
    config: &Config,
    requirements: Requirements,
) -> Result<(), ValidationError> {
    validate_env_vars(config, requirements)
}
