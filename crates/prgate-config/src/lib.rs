//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API request timeout (in milliseconds).
    pub timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API token.
    pub token: String,
}

/// Values provided by the workflow runner.
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Repository path, as `owner/name`.
    pub repository: String,
    /// Path to the JSON event payload.
    pub event_path: String,
    /// Name of the triggering event.
    pub event_name: String,
    /// Path of the step output file, if any.
    pub output_path: Option<String>,
}

/// Action inputs.
#[derive(Debug, Clone)]
pub struct InputsConfig {
    /// Raw approvals input: a count or a comma-separated list of logins.
    pub approvals: String,
    /// Block on any change request, even when superseded.
    pub check_changes_requested: bool,
    /// Also evaluate events without a review state.
    pub evaluate_without_review: bool,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Gate configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Workflow options.
    pub workflow: WorkflowConfig,
    /// Inputs options.
    pub inputs: InputsConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        Self::from_vars(version, |name| env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(version: String, lookup: F) -> Result<Config, DriverError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = VarReader { lookup };

        Ok(Config {
            api: ApiConfig {
                driver: ApiDriver::from_str(&vars.to_str("PRGATE_API_DRIVER", "github"))?,
                github: ApiGitHubConfig {
                    connect_timeout: vars.to_u64("PRGATE_API_CONNECT_TIMEOUT", 5000),
                    timeout: vars.to_u64("PRGATE_API_TIMEOUT", 30000),
                    root_url: vars.to_str("GITHUB_API_URL", "https://api.github.com"),
                    token: vars.to_str("GITHUB_TOKEN", ""),
                },
            },
            workflow: WorkflowConfig {
                repository: vars.to_str("GITHUB_REPOSITORY", ""),
                event_path: vars.to_str("GITHUB_EVENT_PATH", ""),
                event_name: vars.to_str("GITHUB_EVENT_NAME", ""),
                output_path: vars.to_optional_str("GITHUB_OUTPUT"),
            },
            inputs: InputsConfig {
                approvals: vars.to_str("INPUT_APPROVALS", ""),
                check_changes_requested: vars.to_input_bool("INPUT_CHECK_CHANGES_REQUESTED", true),
                evaluate_without_review: vars
                    .to_input_bool("INPUT_EVALUATE_WITHOUT_REVIEW", false),
            },
            logging: LoggingConfig {
                use_bunyan: vars.to_bool("PRGATE_LOGGING_USE_BUNYAN", false),
            },
            version,
        })
    }
}

struct VarReader<F> {
    lookup: F,
}

impl<F> VarReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn to_u64(&self, name: &str, default: u64) -> u64 {
        (self.lookup)(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_bool(&self, name: &str, default: bool) -> bool {
        (self.lookup)(name)
            .map(|e| !e.is_empty())
            .unwrap_or(default)
    }

    // Action inputs are always set, possibly empty, so only an explicit
    // value overrides the default.
    fn to_input_bool(&self, name: &str, default: bool) -> bool {
        match (self.lookup)(name) {
            Some(e) if !e.trim().is_empty() => e.trim().eq_ignore_ascii_case("true"),
            _ => default,
        }
    }

    fn to_optional_str(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|e| !e.is_empty())
    }

    fn to_str(&self, name: &str, default: &str) -> String {
        (self.lookup)(name).unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use maplit::hashmap;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config_from(vars: HashMap<&'static str, &'static str>) -> Config {
        Config::from_vars("1.0.0".into(), |name| vars.get(name).map(|v| v.to_string())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = config_from(HashMap::new());

        assert_eq!(config.api.driver, ApiDriver::GitHub);
        assert_eq!(config.api.github.root_url, "https://api.github.com");
        assert_eq!(config.api.github.connect_timeout, 5000);
        assert_eq!(config.api.github.token, "");
        assert_eq!(config.workflow.output_path, None);
        assert_eq!(config.inputs.approvals, "");
        assert!(config.inputs.check_changes_requested);
        assert!(!config.inputs.evaluate_without_review);
        assert!(!config.logging.use_bunyan);
        assert_eq!(config.version, "1.0.0");
    }

    #[test]
    fn workflow_values() {
        let config = config_from(hashmap! {
            "GITHUB_TOKEN" => "abcdef",
            "GITHUB_REPOSITORY" => "me/test",
            "GITHUB_EVENT_PATH" => "/tmp/event.json",
            "GITHUB_EVENT_NAME" => "pull_request_review",
            "GITHUB_OUTPUT" => "/tmp/output",
            "GITHUB_API_URL" => "https://ghe.example.com/api/v3",
            "PRGATE_API_CONNECT_TIMEOUT" => "abc",
        });

        assert_eq!(config.api.github.token, "abcdef");
        assert_eq!(config.api.github.root_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.api.github.connect_timeout, 5000);
        assert_eq!(config.workflow.repository, "me/test");
        assert_eq!(config.workflow.event_path, "/tmp/event.json");
        assert_eq!(config.workflow.event_name, "pull_request_review");
        assert_eq!(config.workflow.output_path.as_deref(), Some("/tmp/output"));
    }

    #[test]
    fn input_booleans() {
        let config = config_from(hashmap! {
            "INPUT_CHECK_CHANGES_REQUESTED" => "",
            "INPUT_EVALUATE_WITHOUT_REVIEW" => "TRUE",
        });
        assert!(config.inputs.check_changes_requested);
        assert!(config.inputs.evaluate_without_review);

        let config = config_from(hashmap! {
            "INPUT_CHECK_CHANGES_REQUESTED" => "false",
        });
        assert!(!config.inputs.check_changes_requested);

        let config = config_from(hashmap! {
            "INPUT_CHECK_CHANGES_REQUESTED" => "yes",
        });
        assert!(!config.inputs.check_changes_requested);
    }

    #[test]
    fn invalid_driver() {
        let vars = hashmap! { "PRGATE_API_DRIVER" => "gitlab" };
        assert!(
            Config::from_vars("1.0.0".into(), |name| vars.get(name).map(|v| v.to_string()))
                .is_err()
        );
    }
}
