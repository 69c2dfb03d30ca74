//! Auth.

use std::time::Duration;

use http::{header, HeaderMap, HeaderValue};
use prgate_config::Config;
use reqwest::ClientBuilder;

use crate::errors::GitHubError;

const GITHUB_API_VERSION: &str = "2022-11-28";

/// Get an authenticated GitHub client builder.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let builder = get_anonymous_client_builder(config);

    let mut authorization =
        HeaderValue::from_str(&format!("Bearer {}", config.api.github.token))
            .map_err(|e| GitHubError::InvalidTokenError { source: e })?;
    authorization.set_sensitive(true);

    let mut headers = default_headers();
    headers.insert(header::AUTHORIZATION, authorization);

    Ok(builder.default_headers(headers))
}

/// Get anonymous GitHub client builder.
pub fn get_anonymous_client_builder(config: &Config) -> ClientBuilder {
    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .timeout(Duration::from_millis(config.api.github.timeout))
        .user_agent(format!("prgate/{}", config.version))
        .default_headers(default_headers())
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.github.root_url.trim_end_matches('/'),
        path.into()
    )
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    headers.insert(
        "X-GitHub-Api-Version",
        HeaderValue::from_static(GITHUB_API_VERSION),
    );
    headers
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn arrange_config() -> Config {
        let mut config = Config::from_vars("1.0.0".into(), |_| None).unwrap();
        config.api.github.token = "abcdef".into();
        config
    }

    #[test]
    fn test_build_github_url() {
        let mut config = arrange_config();
        assert_eq!(
            build_github_url(&config, "/repos/me/test"),
            "https://api.github.com/repos/me/test"
        );

        config.api.github.root_url = "https://ghe.example.com/api/v3/".into();
        assert_eq!(
            build_github_url(&config, "/repos/me/test"),
            "https://ghe.example.com/api/v3/repos/me/test"
        );
    }

    #[test]
    fn test_get_authenticated_client_builder() {
        let config = arrange_config();
        get_authenticated_client_builder(&config)
            .unwrap()
            .build()
            .unwrap();
    }

    #[test]
    fn test_invalid_token() {
        let mut config = arrange_config();
        config.api.github.token = "abc\ndef".into();
        assert!(matches!(
            get_authenticated_client_builder(&config),
            Err(GitHubError::InvalidTokenError { .. })
        ));
    }
}
