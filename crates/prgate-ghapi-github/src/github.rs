use async_trait::async_trait;
use prgate_config::Config;
use prgate_ghapi_interface::{review::GhReviewApi, ApiService, Result};
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, error};

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

/// GitHub API service.
#[derive(Clone)]
pub struct GitHubApiService {
    config: Config,
    client: Client,
}

#[derive(Deserialize)]
struct GitHubErrorBody {
    message: String,
}

impl GitHubApiService {
    /// Build a GitHub API service authenticated with the configured token.
    pub fn new(config: Config) -> Result<Self> {
        let client = get_authenticated_client_builder(&config)?
            .build()
            .map_err(GitHubError::from)?;

        Ok(Self { config, client })
    }

    async fn check_status(url: &str, response: Response) -> Result<Response, GitHubError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body);
        error!(
            url = url,
            status_code = %status,
            message = %message,
            "GitHub API call failed"
        );

        Err(GitHubError::UnexpectedStatusError {
            status: status.as_u16(),
            url: url.into(),
            message,
        })
    }
}

fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<GitHubErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.is_empty() => "<empty body>".into(),
        Err(_) => body.into(),
    }
}

#[async_trait]
impl ApiService for GitHubApiService {
    #[tracing::instrument(skip(self))]
    async fn pull_reviews_page(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<GhReviewApi>> {
        let url = build_github_url(
            &self.config,
            format!("/repos/{owner}/{name}/pulls/{issue_number}/reviews"),
        );

        let response = self
            .client
            .get(&url)
            .query(&[("per_page", per_page), ("page", page)])
            .send()
            .await
            .map_err(GitHubError::from)?;

        let reviews: Vec<GhReviewApi> = Self::check_status(&url, response)
            .await?
            .json()
            .await
            .map_err(GitHubError::from)?;

        debug!(count = reviews.len(), "Fetched reviews page");
        Ok(reviews)
    }
}
