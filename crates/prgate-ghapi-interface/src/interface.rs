use async_trait::async_trait;

use crate::{review::GhReviewApi, Result};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List one page of reviews from a pull request, oldest first.
    async fn pull_reviews_page(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<GhReviewApi>>;
}
