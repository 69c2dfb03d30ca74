//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use prgate_ghapi_interface::{review::GhReviewApi, ApiService, Result};

/// Null API service.
///
/// Every pull request looks like it has no reviews.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn pull_reviews_page(
        &self,
        owner: &str,
        name: &str,
        _issue_number: u64,
        _page: u64,
        _per_page: u64,
    ) -> Result<Vec<GhReviewApi>> {
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;
    use prgate_ghapi_interface::reviews::ReviewApi;

    use super::*;

    #[tokio::test]
    async fn no_reviews() {
        let api_service = NullApiService::new();
        let reviews: Vec<_> =
            ReviewApi::stream_reviews_for_pull_request(&api_service, "me", "test", 1)
                .try_collect()
                .await
                .unwrap();

        assert!(reviews.is_empty());
    }
}
