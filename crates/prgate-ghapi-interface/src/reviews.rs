//! Reviews API module.

use futures::{
    stream::{self, BoxStream},
    StreamExt, TryStreamExt,
};

use crate::{review::GhReviewApi, ApiError, ApiService};

/// Page size used when listing reviews (GitHub maximum).
pub const REVIEWS_PER_PAGE: u64 = 100;

/// Review API.
pub struct ReviewApi;

impl ReviewApi {
    /// Stream reviews for pull request, oldest first.
    ///
    /// Pages are fetched lazily: the next page is only requested once every
    /// review of the current page has been consumed, and the stream ends
    /// after the first incomplete page.
    pub fn stream_reviews_for_pull_request<'a>(
        api_service: &'a dyn ApiService,
        repository_owner: &'a str,
        repository_name: &'a str,
        pr_number: u64,
    ) -> BoxStream<'a, Result<GhReviewApi, ApiError>> {
        stream::try_unfold(Some(1u64), move |next_page| async move {
            let page = match next_page {
                Some(page) => page,
                None => return Ok::<_, ApiError>(None),
            };

            let reviews = api_service
                .pull_reviews_page(
                    repository_owner,
                    repository_name,
                    pr_number,
                    page,
                    REVIEWS_PER_PAGE,
                )
                .await?;

            let next_page = if (reviews.len() as u64) < REVIEWS_PER_PAGE {
                None
            } else {
                Some(page + 1)
            };

            Ok(Some((stream::iter(reviews.into_iter().map(Ok::<_, ApiError>)), next_page)))
        })
        .try_flatten()
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{review::GhReviewStateApi, MockApiService};

    fn full_page(login: &str) -> Vec<GhReviewApi> {
        (0..REVIEWS_PER_PAGE)
            .map(|_| GhReviewApi::new(login, GhReviewStateApi::Commented))
            .collect()
    }

    #[tokio::test]
    async fn single_page() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_pull_reviews_page()
            .once()
            .withf(|owner, name, number, page, per_page| {
                owner == "me" && name == "test" && number == &1 && page == &1 && per_page == &100
            })
            .return_once(|_, _, _, _, _| {
                Ok(vec![
                    GhReviewApi::new("alice", GhReviewStateApi::Approved),
                    GhReviewApi::new("bob", GhReviewStateApi::ChangesRequested),
                ])
            });

        let reviews: Vec<_> =
            ReviewApi::stream_reviews_for_pull_request(&api_service, "me", "test", 1)
                .try_collect()
                .await
                .unwrap();

        assert_eq!(
            reviews
                .iter()
                .map(|r| r.reviewer().unwrap())
                .collect::<Vec<_>>(),
            vec!["alice", "bob"]
        );
    }

    #[tokio::test]
    async fn multiple_pages_in_order() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_pull_reviews_page()
            .times(3)
            .returning(|_, _, _, page, _| match page {
                1 => Ok(full_page("alice")),
                2 => Ok(full_page("bob")),
                _ => Ok(vec![GhReviewApi::new("carol", GhReviewStateApi::Approved)]),
            });

        let reviews: Vec<_> =
            ReviewApi::stream_reviews_for_pull_request(&api_service, "me", "test", 1)
                .try_collect()
                .await
                .unwrap();

        assert_eq!(reviews.len(), 201);
        assert_eq!(reviews[0].reviewer(), Some("alice"));
        assert_eq!(reviews[100].reviewer(), Some("bob"));
        assert_eq!(reviews[200].reviewer(), Some("carol"));
    }

    #[tokio::test]
    async fn exact_page_ends_with_empty_page() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_pull_reviews_page()
            .times(2)
            .returning(|_, _, _, page, _| {
                if page == 1 {
                    Ok(full_page("alice"))
                } else {
                    Ok(vec![])
                }
            });

        let count = ReviewApi::stream_reviews_for_pull_request(&api_service, "me", "test", 1)
            .try_fold(0, |acc, _| async move { Ok(acc + 1) })
            .await
            .unwrap();

        assert_eq!(count, 100);
    }

    #[tokio::test]
    async fn pages_are_fetched_lazily() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_pull_reviews_page()
            .once()
            .withf(|_, _, _, page, _| page == &1)
            .return_once(|_, _, _, _, _| Ok(full_page("alice")));

        let mut stream = ReviewApi::stream_reviews_for_pull_request(&api_service, "me", "test", 1);
        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first.reviewer(), Some("alice"));
    }

    #[tokio::test]
    async fn errors_are_forwarded() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_pull_reviews_page()
            .once()
            .return_once(|_, _, _, _, _| {
                Err(ApiError::UnexpectedStatus {
                    status: 401,
                    url: "/repos/me/test/pulls/1/reviews".into(),
                    message: "Bad credentials".into(),
                })
            });

        let result: Result<Vec<_>, _> =
            ReviewApi::stream_reviews_for_pull_request(&api_service, "me", "test", 1)
                .try_collect()
                .await;

        assert!(matches!(
            result,
            Err(ApiError::UnexpectedStatus { status: 401, .. })
        ));
    }
}
