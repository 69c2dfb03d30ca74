use prgate_ghapi_interface::ApiError;

/// GitHub driver error.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid GitHub token: {source}")]
    InvalidTokenError {
        source: http::header::InvalidHeaderValue,
    },

    #[error("GitHub API returned status {} for {}: {}", status, url, message)]
    UnexpectedStatusError {
        status: u16,
        url: String,
        message: String,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::UnexpectedStatusError {
                status,
                url,
                message,
            } => ApiError::UnexpectedStatus {
                status,
                url,
                message,
            },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_keeps_details() {
        let error: ApiError = GitHubError::UnexpectedStatusError {
            status: 404,
            url: "https://api.github.com/repos/me/test/pulls/1/reviews".into(),
            message: "Not Found".into(),
        }
        .into();

        assert_eq!(
            error.to_string(),
            "GitHub API returned status 404 for https://api.github.com/repos/me/test/pulls/1/reviews: Not Found"
        );
    }
}
