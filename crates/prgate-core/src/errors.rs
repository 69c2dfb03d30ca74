//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`prgate_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: prgate_ghapi_interface::ApiError,
    },

    #[error("Could not read event payload at '{path}': {source}")]
    PayloadReadError {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid event payload: {source}")]
    PayloadParseError { source: serde_json::Error },

    #[error("this event doesn't contain pull request")]
    MissingPullRequest,
}

impl From<prgate_ghapi_interface::ApiError> for DomainError {
    fn from(e: prgate_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        Self::PayloadParseError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
