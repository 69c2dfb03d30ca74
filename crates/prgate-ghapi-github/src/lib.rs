//! GitHub API driver.
//!
//! Talks to the GitHub REST API with a personal or workflow token.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod auth;
mod errors;
mod github;

pub use errors::GitHubError;
pub use github::GitHubApiService;
