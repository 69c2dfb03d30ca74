//! GitHub API interface.

#![warn(clippy::all)]

mod errors;
mod interface;
pub mod review;
pub mod reviews;
pub mod types;

pub use errors::{ApiError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockApiService;
pub use interface::ApiService;
