mod common;
mod events;

pub use common::GhUser;
pub use events::{EventPayload, GhEventPullRequest, GhEventReview};
