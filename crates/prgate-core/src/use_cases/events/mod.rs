pub(crate) mod event_payload;
pub(crate) mod handle_review_event;

pub use event_payload::read_event_payload;
pub use handle_review_event::{route_event, EventOutcome, EventRoute, HandleReviewEventInterface};
#[cfg(any(test, feature = "testkit"))]
pub use handle_review_event::MockHandleReviewEventInterface;
