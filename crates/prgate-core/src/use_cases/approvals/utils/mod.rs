mod aggregated_reviews;
mod approval_decision;

pub use aggregated_reviews::AggregatedReviews;
pub use approval_decision::ApprovalDecision;
