pub mod approvals;
pub mod events;
