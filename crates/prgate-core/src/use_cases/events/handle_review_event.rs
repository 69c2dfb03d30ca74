use async_trait::async_trait;
use prgate_ghapi_interface::types::EventPayload;
use prgate_models::{PullRequestHandle, RepositoryPath};
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use crate::{
    use_cases::approvals::{ApprovalDecision, CheckPullRequestApprovalInterface},
    CoreContext, DomainError, Result,
};

/// What happened to a triggering event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// The approval check ran.
    Evaluated {
        pr_number: u64,
        decision: ApprovalDecision,
    },
    /// The event does not call for a check.
    Skipped { reason: String },
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleReviewEventInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository: &RepositoryPath,
        event_name: &str,
        payload: &EventPayload,
    ) -> Result<EventOutcome>;
}

#[derive(Component)]
#[shaku(interface = HandleReviewEventInterface)]
pub(crate) struct HandleReviewEvent;

/// Where a triggering event leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRoute {
    /// Evaluate this pull request.
    Evaluate { pr_number: u64 },
    /// Nothing to check.
    Skip { reason: String },
}

/// Route an event without touching the API.
///
/// Fails when the payload holds no pull request, whatever the event kind.
pub fn route_event(
    evaluate_without_review: bool,
    event_name: &str,
    payload: &EventPayload,
) -> Result<EventRoute> {
    let pr_number = payload
        .pull_request
        .as_ref()
        .ok_or(DomainError::MissingPullRequest)?
        .number;

    let action = payload.action.as_deref();
    let state = payload.review_state();
    let applicable = match (action, state) {
        (Some(action), Some(state)) => {
            action.eq_ignore_ascii_case("submitted") && state.eq_ignore_ascii_case("approved")
        }
        (_, None) => evaluate_without_review,
        (None, Some(_)) => false,
    };

    if applicable {
        Ok(EventRoute::Evaluate { pr_number })
    } else {
        Ok(EventRoute::Skip {
            reason: format!(
                "{}/{}/{} is not suitable for check.",
                event_name,
                action.unwrap_or("none"),
                state.unwrap_or("none")
            ),
        })
    }
}

#[async_trait]
impl HandleReviewEventInterface for HandleReviewEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            repository = %repository,
            event_name = event_name,
            action = ?payload.action,
            state = ?payload.review_state()
        )
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository: &RepositoryPath,
        event_name: &str,
        payload: &EventPayload,
    ) -> Result<EventOutcome> {
        let route = route_event(ctx.settings.evaluate_without_review, event_name, payload)?;
        let pr_number = match route {
            EventRoute::Evaluate { pr_number } => pr_number,
            EventRoute::Skip { reason } => {
                info!("{reason}");
                return Ok(EventOutcome::Skipped { reason });
            }
        };

        let check_pull_request_approval: &dyn CheckPullRequestApprovalInterface =
            ctx.core_module.resolve_ref();
        let decision = check_pull_request_approval
            .run(ctx, &PullRequestHandle::new(repository.clone(), pr_number))
            .await?;

        Ok(EventOutcome::Evaluated {
            pr_number,
            decision,
        })
    }
}
