use prgate_ghapi_interface::types::EventPayload;

use crate::{DomainError, Result};

/// Read and parse the event payload written by the workflow runner.
#[tracing::instrument]
pub async fn read_event_payload(path: &str) -> Result<EventPayload> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        DomainError::PayloadReadError {
            path: path.into(),
            source: e,
        }
    })?;

    EventPayload::from_json(&content).map_err(Into::into)
}
