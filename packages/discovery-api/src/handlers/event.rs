use axum::{extract::Query, extract::State, Json};
use serde_json::Value;
use tracing::debug;

use crate::models::{ApiError, EventParams};
use crate::AppState;

/// Handle `/api/event`: look up a single event by its upstream id.
pub async fn get_event_details(
    State(state): State<AppState>,
    Query(params): Query<EventParams>,
) -> Result<Json<Value>, ApiError> {
    let id = params.into_id()?;

    debug!("Fetching event details for id={}", id);

    let body = state.ticketmaster.event_details(&id).await?;
    Ok(Json(body))
}
