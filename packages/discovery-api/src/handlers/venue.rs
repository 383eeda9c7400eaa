use axum::{extract::Query, extract::State, Json};
use serde_json::Value;
use tracing::debug;

use crate::models::{ApiError, VenueParams};
use crate::AppState;

/// Handle `/api/venue`: keyword search against the upstream venue index.
pub async fn search_venues(
    State(state): State<AppState>,
    Query(params): Query<VenueParams>,
) -> Result<Json<Value>, ApiError> {
    let keyword = params.into_keyword()?;

    debug!("Searching venues: keyword={}", keyword);

    let body = state.ticketmaster.search_venues(&keyword).await?;
    Ok(Json(body))
}
