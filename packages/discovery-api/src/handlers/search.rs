use axum::{extract::Query, extract::State, Json};
use serde_json::Value;
use tracing::debug;

use crate::models::{ApiError, SearchParams, SearchRequest};
use crate::AppState;

/// Handle `/api/search`: validate parameters, derive a geohash from
/// coordinates when no explicit geoPoint was sent, and forward to the
/// upstream event search.
pub async fn search_events(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, ApiError> {
    let request = SearchRequest::from_params(params)?;

    debug!(
        "Searching events: keyword={}, geoPoint={}, radius={}",
        request.keyword, request.geo_point, request.distance
    );

    let body = state.ticketmaster.search_events(&request).await?;
    Ok(Json(body))
}
