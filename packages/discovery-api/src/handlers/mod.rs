pub mod event;
pub mod search;
pub mod venue;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::AppState;

pub use event::get_event_details;
pub use search::search_events;
pub use venue::search_venues;

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Service description served at the root path.
pub async fn index() -> impl IntoResponse {
    Json(json!({
        "message": "Backend API is running",
        "endpoints": ["/api/search", "/api/event", "/api/venue", "/api/health"]
    }))
}

/// Expose the client-side tokens as a small script the front end loads
/// with a plain `<script src>` tag.
pub async fn client_config(State(state): State<AppState>) -> impl IntoResponse {
    let script = format!(
        "window.CONFIG = {{\n    IPINFO_TOKEN: '{}',\n    GOOGLE_GEOCODING_API_KEY: '{}'\n}};\n",
        state.config.ipinfo_token, state.config.google_geocoding_api_key
    );

    ([(header::CONTENT_TYPE, "application/javascript")], script)
}
