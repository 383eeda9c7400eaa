use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod handlers;
pub mod libraries;
pub mod models;
pub mod services;

use config::Config;
use services::TicketmasterClient;

/// Shared handler state: read-once configuration plus the upstream
/// client. Cloned per request, never mutated.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub ticketmaster: Arc<TicketmasterClient>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let ticketmaster = Arc::new(TicketmasterClient::new(&config)?);
        Ok(Self {
            config,
            ticketmaster,
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/search", get(handlers::search_events))
        .route("/api/event", get(handlers::get_event_details))
        .route("/api/venue", get(handlers::search_venues))
        .route("/api/health", get(handlers::health))
        .route("/api/config", get(handlers::client_config))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
