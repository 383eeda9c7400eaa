use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod assets;
pub mod config;
pub mod mime;

use config::Config;

pub fn router(config: Config) -> Router {
    Router::new()
        .fallback(assets::serve_asset)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}
