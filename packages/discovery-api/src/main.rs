use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use discovery_api::{config::Config, router, AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "discovery_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = Config::from_env().expect("Failed to load configuration");

    if config.tm_api_key.is_empty() {
        tracing::warn!("TM_API_KEY is not set; upstream calls will fail authorization");
    }

    let port = config.port;
    let state = AppState::new(config).expect("Failed to initialize upstream client");

    let app = router(state);

    let addr: std::net::SocketAddr = format!("0.0.0.0:{}", port).parse().unwrap();
    info!("Discovery API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .await
        .expect("Failed to start HTTP server");
}
