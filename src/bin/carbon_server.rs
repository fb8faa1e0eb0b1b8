// Server Binary Entry Point
//
// Purpose: Start the Axum server with the landing page, wizard and JSON API
// Usage: cargo run --features api --bin carbon_server

use carbon_footprint::config::{ServerConfig, DEFAULT_LOG_FILTER};
use carbon_footprint::{create_router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting carbon footprint server...");

    // Configuration from environment variables
    let config = ServerConfig::from_env();
    let addr = config.socket_addr();

    tracing::info!("Configuration:");
    tracing::info!("  HOST: {}", config.host);
    tracing::info!("  PORT: {}", config.port);

    let state = AppState::new(config);

    // Create router with all endpoints and middleware
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
