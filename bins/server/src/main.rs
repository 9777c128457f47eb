//! Rano API Server
//!
//! Main entry point for the Rano cash statement service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rano_api::{AppState, create_router, renderer::RendererClient};
use rano_db::connect;
use rano_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rano=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect to database
    let db = connect(&config.database.url).await?;
    info!("Connected to database");

    // Create renderer client
    let renderer = RendererClient::from_config(&config.renderer)?;
    info!(
        renderer_url = %config.renderer.url,
        timeout_secs = config.renderer.timeout_secs,
        "Document renderer configured"
    );

    // Create application state
    let state = AppState {
        db: Arc::new(db),
        renderer: Arc::new(renderer),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
