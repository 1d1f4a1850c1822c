//! Fundchain Event Registry
//!
//! Holds fundraising events in memory and serves the REST API for creating
//! and querying them. The in-process registry is the source of truth until
//! the on-chain ledger integration lands.

use anyhow::Result;
use fundchain_registry::{api, config, registry::EventRegistry, state::AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing (prefer RUST_LOG, fallback to FUNDCHAIN_LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting fundchain event registry");
    info!(listen_addr = %config.listen_addr, "Configuration loaded");

    // Create application state
    let state = AppState::new(EventRegistry::new());

    // Build and run the server
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(addr = %config.listen_addr, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received shutdown signal");
        })
        .await?;

    info!("Event registry shutdown complete");
    Ok(())
}
