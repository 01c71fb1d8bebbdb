//! Movie Store
//!
//! A REST API serving an in-memory collection of movies.
//! Provides list, get, create, update and delete endpoints under `/movies`.

use movie_store::app::{build_router, shutdown_signal};
use movie_store::config::Config;
use movie_store::state::AppState;
use std::net::SocketAddr;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    // Initialize application state
    let state = if config.api.seed {
        AppState::seeded(config.api.mode)
    } else {
        AppState::new(config.api.mode)
    };
    info!("Loaded {} movies (mode: {})", state.len(), state.mode());

    let app = build_router(state.into_shared());

    // Bind to address from config
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return Err(e.into());
        }
    };

    info!("Starting server at port {}", addr.port());
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
