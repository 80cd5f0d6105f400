//! Road race simulation server binary
//!
//! Startup sequence:
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from the environment
//! 3. Build the shared state over the data directory
//! 4. Serve the HTTP API until terminated

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use roadrace::server::{start_server, ServerConfig};
use roadrace::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = ServerConfig::from_env();
    info!(
        host = %config.host,
        port = config.port,
        data_dir = %config.data_dir,
        "roadrace starting"
    );

    let state = Arc::new(AppState::new(&config.data_dir));
    start_server(&config, state).await?;

    Ok(())
}
