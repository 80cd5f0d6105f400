//! HTTP server lifecycle and configuration
//!
//! Provides [`start_server`] which binds to a TCP port and runs the
//! axum server until the process is terminated.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind (e.g. `0.0.0.0`)
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
    /// Directory holding the JSON data files
    pub data_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 3000,
            data_dir: String::from("data"),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `ROADRACE_HOST`, `ROADRACE_PORT`, and
    /// `ROADRACE_DATA_DIR` where set
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("ROADRACE_HOST").unwrap_or(defaults.host),
            port: std::env::var("ROADRACE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            data_dir: std::env::var("ROADRACE_DATA_DIR").unwrap_or(defaults.data_dir),
        }
    }
}

/// Errors that can occur when starting or running the server
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address
    #[error("bind error: {0}")]
    Bind(String),

    /// The server hit a fatal error while serving
    #[error("serve error: {0}")]
    Serve(String),
}

/// Bind the configured address and serve requests until terminated.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server
/// encounters a fatal I/O error.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))?;

    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "server listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))?;

    Ok(())
}
