//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Build the HTTP server and its outbound client
//! - Bind the listener and serve until a shutdown signal
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use crate::config::validation::join_errors;
use crate::config::{validate_config, ProxyConfig, ValidationError};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::net::listener::{self, ListenerError};

/// Errors that abort process startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Invalid configuration: {}", join_errors(.0))]
    Config(Vec<ValidationError>),

    #[error("Failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("Server failed: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the proxy and block until it has shut down.
pub async fn run(config: ProxyConfig) -> Result<(), StartupError> {
    validate_config(&config).map_err(StartupError::Config)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        fetch_path = %config.listener.fetch_path,
        upstream_timeout_secs = ?config.upstream.timeout_secs,
        max_redirects = config.upstream.max_redirects,
        "Configuration loaded"
    );

    let server = HttpServer::new(config)?;
    let listener = listener::bind(&server.config().listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_shutdown_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;
    Ok(())
}
