//! fetch-proxy binary.
//!
//! Serves `/fetch?url=<target>` on port 8080 and relays each request to the
//! target. Configuration is fixed to `ProxyConfig::default()`.

use fetch_proxy::config::ProxyConfig;
use fetch_proxy::lifecycle;
use fetch_proxy::observability::logging;

#[tokio::main]
async fn main() {
    let config = ProxyConfig::default();
    logging::init_logging(&config.observability);

    tracing::info!("fetch-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = lifecycle::run(config).await {
        tracing::error!(error = %e, "Server failed");
        std::process::exit(1);
    }

    tracing::info!("Shutdown complete");
}
