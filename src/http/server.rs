//! HTTP server setup and the forwarding handler.
//!
//! # Responsibilities
//! - Create Axum Router with the fetch endpoint
//! - Wire up middleware (tracing)
//! - Build the shared outbound client
//! - Serve until the shutdown signal fires

use std::time::Duration;

use axum::{
    body::{Body, HttpBody},
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::{ProxyConfig, UpstreamConfig};
use crate::http::error::ProxyError;
use crate::http::request::build_target_url;
use crate::http::response::relay_response;
use crate::security::headers::outbound_headers;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
}

/// HTTP server for the fetch proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, reqwest::Error> {
        let client = build_client(&config.upstream)?;
        let router = Self::build_router(&config, AppState { client });
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            .route(&config.listener.fetch_path, any(fetch_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// The routed service, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Run the server on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            fetch_path = %self.config.listener.fetch_path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the outbound client. No timeout unless one is configured.
fn build_client(config: &UpstreamConfig) -> Result<reqwest::Client, reqwest::Error> {
    let redirects = match config.max_redirects {
        0 => reqwest::redirect::Policy::none(),
        n => reqwest::redirect::Policy::limited(n),
    };

    let mut builder = reqwest::Client::builder().redirect(redirects);
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}

/// Forwarding handler.
/// Derives the target from the query, re-issues the request, relays the answer.
async fn fetch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    match forward(&state.client, request).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

async fn forward(client: &reqwest::Client, request: Request<Body>) -> Result<Response, ProxyError> {
    let target = build_target_url(request.uri().query())?;
    let (parts, body) = request.into_parts();

    tracing::debug!(method = %parts.method, target_url = %target, "Forwarding request");

    let mut outbound = client
        .request(parts.method.clone(), target.as_str())
        .headers(outbound_headers(&parts.headers));
    if !body.is_end_stream() {
        outbound = outbound.body(reqwest::Body::wrap_stream(body.into_data_stream()));
    }
    let outbound = outbound.build().map_err(ProxyError::RequestConstruction)?;

    let upstream = client.execute(outbound).await.map_err(|e| {
        tracing::error!(
            method = %parts.method,
            target_url = %target,
            error = %crate::http::error::chain(&e),
            "Upstream request failed"
        );
        ProxyError::UpstreamUnreachable(e)
    })?;

    tracing::debug!(
        target_url = %target,
        status = upstream.status().as_u16(),
        "Upstream responded"
    );

    relay_response(upstream).await
}
