//! Proxy error types and response handling.
//!
//! Every variant is raised before the response status is committed, so each
//! one maps to a plain-text error response. Failures after that point are
//! logged by the relay and never become a `ProxyError`.

use std::error::Error as StdError;
use std::fmt::Write as _;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors that can occur while forwarding a request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The `url` query parameter is absent or empty.
    #[error("URL parameter is missing")]
    MissingParameter,

    /// The outbound request could not be assembled (e.g. unparsable target).
    #[error("Failed to build upstream request: {}", chain(.0))]
    RequestConstruction(#[source] reqwest::Error),

    /// Sending to upstream failed (DNS, refused, TLS, timeout).
    #[error("Failed to fetch URL: {}", chain(.0))]
    UpstreamUnreachable(#[source] reqwest::Error),

    /// A non-200 upstream body could not be buffered. The status line is not
    /// committed yet, so the caller still gets a 500.
    #[error("Failed to read response: {}", chain(.0))]
    UpstreamBody(#[source] reqwest::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingParameter => StatusCode::BAD_REQUEST,
            ProxyError::RequestConstruction(_) | ProxyError::UpstreamBody(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ProxyError::UpstreamUnreachable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Proxy error");
        } else {
            tracing::debug!(status = status.as_u16(), error = %message, "Rejected request");
        }

        (status, message).into_response()
    }
}

/// Render an error followed by all of its sources, `outer: inner: root`.
///
/// reqwest's own `Display` stops at "error sending request for url (...)";
/// the useful part ("Connection refused") lives further down the chain.
pub fn chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(rendered, ": {cause}");
        source = cause.source();
    }
    rendered
}
