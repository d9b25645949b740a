//! Response handling and transformation.
//!
//! # Responsibilities
//! - Relay the upstream status unchanged
//! - Relay upstream headers minus the hop-by-hop set
//! - Relay the upstream body
//!
//! # Design Decisions
//! - 200 responses stream; a body error mid-stream is logged and the
//!   connection is cut, since the status line is already on the wire
//! - Every other status is buffered in full and logged with its body before
//!   anything is written to the caller
//!
//! TODO: buffering non-200 bodies has no size cap; stream large error bodies
//! once the log line can be produced from a bounded prefix.

use axum::{body::Body, http::StatusCode, response::Response};
use futures_util::TryStreamExt;

use crate::http::error::ProxyError;
use crate::security::headers::filter_headers;

/// Convert an upstream response into the response sent to the caller.
pub async fn relay_response(upstream: reqwest::Response) -> Result<Response, ProxyError> {
    let status = upstream.status();
    let headers = filter_headers(upstream.headers());

    let body = if status == StatusCode::OK {
        let url = upstream.url().to_string();
        let stream = upstream.bytes_stream().inspect_err(move |e| {
            tracing::error!(
                target_url = %url,
                error = %crate::http::error::chain(e),
                "Failed to stream upstream response body"
            );
        });
        Body::from_stream(stream)
    } else {
        let bytes = upstream.bytes().await.map_err(ProxyError::UpstreamBody)?;
        tracing::warn!(
            status = status.as_u16(),
            body = %String::from_utf8_lossy(&bytes),
            "Upstream returned non-200 response"
        );
        Body::from(bytes)
    };

    let mut response = Response::new(body);
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
