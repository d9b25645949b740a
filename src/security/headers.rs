//! Header manipulation.
//!
//! # Responsibilities
//! - Strip hop-by-hop headers in both directions
//!   (caller → upstream request, upstream → caller response)
//!
//! # Design Decisions
//! - The hop-by-hop set is a read-only constant shared by every request
//! - `HeaderMap` names are already lowercase, so matching is case-insensitive
//! - Multi-valued headers keep every value in arrival order

use axum::http::header::{self, HeaderMap, HeaderName};

/// Headers meaningful only for a single transport connection.
pub const HOP_BY_HOP_HEADERS: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailers",
    "transfer-encoding",
    "upgrade",
];

/// Returns `true` if `name` belongs to the hop-by-hop set.
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP_HEADERS
        .iter()
        .any(|hop| name.as_str().eq_ignore_ascii_case(hop))
}

/// Copy every end-to-end header from `source`.
pub fn filter_headers(source: &HeaderMap) -> HeaderMap {
    let mut filtered = HeaderMap::with_capacity(source.len());
    for (name, value) in source.iter() {
        if !is_hop_by_hop(name) {
            filtered.append(name.clone(), value.clone());
        }
    }
    filtered
}

/// Headers for the upstream request.
///
/// Same as [`filter_headers`], minus `Host`: the client derives it from the
/// target URL, the caller's value names the proxy itself.
pub fn outbound_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut headers = filter_headers(inbound);
    headers.remove(header::HOST);
    headers
}
