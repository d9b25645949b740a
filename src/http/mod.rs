//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request on /fetch
//!     → server.rs (Axum router, forwarding handler)
//!     → request.rs (url parameter → target URL)
//!     → security::headers (strip hop-by-hop, drop Host)
//!     → reqwest client (method, headers, streamed body)
//!     → response.rs (status, filtered headers, body relay)
//!     → Send to caller
//! Any failure before the status is written
//!     → error.rs (ProxyError → 400 / 500 / 502 plain text)
//! ```

pub mod error;
pub mod request;
pub mod response;
pub mod server;

pub use error::ProxyError;
pub use server::{AppState, HttpServer};
