//! Fetch Proxy Library
//!
//! A forwarding proxy: `ANY /fetch?url=<target>&...` is re-issued to
//! `<target>` with the same method, end-to-end headers and body, and the
//! upstream status, headers and body are relayed back.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod security;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
