//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handler, relay, lifecycle
//!     → tracing events (structured fields)
//!     → logging.rs subscriber (stdout, text or JSON)
//! tower-http TraceLayer
//!     → one span per inbound request
//! ```

pub mod logging;
