//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig.bind_address
//!     → listener.rs (parse, bind)
//!     → TcpListener handed to http::HttpServer::run
//! ```

pub mod listener;
