//! Security subsystem.
//!
//! Header hygiene for a forwarding intermediary: connection-scoped headers
//! never cross the proxy in either direction.

pub mod headers;
