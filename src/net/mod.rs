//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig.bind_address
//!     → listener.rs (parse, bind, log)
//!     → tokio TcpListener handed to the HTTP server
//! ```
//!
//! # Design Decisions
//! - Bind failures are fatal at startup
//! - No connection limit; each request is served independently

pub mod listener;

pub use listener::bind;
