//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum serve, middleware stack)
//!     → request.rs (assign or keep x-request-id)
//!     → service router (api / frontend / minimal / hot-reload)
//!     → response.rs (fixed status and content type)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id_of, UuidRequestId, X_REQUEST_ID};
pub use server::HttpServer;
