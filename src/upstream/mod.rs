//! Upstream subsystem: the frontend's outbound call to the API.
//!
//! # Data Flow
//! ```text
//! relay handler
//!     → client.rs (GET fixed URL, optional deadline)
//!     → guard.rs (lease held while the body is read)
//!     → Bytes or UpstreamError back to the handler
//! ```
//!
//! # Design Decisions
//! - One attempt per inbound request; no retry, no caching
//! - The upstream status is not checked
//! - The body lease is released on every exit path, including cancellation

pub mod client;
pub mod guard;

pub use client::UpstreamClient;
pub use guard::{UpstreamBody, UpstreamLease, UpstreamTracker};
