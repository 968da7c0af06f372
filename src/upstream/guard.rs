//! Scoped holds on upstream response bodies.
//!
//! # Responsibilities
//! - Count the bodies currently held
//! - Label each hold with the request it serves, for tracing
//! - Release exactly once when the lease is dropped, on every exit path
//!   (read finished, read failed, deadline expired)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::body::{Body, Bytes};
use hyper::body::Incoming;

use crate::observability::metrics;

/// Counts upstream bodies that are acquired but not yet released.
#[derive(Debug, Clone, Default)]
pub struct UpstreamTracker {
    open: Arc<AtomicU64>,
}

impl UpstreamTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly acquired body for the inbound request `request_id`.
    /// The returned lease releases it on drop.
    pub fn acquire(&self, request_id: Option<&str>) -> UpstreamLease {
        let open = self.open.fetch_add(1, Ordering::SeqCst) + 1;
        metrics::set_open_upstream_bodies(open);

        let request_id: Arc<str> = Arc::from(request_id.unwrap_or("unknown"));
        tracing::trace!(request_id = %request_id, open, "Upstream body acquired");
        UpstreamLease {
            open: Arc::clone(&self.open),
            request_id,
        }
    }

    /// Bodies currently held.
    pub fn open_count(&self) -> u64 {
        self.open.load(Ordering::SeqCst)
    }
}

/// A held upstream body slot. Decrements the open count when dropped.
#[derive(Debug)]
pub struct UpstreamLease {
    open: Arc<AtomicU64>,
    request_id: Arc<str>,
}

impl Drop for UpstreamLease {
    fn drop(&mut self) {
        let open = self.open.fetch_sub(1, Ordering::SeqCst) - 1;
        metrics::set_open_upstream_bodies(open);
        tracing::trace!(request_id = %self.request_id, open, "Upstream body released");
    }
}

/// An upstream response body together with the lease that accounts for it.
///
/// Dropping this value, read or not, drops the body (returning or closing
/// the connection) and then releases the lease.
#[derive(Debug)]
pub struct UpstreamBody {
    body: Incoming,
    lease: UpstreamLease,
}

impl UpstreamBody {
    pub fn new(body: Incoming, lease: UpstreamLease) -> Self {
        Self { body, lease }
    }

    /// Read the body to completion. The lease is released before returning.
    pub async fn read_to_end(self) -> Result<Bytes, axum::Error> {
        let Self { body, lease } = self;
        let bytes = axum::body::to_bytes(Body::new(body), usize::MAX).await;
        drop(lease);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_counts() {
        let tracker = UpstreamTracker::new();
        assert_eq!(tracker.open_count(), 0);

        let lease1 = tracker.acquire(Some("req-1"));
        assert_eq!(tracker.open_count(), 1);

        let lease2 = tracker.clone().acquire(None);
        assert_eq!(tracker.open_count(), 2);

        drop(lease1);
        assert_eq!(tracker.open_count(), 1);

        drop(lease2);
        assert_eq!(tracker.open_count(), 0);
    }

    #[test]
    fn lease_released_on_unwind() {
        let tracker = UpstreamTracker::new();
        let inner = tracker.clone();

        let result = std::panic::catch_unwind(move || {
            let _lease = inner.acquire(Some("req-panic"));
            panic!("handler blew up");
        });

        assert!(result.is_err());
        assert_eq!(tracker.open_count(), 0);
    }

    #[test]
    fn lease_is_labelled_with_request_id() {
        let tracker = UpstreamTracker::new();
        let lease = tracker.acquire(None);
        assert_eq!(&*lease.request_id, "unknown");

        let labelled = tracker.acquire(Some("req-9"));
        assert_eq!(&*labelled.request_id, "req-9");
        assert_eq!(tracker.open_count(), 2);
    }
}
