use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use super::types::Projection;

/// Stamp handed out when a calculation starts. Later requests always carry
/// larger stamps, whatever order they finish in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct RequestTicket {
    stamp: u64,
}

impl RequestTicket {
    pub fn stamp(self) -> u64 {
        self.stamp
    }
}

#[derive(Debug)]
struct Published<T> {
    stamp: u64,
    value: Arc<T>,
}

/// Last-writer-wins by request stamp: a result is only published if no
/// newer request has already published one.
#[derive(Debug)]
pub struct ProjectionSession<T = Projection> {
    issued: AtomicU64,
    published: Mutex<Option<Published<T>>>,
}

impl<T> Default for ProjectionSession<T> {
    fn default() -> Self {
        Self {
            issued: AtomicU64::new(0),
            published: Mutex::new(None),
        }
    }
}

impl<T> ProjectionSession<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestTicket {
        let stamp = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket { stamp }
    }

    /// A newer request has been started since `ticket` was issued.
    pub fn is_superseded(&self, ticket: RequestTicket) -> bool {
        self.issued.load(Ordering::SeqCst) > ticket.stamp
    }

    /// Returns whether `value` became the published result.
    pub fn publish(&self, ticket: RequestTicket, value: T) -> bool {
        let mut published = self.published.lock().unwrap_or_else(PoisonError::into_inner);
        if published.as_ref().is_some_and(|p| p.stamp >= ticket.stamp) {
            debug!(target: "retire::session", stamp = ticket.stamp, "discarding stale result");
            return false;
        }
        *published = Some(Published {
            stamp: ticket.stamp,
            value: Arc::new(value),
        });
        true
    }

    pub fn latest(&self) -> Option<(u64, Arc<T>)> {
        let published = self.published.lock().unwrap_or_else(PoisonError::into_inner);
        published.as_ref().map(|p| (p.stamp, Arc::clone(&p.value)))
    }
}
