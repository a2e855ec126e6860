//! Request lifecycle shared by every view.
//!
//! [`RemoteResource`] replaces per-screen `loading`/`error` flags; its
//! transitions are driven only by [`RemoteResource::begin`] and
//! [`RemoteResource::resolve`]. [`RequestTracker`] scopes responses to the
//! context that issued them so a late reply never lands in a closed or
//! re-targeted view.

use std::cell::Cell;

use crate::error::ApiError;

/// Remote resource state
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteResource<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for RemoteResource<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RemoteResource<T> {
    /// Enter `Loading`, dropping whatever was held.
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    pub fn resolve(&mut self, result: Result<T, ApiError>) {
        *self = Self::from(result);
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Patch held data in place. No-op unless `Ready`.
    pub fn map_ready(&mut self, f: impl FnOnce(&mut T)) {
        if let Self::Ready(data) = self {
            f(data);
        }
    }
}

impl<T> From<Result<T, ApiError>> for RemoteResource<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// Identifies one issued request within a [`RequestTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic generation counter. Issuing a new ticket or invalidating makes
/// every earlier ticket stale.
#[derive(Debug, Default)]
pub struct RequestTracker {
    generation: Cell<u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        let current = ticket.0 == self.generation.get();
        if !current {
            tracing::trace!(ticket = ticket.0, generation = self.generation.get(), "discarding stale response");
        }
        current
    }

    /// Called on close, unmount or when the view switches to another record.
    pub fn invalidate(&self) {
        self.generation.set(self.generation.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_lifecycle() {
        let mut resource: RemoteResource<Vec<u32>> = RemoteResource::default();
        assert!(resource.is_idle());

        resource.begin();
        assert!(resource.is_loading());
        assert_eq!(resource.data(), None);

        resource.resolve(Ok(vec![1, 2, 3]));
        assert!(resource.is_ready());
        assert_eq!(resource.data(), Some(&vec![1, 2, 3]));

        resource.begin();
        assert!(resource.is_loading());
    }

    #[test]
    fn test_resource_failure_keeps_message() {
        let mut resource: RemoteResource<u32> = RemoteResource::Loading;
        resource.resolve(Err(ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        }));
        assert!(resource.is_failed());
        assert_eq!(resource.error(), Some("Request failed with status 500: boom"));
        assert_eq!(resource.data(), None);
    }

    #[test]
    fn test_map_ready_only_patches_ready() {
        let mut ready = RemoteResource::Ready(vec!["a", "b"]);
        ready.map_ready(|items| items.retain(|i| *i != "a"));
        assert_eq!(ready.data(), Some(&vec!["b"]));

        let mut loading: RemoteResource<Vec<&str>> = RemoteResource::Loading;
        loading.map_ready(|items| items.clear());
        assert!(loading.is_loading());
    }

    #[test]
    fn test_tracker_discards_superseded_tickets() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(&first));

        let second = tracker.begin();
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
    }

    #[test]
    fn test_tracker_invalidate_on_close() {
        let tracker = RequestTracker::new();
        let ticket = tracker.begin();
        tracker.invalidate();
        assert!(!tracker.is_current(&ticket));

        // responses completing in any order after reopening
        let reopened = tracker.begin();
        assert!(!tracker.is_current(&ticket));
        assert!(tracker.is_current(&reopened));
    }
}
