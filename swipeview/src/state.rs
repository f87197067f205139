//! Page synchronization state and its observable store.
//!
//! The store holds the settled page position plus the navigability
//! flags derived from it, and notifies subscribers synchronously on
//! every update. It is the single source of truth that both the
//! container's imperative API and descendant consumers read from.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

/// Snapshot of the settled page position and navigability flags.
///
/// `has_next_page` and `has_previous_page` are derived from `page` and
/// the child count known at the time of the last update; they are never
/// set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Index of the currently settled page.
    pub page: usize,
    /// Whether a page exists after the current one.
    pub has_next_page: bool,
    /// Whether a page exists before the current one.
    pub has_previous_page: bool,
}

impl PageState {
    /// Initial state for a store seeded at `initial_page`.
    ///
    /// `has_next_page` starts optimistically true; the first selection
    /// event reconciles it against the real child count.
    fn seeded(initial_page: usize) -> Self {
        Self {
            page: initial_page,
            has_next_page: true,
            has_previous_page: initial_page > 0,
        }
    }
}

/// Partial update merged into the current state.
///
/// `None` fields leave the current value untouched. Kept crate-private:
/// public mutation goes through [`PageStateStore::apply_selection`] so
/// the derived flags can never drift from `page`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct StateUpdate {
    pub page: Option<usize>,
    pub has_next_page: Option<bool>,
    pub has_previous_page: Option<bool>,
}

type SubscriberFn = dyn Fn(&PageState) + Send + Sync;

struct Subscriber {
    id: u64,
    callback: Arc<SubscriberFn>,
}

struct StoreInner {
    state: RwLock<PageState>,
    subscribers: RwLock<Vec<Subscriber>>,
    next_id: AtomicU64,
}

/// Observable store for [`PageState`].
///
/// Cheap to clone; all clones share the same state and subscriber
/// list. Updates notify every subscriber synchronously, in
/// subscription order, before the updating call returns.
#[derive(Clone)]
pub struct PageStateStore {
    inner: Arc<StoreInner>,
}

impl PageStateStore {
    /// Create a store seeded at `initial_page`.
    pub fn new(initial_page: usize) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(PageState::seeded(initial_page)),
                subscribers: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Current snapshot. Never blocks on subscriber activity.
    pub fn state(&self) -> PageState {
        *self
            .inner
            .state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Apply a settled selection: sets `page` and recomputes both
    /// navigability flags in a single update, then notifies.
    pub fn apply_selection(&self, position: usize, child_count: usize) {
        self.set_state(StateUpdate {
            page: Some(position),
            has_next_page: Some(position + 1 < child_count),
            has_previous_page: Some(position > 0),
        });
    }

    /// Merge a partial update into the state, then notify every
    /// current subscriber with the new snapshot. One notification
    /// round per call; no coalescing.
    pub(crate) fn set_state(&self, update: StateUpdate) {
        let snapshot = {
            let mut guard = self
                .inner
                .state
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(page) = update.page {
                guard.page = page;
            }
            if let Some(has_next) = update.has_next_page {
                guard.has_next_page = has_next;
            }
            if let Some(has_prev) = update.has_previous_page {
                guard.has_previous_page = has_prev;
            }
            *guard
        };
        self.notify(&snapshot);
    }

    /// Register a callback invoked on every state update.
    ///
    /// Duplicate registrations are independent subscriptions. A
    /// subscription made during a notification round does not receive
    /// the in-progress round.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&PageState) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        {
            let mut guard = self
                .inner
                .subscribers
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            guard.push(Subscriber {
                id,
                callback: Arc::new(callback),
            });
        }
        log::trace!("page state subscriber {id} registered");
        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Drop every subscription. Called on container unmount.
    pub(crate) fn clear_subscribers(&self) {
        let mut guard = self
            .inner
            .subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.clear();
    }

    fn notify(&self, snapshot: &PageState) {
        // Iterate a frozen copy of the list so callbacks can subscribe
        // or unsubscribe mid-round without disturbing the iteration.
        // No lock is held while callbacks run.
        let round: Vec<(u64, Arc<SubscriberFn>)> = {
            let guard = self
                .inner
                .subscribers
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            guard
                .iter()
                .map(|s| (s.id, Arc::clone(&s.callback)))
                .collect()
        };
        for (id, callback) in round {
            // A panicking subscriber must not starve the rest of the round.
            if catch_unwind(AssertUnwindSafe(|| callback(snapshot))).is_err() {
                log::error!("page state subscriber {id} panicked during notification");
            }
        }
    }

    fn remove_subscriber(inner: &StoreInner, id: u64) -> bool {
        let mut guard = inner
            .subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = guard.len();
        guard.retain(|s| s.id != id);
        guard.len() != before
    }
}

impl fmt::Debug for PageStateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageStateStore")
            .field("state", &self.state())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle returned by [`PageStateStore::subscribe`].
///
/// Unsubscribing is explicit; dropping the handle leaves the
/// registration in place. Each subscriber is responsible for calling
/// [`unsubscribe`](Subscription::unsubscribe) during its own teardown.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: u64,
    store: Weak<StoreInner>,
}

impl Subscription {
    /// Remove the registration. Idempotent; safe to call from inside
    /// a notification callback.
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.store.upgrade() {
            if PageStateStore::remove_subscriber(&inner, self.id) {
                log::trace!("page state subscriber {} removed", self.id);
            }
        }
    }

    /// Whether the registration is still present in the store.
    pub fn is_active(&self) -> bool {
        match self.store.upgrade() {
            Some(inner) => inner
                .subscribers
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .iter()
                .any(|s| s.id == self.id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_state_merges_partial_updates() {
        let store = PageStateStore::new(0);
        store.set_state(StateUpdate {
            page: Some(3),
            ..Default::default()
        });
        assert_eq!(
            store.state(),
            PageState {
                page: 3,
                has_next_page: true,
                has_previous_page: false,
            }
        );

        // Later fields override earlier ones; untouched fields persist.
        store.set_state(StateUpdate {
            has_next_page: Some(false),
            has_previous_page: Some(true),
            ..Default::default()
        });
        assert_eq!(
            store.state(),
            PageState {
                page: 3,
                has_next_page: false,
                has_previous_page: true,
            }
        );
    }

    #[test]
    fn test_each_set_state_is_one_notification_round() {
        use std::sync::Mutex;

        let store = PageStateStore::new(0);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_cb = Arc::clone(&seen);
        let _sub = store.subscribe(move |state| {
            seen_cb.lock().unwrap().push(state.page);
        });

        store.set_state(StateUpdate {
            page: Some(1),
            ..Default::default()
        });
        store.set_state(StateUpdate {
            page: Some(2),
            ..Default::default()
        });
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_seeded_state() {
        assert_eq!(
            PageStateStore::new(0).state(),
            PageState {
                page: 0,
                has_next_page: true,
                has_previous_page: false,
            }
        );
        assert_eq!(
            PageStateStore::new(2).state(),
            PageState {
                page: 2,
                has_next_page: true,
                has_previous_page: true,
            }
        );
    }
}
