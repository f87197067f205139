//! Transition events emitted by the host view and the adapter that
//! turns them into store updates.
//!
//! For a single gesture the host is expected to emit zero or more
//! scroll frames followed by exactly one selected event once the page
//! settles. The adapter does not enforce that ordering; a missing
//! selected event leaves the store stale until the next one arrives.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::state::PageStateStore;

/// In-flight scroll frame. `offset` is the fractional progress from
/// `position` toward the next page, in `0.0..1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageScrollEvent {
    pub position: usize,
    pub offset: f32,
}

/// Phase of the host view's scroll interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    /// No interaction in progress.
    Idle,
    /// Animation running toward a settled position.
    Settling,
    /// The user is actively dragging.
    Dragging,
}

/// Scroll phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageScrollStateEvent {
    pub phase: ScrollPhase,
}

/// A page finished settling at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelectedEvent {
    pub position: usize,
}

pub type ScrollCallback = Arc<dyn Fn(&PageScrollEvent) + Send + Sync>;
pub type ScrollStateCallback = Arc<dyn Fn(&PageScrollStateEvent) + Send + Sync>;
pub type SelectedCallback = Arc<dyn Fn(&PageSelectedEvent) + Send + Sync>;

/// User-supplied event callbacks, installed via the container builder.
#[derive(Clone, Default)]
pub(crate) struct EventCallbacks {
    pub on_page_scroll: Option<ScrollCallback>,
    pub on_page_scroll_state_changed: Option<ScrollStateCallback>,
    pub on_page_selected: Option<SelectedCallback>,
}

struct AdapterInner {
    store: PageStateStore,
    page_count: Arc<AtomicUsize>,
    dragging: AtomicBool,
    callbacks: EventCallbacks,
}

/// Receives raw host events, forwards them verbatim to the user's
/// callbacks, and derives store updates from selected events.
///
/// Cheap to clone; the host keeps a clone and calls into it from its
/// event delivery thread. Handler invocations are treated as atomic
/// units of work; the hosting environment is expected to serialize
/// event delivery.
#[derive(Clone)]
pub struct EventAdapter {
    inner: Arc<AdapterInner>,
}

impl EventAdapter {
    pub(crate) fn new(
        store: PageStateStore,
        page_count: Arc<AtomicUsize>,
        callbacks: EventCallbacks,
    ) -> Self {
        Self {
            inner: Arc::new(AdapterInner {
                store,
                page_count,
                dragging: AtomicBool::new(false),
                callbacks,
            }),
        }
    }

    /// An in-flight scroll frame. Forwarded verbatim; never mutates
    /// the settled-page state.
    pub fn page_scroll(&self, event: PageScrollEvent) {
        if let Some(callback) = &self.inner.callbacks.on_page_scroll {
            callback(&event);
        }
    }

    /// A scroll phase change. Forwarded verbatim; additionally tracks
    /// the dragging flag used by the responder-capture predicate. Not
    /// part of [`crate::PageState`].
    pub fn scroll_state_changed(&self, event: PageScrollStateEvent) {
        if let Some(callback) = &self.inner.callbacks.on_page_scroll_state_changed {
            callback(&event);
        }
        let dragging = event.phase == ScrollPhase::Dragging;
        self.inner.dragging.store(dragging, Ordering::SeqCst);
        log::trace!("scroll phase {:?}", event.phase);
    }

    /// The terminating selection event of a transition. Forwarded
    /// verbatim, then applied to the store as one atomic update.
    pub fn page_selected(&self, event: PageSelectedEvent) {
        if let Some(callback) = &self.inner.callbacks.on_page_selected {
            callback(&event);
        }
        let child_count = self.inner.page_count.load(Ordering::SeqCst);
        self.inner.store.apply_selection(event.position, child_count);
        log::debug!("page settled at {} of {}", event.position, child_count);
    }

    /// Whether the user is actively dragging the pager.
    pub fn is_dragging(&self) -> bool {
        self.inner.dragging.load(Ordering::SeqCst)
    }
}
