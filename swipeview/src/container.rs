//! The pager container: lifecycle owner and wiring hub.

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::command::CommandProxy;
use crate::config::PagerConfig;
use crate::context::PagerContext;
use crate::direction::ResolvedDirection;
use crate::event::{
    EventAdapter, EventCallbacks, PageScrollEvent, PageScrollStateEvent, PageSelectedEvent,
};
use crate::state::{PageState, PageStateStore};
use crate::view::{PagerView, ViewSlot};

/// Container lifecycle. Linear, no re-entry: commands and events are
/// only meaningful while `Mounted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Constructed,
    Mounted,
    Unmounted,
}

impl Lifecycle {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Lifecycle::Constructed,
            1 => Lifecycle::Mounted,
            _ => Lifecycle::Unmounted,
        }
    }
}

/// Builder for [`PagerContainer`].
///
/// Collects the mount configuration, the application's page count, and
/// the optional pass-through event callbacks.
#[derive(Default)]
pub struct PagerBuilder {
    config: PagerConfig,
    page_count: usize,
    callbacks: EventCallbacks,
}

impl PagerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: PagerConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of pages the application supplies. Can be updated later
    /// via [`PagerContainer::set_page_count`].
    pub fn page_count(mut self, count: usize) -> Self {
        self.page_count = count;
        self
    }

    /// Receive every in-flight scroll frame, verbatim.
    pub fn on_page_scroll<F>(mut self, callback: F) -> Self
    where
        F: Fn(&PageScrollEvent) + Send + Sync + 'static,
    {
        self.callbacks.on_page_scroll = Some(Arc::new(callback));
        self
    }

    /// Receive every scroll phase change, verbatim.
    pub fn on_page_scroll_state_changed<F>(mut self, callback: F) -> Self
    where
        F: Fn(&PageScrollStateEvent) + Send + Sync + 'static,
    {
        self.callbacks.on_page_scroll_state_changed = Some(Arc::new(callback));
        self
    }

    /// Receive every terminating selection event, verbatim, before the
    /// store update it derives.
    pub fn on_page_selected<F>(mut self, callback: F) -> Self
    where
        F: Fn(&PageSelectedEvent) + Send + Sync + 'static,
    {
        self.callbacks.on_page_selected = Some(Arc::new(callback));
        self
    }

    pub fn build(self) -> PagerContainer {
        let store = PageStateStore::new(self.config.initial_page);
        let page_count = Arc::new(AtomicUsize::new(self.page_count));
        let adapter = EventAdapter::new(store.clone(), Arc::clone(&page_count), self.callbacks);
        let slot = ViewSlot::new();
        let commands = CommandProxy::new(slot.clone());
        PagerContainer {
            config: self.config,
            store,
            adapter,
            commands,
            slot,
            page_count,
            phase: AtomicU8::new(Lifecycle::Constructed as u8),
        }
    }
}

/// Owns one page-state store and the host view handle, wires adapter
/// output into the store, and publishes store plus imperative API to
/// descendants through [`PagerContext`].
///
/// Each container instance is independent: its store, adapter, and
/// context channel are scoped to this instance alone.
pub struct PagerContainer {
    config: PagerConfig,
    store: PageStateStore,
    adapter: EventAdapter,
    commands: CommandProxy,
    slot: ViewSlot,
    page_count: Arc<AtomicUsize>,
    phase: AtomicU8,
}

impl PagerContainer {
    /// Container with the given config and no user callbacks.
    pub fn new(config: PagerConfig) -> Self {
        PagerBuilder::new().config(config).build()
    }

    pub fn builder() -> PagerBuilder {
        PagerBuilder::new()
    }

    /// The host view is available; apply the mount configuration and
    /// enter `Mounted`. Ignored unless currently `Constructed`.
    pub fn on_attach(&self, view: Arc<dyn PagerView>) {
        if self.lifecycle() != Lifecycle::Constructed {
            log::warn!("on_attach ignored in {:?}", self.lifecycle());
            return;
        }
        view.apply_config(&self.config);
        self.slot.attach(view);
        self.phase.store(Lifecycle::Mounted as u8, Ordering::SeqCst);
        log::debug!(
            "pager mounted at page {} with {} pages",
            self.store.state().page,
            self.page_count.load(Ordering::SeqCst)
        );
    }

    /// Release the host view handle and clear store subscribers; enter
    /// `Unmounted`. Ignored unless currently `Mounted`.
    pub fn on_detach(&self) {
        if self.lifecycle() != Lifecycle::Mounted {
            log::warn!("on_detach ignored in {:?}", self.lifecycle());
            return;
        }
        self.slot.detach();
        self.store.clear_subscribers();
        self.phase.store(Lifecycle::Unmounted as u8, Ordering::SeqCst);
        log::debug!("pager unmounted");
    }

    pub fn lifecycle(&self) -> Lifecycle {
        Lifecycle::from_u8(self.phase.load(Ordering::SeqCst))
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle() == Lifecycle::Mounted
    }

    /// Current state snapshot.
    pub fn state(&self) -> PageState {
        self.store.state()
    }

    /// The event intake the host view reports into.
    pub fn adapter(&self) -> EventAdapter {
        self.adapter.clone()
    }

    /// The per-instance channel handed to descendants: read access to
    /// the store, write access through the imperative operations only.
    pub fn context(&self) -> PagerContext {
        PagerContext::new(self.store.clone(), self.commands.clone())
    }

    /// Animated transition to `index`. No-op before mount and after
    /// unmount.
    pub fn set_page(&self, index: usize) {
        self.commands.set_page(index);
    }

    /// Instant transition to `index`. No-op before mount and after
    /// unmount.
    pub fn set_page_without_animation(&self, index: usize) {
        self.commands.set_page_without_animation(index);
    }

    /// Toggle gesture-driven paging. No-op before mount and after
    /// unmount.
    pub fn set_scroll_enabled(&self, enabled: bool) {
        self.commands.set_scroll_enabled(enabled);
    }

    /// Update the page count when the application's child list
    /// changes. Read by the adapter when deriving `has_next_page`.
    pub fn set_page_count(&self, count: usize) {
        self.page_count.store(count, Ordering::SeqCst);
        log::trace!("page count set to {count}");
    }

    pub fn page_count(&self) -> usize {
        self.page_count.load(Ordering::SeqCst)
    }

    /// Responder-capture predicate: whether the pager's own gesture
    /// recognizer should intercept touches over descendant-owned
    /// responders.
    pub fn should_capture_gestures(&self) -> bool {
        self.adapter.is_dragging()
    }

    /// Effective layout direction, with the `Locale` sentinel resolved
    /// against the platform.
    pub fn resolved_direction(&self) -> ResolvedDirection {
        self.config.layout_direction.resolve()
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }
}

impl std::fmt::Debug for PagerContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagerContainer")
            .field("lifecycle", &self.lifecycle())
            .field("state", &self.state())
            .field("page_count", &self.page_count())
            .finish()
    }
}
