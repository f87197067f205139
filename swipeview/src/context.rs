//! Descendant-facing channel published by a container instance.

use crate::command::CommandProxy;
use crate::state::{PageState, PageStateStore, Subscription};

/// Handle through which descendants of one container observe page
/// state and issue imperative commands.
///
/// Cheap to clone; every clone refers to the same container instance.
/// Descendants get read access to the store and write access only
/// through the three imperative operations. Contexts of different
/// containers never share state.
#[derive(Debug, Clone)]
pub struct PagerContext {
    store: PageStateStore,
    commands: CommandProxy,
}

impl PagerContext {
    pub(crate) fn new(store: PageStateStore, commands: CommandProxy) -> Self {
        Self { store, commands }
    }

    /// Current state snapshot.
    pub fn state(&self) -> PageState {
        self.store.state()
    }

    /// Observe every state update. See
    /// [`PageStateStore::subscribe`] for ordering guarantees.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&PageState) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    /// Animated transition to `index`.
    pub fn set_page(&self, index: usize) {
        self.commands.set_page(index);
    }

    /// Instant transition to `index`.
    pub fn set_page_without_animation(&self, index: usize) {
        self.commands.set_page_without_animation(index);
    }

    /// Toggle gesture-driven paging.
    pub fn set_scroll_enabled(&self, enabled: bool) {
        self.commands.set_scroll_enabled(enabled);
    }
}
