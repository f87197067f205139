//! The seam between the synchronization core and the host's pager
//! view.

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::config::PagerConfig;

/// Command surface of the host's pager view.
///
/// The view is an opaque collaborator: it owns gesture recognition,
/// animation, and rendering, and reports back through
/// [`EventAdapter`](crate::EventAdapter). Commands are fire-and-forget
/// with no completion signal; eventual settling is observed via a
/// later selected event. Index validation is the view's job, not the
/// caller's.
pub trait PagerView: Send + Sync {
    /// Start an animated transition to `index`.
    fn set_page(&self, index: usize);

    /// Jump to `index` without animating the transition.
    fn set_page_without_animation(&self, index: usize);

    /// Toggle gesture-driven paging. Imperative paging is unaffected.
    fn set_scroll_enabled(&self, enabled: bool);

    /// Mount-time configuration, passed through verbatim.
    fn apply_config(&self, config: &PagerConfig) {
        let _ = config;
    }
}

/// Shared slot for the attached view handle.
///
/// Empty outside the mounted window; commands issued against an empty
/// slot are dropped by [`CommandProxy`](crate::CommandProxy).
#[derive(Clone, Default)]
pub(crate) struct ViewSlot {
    inner: Arc<RwLock<Option<Arc<dyn PagerView>>>>,
}

impl ViewSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, view: Arc<dyn PagerView>) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(view);
    }

    pub fn detach(&self) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = None;
    }

    pub fn get(&self) -> Option<Arc<dyn PagerView>> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_attached(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }
}

impl fmt::Debug for ViewSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewSlot")
            .field("attached", &self.is_attached())
            .finish()
    }
}
