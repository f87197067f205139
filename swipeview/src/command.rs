//! Imperative command proxy for the attached view.

use crate::view::ViewSlot;

/// Translates the three imperative pager operations into commands
/// against the attached view.
///
/// While no view is attached (before mount, after unmount) every
/// command is a silent no-op: the consequence of a missed command is
/// a skipped UI transition, not corruption, so nothing is raised.
#[derive(Debug, Clone)]
pub struct CommandProxy {
    slot: ViewSlot,
}

impl CommandProxy {
    pub(crate) fn new(slot: ViewSlot) -> Self {
        Self { slot }
    }

    /// Animated transition to `index`. The view clamps or rejects
    /// out-of-range indices.
    pub fn set_page(&self, index: usize) {
        match self.slot.get() {
            Some(view) => view.set_page(index),
            None => log::debug!("set_page({index}) dropped, no view attached"),
        }
    }

    /// Instant transition to `index`, skipping the animation.
    pub fn set_page_without_animation(&self, index: usize) {
        match self.slot.get() {
            Some(view) => view.set_page_without_animation(index),
            None => {
                log::debug!("set_page_without_animation({index}) dropped, no view attached");
            }
        }
    }

    /// Toggle gesture-driven paging. Does not affect imperative
    /// `set_page` calls.
    pub fn set_scroll_enabled(&self, enabled: bool) {
        match self.slot.get() {
            Some(view) => view.set_scroll_enabled(enabled),
            None => log::debug!("set_scroll_enabled({enabled}) dropped, no view attached"),
        }
    }
}
