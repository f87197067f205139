//! Mount-time pager configuration.

use serde::{Deserialize, Serialize};

use crate::direction::LayoutDirection;

/// Paging axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Edge-overscroll behavior, passed through to the host view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverscrollMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Whether dragging dismisses an open software keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardDismissMode {
    #[default]
    None,
    OnDrag,
}

/// Configuration handed to the host view when the container mounts.
///
/// `initial_page`, `layout_direction`, and `scroll_enabled` are
/// interpreted by the core; the remaining fields are style options
/// passed through verbatim for the view to honor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Page the view starts on.
    pub initial_page: usize,
    pub layout_direction: LayoutDirection,
    /// Whether gesture-driven paging starts enabled.
    pub scroll_enabled: bool,
    pub orientation: Orientation,
    pub overscroll_mode: OverscrollMode,
    /// How many pages the view keeps mounted on each side of the
    /// current one. `None` leaves the view's default in place.
    pub offscreen_page_limit: Option<usize>,
    /// Blank space between pages, in host units.
    pub page_margin: u16,
    pub keyboard_dismiss_mode: KeyboardDismissMode,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            initial_page: 0,
            layout_direction: LayoutDirection::default(),
            scroll_enabled: true,
            orientation: Orientation::default(),
            overscroll_mode: OverscrollMode::default(),
            offscreen_page_limit: None,
            page_margin: 0,
            keyboard_dismiss_mode: KeyboardDismissMode::default(),
        }
    }
}

impl PagerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_page(mut self, page: usize) -> Self {
        self.initial_page = page;
        self
    }

    pub fn layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    pub fn scroll_enabled(mut self, enabled: bool) -> Self {
        self.scroll_enabled = enabled;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn overscroll_mode(mut self, mode: OverscrollMode) -> Self {
        self.overscroll_mode = mode;
        self
    }

    pub fn offscreen_page_limit(mut self, limit: usize) -> Self {
        self.offscreen_page_limit = Some(limit);
        self
    }

    pub fn page_margin(mut self, margin: u16) -> Self {
        self.page_margin = margin;
        self
    }

    pub fn keyboard_dismiss_mode(mut self, mode: KeyboardDismissMode) -> Self {
        self.keyboard_dismiss_mode = mode;
        self
    }
}
