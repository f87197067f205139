//! Terminal implementation of the pager view contract.
//!
//! Emulates the native pager's event discipline: a gesture emits a
//! dragging phase, eased in-flight scroll frames, then the terminating
//! selected event once the target page settles. Imperative jumps skip
//! the dragging phase.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use swipeview::{
    EventAdapter, PageScrollEvent, PageScrollStateEvent, PageSelectedEvent, PagerConfig,
    PagerView, ScrollPhase,
};

const TRANSITION: Duration = Duration::from_millis(250);

/// Ease-in-out curve applied to transition progress.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

struct Animation {
    from: f32,
    to: usize,
    start: Instant,
}

struct Model {
    config: PagerConfig,
    page_count: usize,
    /// Visual position in pages; fractional while a transition runs.
    position: f32,
    scroll_enabled: bool,
    animation: Option<Animation>,
}

impl Model {
    fn settled(&self) -> usize {
        self.position.round() as usize
    }

    fn clamp_page(&self, index: usize) -> usize {
        index.min(self.page_count.saturating_sub(1))
    }

    /// Start a transition toward `target`. Returns false when already
    /// settled there with no transition running.
    fn begin(&mut self, target: usize) -> bool {
        if self.animation.is_none() && self.settled() == target {
            return false;
        }
        self.animation = Some(Animation {
            from: self.position,
            to: target,
            start: Instant::now(),
        });
        true
    }
}

enum Emission {
    Phase(ScrollPhase),
    Frame(PageScrollEvent),
    Selected(usize),
}

/// Host view for the terminal: owns the visual position and the
/// transition animation, and reports back through the adapter.
pub struct TermPager {
    model: Mutex<Model>,
    adapter: EventAdapter,
}

impl TermPager {
    pub fn new(adapter: EventAdapter, page_count: usize) -> Self {
        Self {
            model: Mutex::new(Model {
                config: PagerConfig::default(),
                page_count,
                position: 0.0,
                scroll_enabled: true,
                animation: None,
            }),
            adapter,
        }
    }

    /// Visual position in pages, for rendering.
    pub fn position(&self) -> f32 {
        self.lock().position
    }

    pub fn scroll_enabled(&self) -> bool {
        self.lock().scroll_enabled
    }

    pub fn page_margin(&self) -> u16 {
        self.lock().config.page_margin
    }

    /// Key-driven gesture: one flick by `delta` pages. Gated by the
    /// scroll-enabled flag; edge flicks bounce without selecting.
    pub fn swipe(&self, delta: isize) {
        let emissions = {
            let mut model = self.lock();
            if model.page_count == 0 {
                return;
            }
            if !model.scroll_enabled {
                log::debug!("swipe ignored, scrolling disabled");
                return;
            }
            let current = model.settled() as isize;
            let target = model.clamp_page((current + delta).max(0) as usize);
            if !model.begin(target) {
                // Bounced off an edge: the drag starts and ends with
                // no page change, so no selected event follows.
                vec![
                    Emission::Phase(ScrollPhase::Dragging),
                    Emission::Phase(ScrollPhase::Idle),
                ]
            } else {
                vec![
                    Emission::Phase(ScrollPhase::Dragging),
                    Emission::Phase(ScrollPhase::Settling),
                ]
            }
        };
        self.dispatch(emissions);
    }

    /// Advance the running transition. Returns true when the view
    /// needs a repaint.
    pub fn tick(&self) -> bool {
        let (emissions, dirty) = {
            let mut model = self.lock();
            match model.animation.take() {
                None => (Vec::new(), false),
                Some(animation) => {
                    let t = animation.start.elapsed().as_secs_f32() / TRANSITION.as_secs_f32();
                    if t >= 1.0 {
                        let target = animation.to;
                        model.position = target as f32;
                        (
                            vec![
                                Emission::Frame(PageScrollEvent {
                                    position: target,
                                    offset: 0.0,
                                }),
                                Emission::Selected(target),
                                Emission::Phase(ScrollPhase::Idle),
                            ],
                            true,
                        )
                    } else {
                        let eased = ease_in_out(t);
                        let position =
                            animation.from + (animation.to as f32 - animation.from) * eased;
                        model.position = position;
                        let base = position.floor();
                        let frame = PageScrollEvent {
                            position: base as usize,
                            offset: position - base,
                        };
                        model.animation = Some(animation);
                        (vec![Emission::Frame(frame)], true)
                    }
                }
            }
        };
        self.dispatch(emissions);
        dirty
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Model> {
        self.model
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // Events are dispatched after the model lock is released so a
    // store subscriber may re-enter the command surface.
    fn dispatch(&self, emissions: Vec<Emission>) {
        for emission in emissions {
            match emission {
                Emission::Phase(phase) => self
                    .adapter
                    .scroll_state_changed(PageScrollStateEvent { phase }),
                Emission::Frame(event) => self.adapter.page_scroll(event),
                Emission::Selected(position) => {
                    self.adapter.page_selected(PageSelectedEvent { position });
                }
            }
        }
    }
}

impl PagerView for TermPager {
    fn set_page(&self, index: usize) {
        let emissions = {
            let mut model = self.lock();
            if model.page_count == 0 {
                return;
            }
            let target = model.clamp_page(index);
            if !model.begin(target) {
                log::trace!("set_page({index}) is already the settled page");
                return;
            }
            vec![Emission::Phase(ScrollPhase::Settling)]
        };
        self.dispatch(emissions);
    }

    fn set_page_without_animation(&self, index: usize) {
        let emissions = {
            let mut model = self.lock();
            if model.page_count == 0 {
                return;
            }
            let target = model.clamp_page(index);
            model.animation = None;
            model.position = target as f32;
            vec![Emission::Selected(target)]
        };
        self.dispatch(emissions);
    }

    fn set_scroll_enabled(&self, enabled: bool) {
        self.lock().scroll_enabled = enabled;
        log::debug!("scroll enabled: {enabled}");
    }

    fn apply_config(&self, config: &PagerConfig) {
        let mut model = self.lock();
        model.position = model.clamp_page(config.initial_page) as f32;
        model.scroll_enabled = config.scroll_enabled;
        model.config = config.clone();
        log::debug!(
            "configured: initial_page={} orientation={:?} page_margin={}",
            config.initial_page,
            config.orientation,
            config.page_margin
        );
    }
}
