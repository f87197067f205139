//! Tests for container lifecycle, command routing, and the context
//! channel.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use swipeview::{
    LayoutDirection, Lifecycle, Orientation, PageScrollStateEvent, PageSelectedEvent, PagerConfig,
    PagerContainer, PagerView, ResolvedDirection, ScrollPhase,
};

/// Test double for the host view: records every command it receives.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Configured(PagerConfig),
    SetPage(usize),
    SetPageWithoutAnimation(usize),
    SetScrollEnabled(bool),
}

#[derive(Default)]
struct RecordingView {
    commands: Mutex<Vec<Command>>,
}

impl RecordingView {
    fn commands(&self) -> Vec<Command> {
        self.commands.lock().unwrap().clone()
    }
}

impl PagerView for RecordingView {
    fn set_page(&self, index: usize) {
        self.commands.lock().unwrap().push(Command::SetPage(index));
    }

    fn set_page_without_animation(&self, index: usize) {
        self.commands
            .lock()
            .unwrap()
            .push(Command::SetPageWithoutAnimation(index));
    }

    fn set_scroll_enabled(&self, enabled: bool) {
        self.commands
            .lock()
            .unwrap()
            .push(Command::SetScrollEnabled(enabled));
    }

    fn apply_config(&self, config: &PagerConfig) {
        self.commands
            .lock()
            .unwrap()
            .push(Command::Configured(config.clone()));
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_commands_before_mount_are_dropped() {
    let container = PagerContainer::builder().page_count(4).build();
    let view = Arc::new(RecordingView::default());

    // No view attached yet: nothing is raised, nothing is issued.
    container.set_page(3);
    container.set_page_without_animation(1);
    container.set_scroll_enabled(false);

    container.on_attach(view.clone());
    assert_eq!(
        view.commands(),
        vec![Command::Configured(PagerConfig::default())]
    );
}

#[test]
fn test_commands_flow_to_the_attached_view() {
    let container = PagerContainer::builder().page_count(4).build();
    let view = Arc::new(RecordingView::default());
    container.on_attach(view.clone());

    container.set_page(2);
    container.set_page_without_animation(0);
    container.set_scroll_enabled(false);

    assert_eq!(
        view.commands()[1..],
        [
            Command::SetPage(2),
            Command::SetPageWithoutAnimation(0),
            Command::SetScrollEnabled(false),
        ]
    );
}

#[test]
fn test_commands_after_unmount_are_dropped() {
    let container = PagerContainer::builder().page_count(4).build();
    let view = Arc::new(RecordingView::default());
    container.on_attach(view.clone());
    container.on_detach();

    container.set_page(2);
    assert_eq!(
        view.commands(),
        vec![Command::Configured(PagerConfig::default())]
    );
}

#[test]
fn test_lifecycle_is_linear() {
    let container = PagerContainer::builder().build();
    assert_eq!(container.lifecycle(), Lifecycle::Constructed);

    // Detach before mount is ignored.
    container.on_detach();
    assert_eq!(container.lifecycle(), Lifecycle::Constructed);

    let view = Arc::new(RecordingView::default());
    container.on_attach(view.clone());
    assert_eq!(container.lifecycle(), Lifecycle::Mounted);
    assert!(container.is_mounted());

    container.on_detach();
    assert_eq!(container.lifecycle(), Lifecycle::Unmounted);

    // No re-entry: a second attach is ignored.
    container.on_attach(view.clone());
    assert_eq!(container.lifecycle(), Lifecycle::Unmounted);
    container.set_page(1);
    assert_eq!(view.commands().len(), 1);
}

#[test]
fn test_detach_clears_store_subscribers() {
    let container = PagerContainer::builder().page_count(3).build();
    container.on_attach(Arc::new(RecordingView::default()));

    let subscription = container.context().subscribe(|_| {});
    assert!(subscription.is_active());

    container.on_detach();
    assert!(!subscription.is_active());
}

#[test]
fn test_mount_applies_the_passthrough_config() {
    let config = PagerConfig::new()
        .initial_page(1)
        .orientation(Orientation::Vertical)
        .page_margin(2)
        .offscreen_page_limit(1)
        .scroll_enabled(false);
    let container = PagerContainer::builder()
        .config(config.clone())
        .page_count(4)
        .build();
    assert_eq!(container.state().page, 1);

    let view = Arc::new(RecordingView::default());
    container.on_attach(view.clone());
    assert_eq!(view.commands(), vec![Command::Configured(config)]);
}

// ============================================================================
// Context channel
// ============================================================================

#[test]
fn test_context_exposes_state_and_commands() {
    let container = PagerContainer::builder().page_count(4).build();
    let view = Arc::new(RecordingView::default());
    container.on_attach(view.clone());

    let context = container.context();
    assert_eq!(context.state().page, 0);

    context.set_page(2);
    context.set_scroll_enabled(true);
    assert_eq!(
        view.commands()[1..],
        [Command::SetPage(2), Command::SetScrollEnabled(true)]
    );

    // The eventual settle is observed through the same channel.
    container
        .adapter()
        .page_selected(PageSelectedEvent { position: 2 });
    assert_eq!(context.state().page, 2);
}

#[test]
fn test_container_instances_do_not_leak_into_each_other() {
    let first = PagerContainer::builder().page_count(3).build();
    let second = PagerContainer::builder().page_count(3).build();

    let first_notifications = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&first_notifications);
    let _sub = first.context().subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    second
        .adapter()
        .page_selected(PageSelectedEvent { position: 2 });

    assert_eq!(first_notifications.load(Ordering::SeqCst), 0);
    assert_eq!(first.state().page, 0);
    assert_eq!(second.state().page, 2);
}

// ============================================================================
// Responder capture and direction
// ============================================================================

#[test]
fn test_gesture_capture_follows_dragging() {
    let container = PagerContainer::builder().page_count(3).build();
    assert!(!container.should_capture_gestures());

    container.adapter().scroll_state_changed(PageScrollStateEvent {
        phase: ScrollPhase::Dragging,
    });
    assert!(container.should_capture_gestures());

    container.adapter().scroll_state_changed(PageScrollStateEvent {
        phase: ScrollPhase::Idle,
    });
    assert!(!container.should_capture_gestures());
}

#[test]
fn test_explicit_layout_direction_is_not_resolved_from_locale() {
    let container = PagerContainer::builder()
        .config(PagerConfig::new().layout_direction(LayoutDirection::Rtl))
        .build();
    assert_eq!(container.resolved_direction(), ResolvedDirection::Rtl);
}
