//! Tests for the event adapter.

use std::sync::{Arc, Mutex};

use swipeview::{
    PageScrollEvent, PageScrollStateEvent, PageSelectedEvent, PagerContainer, PagerContext,
    ScrollPhase,
};

fn five_page_container() -> PagerContainer {
    PagerContainer::builder().page_count(5).build()
}

// ============================================================================
// Store derivation from selected events
// ============================================================================

#[test]
fn test_selected_event_drives_the_store() {
    let container = five_page_container();
    let adapter = container.adapter();

    adapter.page_selected(PageSelectedEvent { position: 2 });
    let state = container.state();
    assert_eq!(state.page, 2);
    assert!(state.has_next_page);
    assert!(state.has_previous_page);

    adapter.page_selected(PageSelectedEvent { position: 4 });
    let state = container.state();
    assert_eq!(state.page, 4);
    assert!(!state.has_next_page);
    assert!(state.has_previous_page);
}

#[test]
fn test_scroll_events_never_mutate_state() {
    let container = five_page_container();
    let adapter = container.adapter();
    adapter.page_selected(PageSelectedEvent { position: 1 });

    let before = container.state();
    adapter.page_scroll(PageScrollEvent {
        position: 1,
        offset: 0.4,
    });
    adapter.page_scroll(PageScrollEvent {
        position: 2,
        offset: 0.9,
    });
    adapter.scroll_state_changed(PageScrollStateEvent {
        phase: ScrollPhase::Dragging,
    });
    adapter.scroll_state_changed(PageScrollStateEvent {
        phase: ScrollPhase::Settling,
    });
    assert_eq!(container.state(), before);
}

#[test]
fn test_selected_event_recomputes_flags_against_current_page_count() {
    let container = five_page_container();
    let adapter = container.adapter();

    adapter.page_selected(PageSelectedEvent { position: 4 });
    assert!(!container.state().has_next_page);

    // The application appended a page; the next settle sees it.
    container.set_page_count(6);
    adapter.page_selected(PageSelectedEvent { position: 4 });
    assert!(container.state().has_next_page);
}

// ============================================================================
// Verbatim forwarding
// ============================================================================

#[test]
fn test_events_are_forwarded_verbatim() {
    let scrolls = Arc::new(Mutex::new(Vec::new()));
    let phases = Arc::new(Mutex::new(Vec::new()));
    let selections = Arc::new(Mutex::new(Vec::new()));

    let scrolls_cb = Arc::clone(&scrolls);
    let phases_cb = Arc::clone(&phases);
    let selections_cb = Arc::clone(&selections);
    let container = PagerContainer::builder()
        .page_count(3)
        .on_page_scroll(move |event| scrolls_cb.lock().unwrap().push(*event))
        .on_page_scroll_state_changed(move |event| phases_cb.lock().unwrap().push(*event))
        .on_page_selected(move |event| selections_cb.lock().unwrap().push(*event))
        .build();
    let adapter = container.adapter();

    adapter.page_scroll(PageScrollEvent {
        position: 0,
        offset: 0.25,
    });
    adapter.scroll_state_changed(PageScrollStateEvent {
        phase: ScrollPhase::Settling,
    });
    adapter.page_selected(PageSelectedEvent { position: 1 });

    assert_eq!(
        *scrolls.lock().unwrap(),
        vec![PageScrollEvent {
            position: 0,
            offset: 0.25,
        }]
    );
    assert_eq!(
        *phases.lock().unwrap(),
        vec![PageScrollStateEvent {
            phase: ScrollPhase::Settling,
        }]
    );
    assert_eq!(
        *selections.lock().unwrap(),
        vec![PageSelectedEvent { position: 1 }]
    );
}

#[test]
fn test_selected_callback_runs_before_the_store_update() {
    // The user callback observes the pre-settle state; the store is
    // updated after the forward.
    let context_slot: Arc<Mutex<Option<PagerContext>>> = Arc::new(Mutex::new(None));
    let seen_pages = Arc::new(Mutex::new(Vec::new()));

    let context_cb = Arc::clone(&context_slot);
    let seen_cb = Arc::clone(&seen_pages);
    let container = PagerContainer::builder()
        .page_count(5)
        .on_page_selected(move |_| {
            if let Some(context) = context_cb.lock().unwrap().as_ref() {
                seen_cb.lock().unwrap().push(context.state().page);
            }
        })
        .build();
    *context_slot.lock().unwrap() = Some(container.context());

    container.adapter().page_selected(PageSelectedEvent { position: 3 });
    assert_eq!(*seen_pages.lock().unwrap(), vec![0]);
    assert_eq!(container.state().page, 3);
}

// ============================================================================
// Dragging flag
// ============================================================================

#[test]
fn test_dragging_flag_follows_scroll_phase() {
    let container = five_page_container();
    let adapter = container.adapter();
    assert!(!adapter.is_dragging());

    adapter.scroll_state_changed(PageScrollStateEvent {
        phase: ScrollPhase::Dragging,
    });
    assert!(adapter.is_dragging());

    adapter.scroll_state_changed(PageScrollStateEvent {
        phase: ScrollPhase::Settling,
    });
    assert!(!adapter.is_dragging());

    adapter.scroll_state_changed(PageScrollStateEvent {
        phase: ScrollPhase::Dragging,
    });
    adapter.scroll_state_changed(PageScrollStateEvent {
        phase: ScrollPhase::Idle,
    });
    assert!(!adapter.is_dragging());
}
