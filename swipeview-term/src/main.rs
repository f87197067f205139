mod error;
mod pager;
mod terminal;
mod ui;

use std::fs::File;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures::StreamExt;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use swipeview::{LayoutDirection, PageState, PagerConfig, PagerContainer, ResolvedDirection};

use error::TermError;
use pager::TermPager;
use terminal::TerminalGuard;
use ui::Page;

#[tokio::main]
async fn main() {
    let log_file = File::create("swipeview-term.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
    }
}

async fn run() -> Result<(), TermError> {
    let pages = demo_pages();

    let container = PagerContainer::builder()
        .config(
            PagerConfig::new()
                .initial_page(0)
                .layout_direction(LayoutDirection::Locale)
                .page_margin(2),
        )
        .page_count(pages.len())
        .on_page_selected(|event| info!("selected page {}", event.position))
        .on_page_scroll_state_changed(|event| log::trace!("phase {:?}", event.phase))
        .build();

    let pager = Arc::new(TermPager::new(container.adapter(), pages.len()));
    container.on_attach(pager.clone());

    let rtl = container.resolved_direction() == ResolvedDirection::Rtl;
    info!("layout direction resolved to {:?}", container.resolved_direction());

    // The indicator and status line consume the published context, not
    // the container itself.
    let context = container.context();
    let status = Arc::new(Mutex::new(status_text(&context.state())));
    {
        let status = Arc::clone(&status);
        let _subscription = context.subscribe(move |state| {
            *status.lock().unwrap() = status_text(state);
        });
    }

    let guard = TerminalGuard::new()?;
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(33));
    let mut scroll_enabled = true;
    let mut dirty = true;

    loop {
        if dirty {
            draw(&guard, &pages, &pager, &container, &status)?;
            dirty = false;
        }

        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else { break };
                match event? {
                    Event::Key(key) => {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => break,
                            KeyCode::Left | KeyCode::Char('h') => {
                                pager.swipe(if rtl { 1 } else { -1 });
                            }
                            KeyCode::Right | KeyCode::Char('l') => {
                                pager.swipe(if rtl { -1 } else { 1 });
                            }
                            KeyCode::Home => container.set_page_without_animation(0),
                            KeyCode::Char('s') => {
                                scroll_enabled = !scroll_enabled;
                                container.set_scroll_enabled(scroll_enabled);
                            }
                            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                                context.set_page((c as usize) - ('1' as usize));
                            }
                            _ => {}
                        }
                        dirty = true;
                    }
                    Event::Resize(..) => dirty = true,
                    _ => {}
                }
            }
            _ = tick.tick() => {
                if pager.tick() {
                    dirty = true;
                }
            }
        }
    }

    container.on_detach();
    drop(guard);
    Ok(())
}

fn status_text(state: &PageState) -> String {
    format!(
        "page {}  prev {}  next {}",
        state.page + 1,
        if state.has_previous_page { "✔" } else { "✘" },
        if state.has_next_page { "✔" } else { "✘" },
    )
}

fn draw(
    guard: &TerminalGuard,
    pages: &[Page],
    pager: &TermPager,
    container: &PagerContainer,
    status: &Arc<Mutex<String>>,
) -> io::Result<()> {
    let mut line = status.lock().unwrap().clone();
    if container.should_capture_gestures() {
        line.push_str("  [dragging]");
    }
    if !pager.scroll_enabled() {
        line.push_str("  [scroll off]");
    }
    line.push_str("  ·  ←/→ swipe, 1-9 jump, Home instant, s scroll, q quit");

    let mut stdout = io::stdout();
    ui::render(
        &mut stdout,
        pages,
        pager.position(),
        pager.page_margin(),
        &container.state(),
        &line,
        guard.size()?,
    )
}

fn demo_pages() -> Vec<Page> {
    vec![
        Page::new(
            "Welcome",
            &[
                "A swipeable multi-page container.",
                "",
                "Flick between pages with the arrow keys;",
                "the footer tracks the synchronized state.",
            ],
        ),
        Page::new(
            "Gestures",
            &[
                "Arrow keys emulate drag gestures.",
                "",
                "Watch the [dragging] badge while a",
                "flick is in flight.",
            ],
        ),
        Page::new(
            "Imperative",
            &[
                "Number keys jump through the context",
                "channel: descendants never touch the",
                "host view directly.",
            ],
        ),
        Page::new(
            "Scroll lock",
            &[
                "Press 's' to disable gesture paging.",
                "",
                "Number keys keep working: imperative",
                "commands are not gated.",
            ],
        ),
        Page::new(
            "The end",
            &[
                "No next page from here.",
                "",
                "The footer's `next` flag came from the",
                "store, not from this pane.",
            ],
        ),
    ]
}
