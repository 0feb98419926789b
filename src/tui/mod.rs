//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop only redraws when something changed: an input event, a
//! background action, or a new result set published by the store. While a
//! search is in flight it polls every ~100ms, otherwise it sleeps up to 500ms.
//!
//! ## Searches
//!
//! Each search runs in its own tokio task and reports back over an mpsc
//! channel as `Action::SearchFinished`. The ticket is issued by the reducer
//! on submit, before the task is spawned, so tickets follow submit order even
//! when tasks start out of order. Submitting a new query aborts the previous
//! task; the store's ticket check covers the window where an aborted task
//! already finished.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use crate::books::{BookSource, GoogleBooksClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::search::BookSearch;
use crate::core::state::{App, Screen};
use crate::core::store::{ResultSet, ResultStore, SearchTicket};
use crate::tui::component::EventHandler;
use crate::tui::components::{ListEvent, ResultListState, SearchBox, SearchBoxEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which widget on the results screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Results,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub result_list: ResultListState,
    pub focus: Focus,
}

impl TuiState {
    pub fn new(initial_query: &str) -> Self {
        Self {
            search_box: SearchBox::new(initial_query),
            result_list: ResultListState::new(),
            focus: Focus::Search, // User expects to type immediately
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Build the search backend from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn BookSource> {
    Arc::new(
        GoogleBooksClient::new(config.base_url.clone())
            .max_results(config.max_results)
            .api_key(config.api_key.clone()),
    )
}

pub fn run(config: ResolvedConfig, initial_query: Option<String>) -> std::io::Result<()> {
    let store = Arc::new(ResultStore::new());
    let search = Arc::new(BookSearch::new(build_source(&config), store.clone()));
    let mut app = App::new(search);
    let mut tui = TuiState::new(initial_query.as_deref().unwrap_or(""));
    let mut results_rx = store.subscribe();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handle for the in-flight search
    let mut active_search: Option<AbortHandle> = None;

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    if let Some(query) = initial_query {
        let effect = update(&mut app, Action::Submit(query));
        should_quit |= apply_effect(effect, &app, &tx, &mut active_search);
    }

    while !should_quit {
        if sync_results(&mut tui, &mut results_rx) {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            std::time::Duration::from_millis(100)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = dispatch(&mut app, &mut tui, event);
            if apply_effect(effect, &app, &tx, &mut active_search) {
                should_quit = true;
                break;
            }
        }

        // Handle background task actions (finished searches)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if apply_effect(effect, &app, &tx, &mut active_search) {
                should_quit = true;
            }
        }
    }

    if let Some(handle) = active_search.take() {
        handle.abort();
    }

    ratatui::restore();
    Ok(())
}

/// Pull a newly published result set into the list state.
/// Returns true if the set changed.
fn sync_results(tui: &mut TuiState, results_rx: &mut watch::Receiver<ResultSet>) -> bool {
    if !results_rx.has_changed().unwrap_or(false) {
        return false;
    }
    let len = results_rx.borrow_and_update().len();
    tui.result_list.reset(len);
    if len == 0 {
        tui.focus = Focus::Search;
    }
    true
}

/// Route one terminal event through the focused component and the reducer.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }
    if matches!(event, TuiEvent::Resize) {
        return Effect::None;
    }

    if let Screen::Details(_) = app.screen {
        return match event {
            TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::Submit => {
                tui.focus = Focus::Results;
                update(app, Action::Back)
            }
            _ => Effect::None,
        };
    }

    match tui.focus {
        Focus::Search => match event {
            TuiEvent::Escape => update(app, Action::Quit),
            TuiEvent::ToggleFocus | TuiEvent::CursorDown => {
                if !app.results().is_empty() {
                    tui.focus = Focus::Results;
                }
                Effect::None
            }
            _ => match tui.search_box.handle_event(&event) {
                Some(SearchBoxEvent::Submit(query)) => update(app, Action::Submit(query)),
                Some(SearchBoxEvent::ContentChanged) | None => Effect::None,
            },
        },
        Focus::Results => match event {
            TuiEvent::Escape | TuiEvent::ToggleFocus => {
                tui.focus = Focus::Search;
                Effect::None
            }
            // Typing jumps back to the search box and forwards the key
            TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
                tui.focus = Focus::Search;
                tui.search_box.handle_event(&event);
                Effect::None
            }
            _ => match tui.result_list.handle_event(&event) {
                Some(ListEvent::Open(index)) => {
                    let id = app.results().get(index).map(|record| record.id.clone());
                    match id {
                        Some(id) => update(app, Action::OpenDetails(id)),
                        None => Effect::None,
                    }
                }
                Some(ListEvent::LeaveTop) => {
                    tui.focus = Focus::Search;
                    Effect::None
                }
                None => Effect::None,
            },
        },
    }
}

/// Carry out an effect. Returns true when the app should quit.
fn apply_effect(
    effect: Effect,
    app: &App,
    tx: &mpsc::Sender<Action>,
    active_search: &mut Option<AbortHandle>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SpawnSearch { query, ticket } => {
            if let Some(handle) = active_search.take() {
                debug!("Aborting superseded search");
                handle.abort();
            }
            *active_search = Some(spawn_search(app, ticket, query, tx.clone()));
            false
        }
    }
}

fn spawn_search(
    app: &App,
    ticket: SearchTicket,
    query: String,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning search for {:?} ({:?})", query, ticket);
    let search = app.search.clone();

    let handle = tokio::spawn(async move {
        let result = search.run(ticket, &query).await;
        let finished = Action::SearchFinished {
            ticket,
            query,
            result,
        };
        if tx.send(finished).is_err() {
            warn!("Failed to send search result: receiver dropped");
        }
    });
    handle.abort_handle()
}
