//! # Actions
//!
//! Everything that can happen in bookfinder becomes an `Action`.
//! User presses Enter? That's `Action::Submit(query)`.
//! Search settles? That's `Action::SearchFinished { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing the I/O the adapter should do.
//! No side effects here beyond issuing the search ticket.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Each submit takes a fresh `SearchTicket`; only the `SearchFinished` carrying
//! the pending ticket settles the view, so resubmitting the same text twice
//! still waits for the second run.

use log::{debug, info};

use crate::books::SearchError;
use crate::core::search::SearchOutcome;
use crate::core::state::{App, Screen};
use crate::core::store::SearchTicket;

#[derive(Debug)]
pub enum Action {
    Submit(String),
    SearchFinished {
        ticket: SearchTicket,
        query: String,
        result: Result<SearchOutcome, SearchError>,
    },
    OpenDetails(String),
    Back,
    Quit,
}

/// I/O requested by `update()`, carried out by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnSearch { query: String, ticket: SearchTicket },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Submit(query) => {
            let ticket = app.search.begin_search();
            app.pending_search = Some(ticket);
            app.is_loading = true;
            app.has_searched = true;
            app.error = None;
            app.screen = Screen::Results;
            app.status_message = format!("Searching for '{}'...", query);
            app.query = query.clone();
            Effect::SpawnSearch { query, ticket }
        }
        Action::SearchFinished {
            ticket,
            query,
            result,
        } => {
            if app.pending_search != Some(ticket) {
                info!("Ignoring superseded search result for {:?}", query);
                return Effect::None;
            }
            match result {
                Ok(SearchOutcome::Stale) => {
                    info!("Search {:?} lost the store to a newer ticket", query);
                    return Effect::None;
                }
                Ok(SearchOutcome::Replaced { count, total }) => {
                    app.status_message = results_status(&query, count, total);
                }
                Err(e) => {
                    app.status_message = String::from("Search failed");
                    app.error = Some(e.to_string());
                }
            }
            app.pending_search = None;
            app.is_loading = false;
            close_missing_details(app);
            Effect::None
        }
        Action::OpenDetails(id) => {
            match app.search.find_by_id(&id) {
                Some(record) => {
                    app.status_message = record.volume_info.title.clone();
                    app.screen = Screen::Details(id);
                }
                None => {
                    app.status_message = String::from("Book not found");
                }
            }
            Effect::None
        }
        Action::Back => {
            app.screen = Screen::Results;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn results_status(query: &str, count: usize, total: Option<u64>) -> String {
    match total {
        _ if count == 0 => format!("No results for '{}'", query),
        Some(total) if total > count as u64 => {
            format!("{} of {} results for '{}'", count, total, query)
        }
        _ => format!("{} results for '{}'", count, query),
    }
}

/// The details screen only shows records from the current set.
fn close_missing_details(app: &mut App) {
    if let Screen::Details(id) = &app.screen {
        if app.search.find_by_id(id).is_none() {
            debug!("Record {:?} left the result set, back to results", id);
            app.screen = Screen::Results;
        }
    }
}
