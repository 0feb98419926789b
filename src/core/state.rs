//! # Application State
//!
//! Core business state for bookfinder. Domain logic only, no TUI types.
//! Presentation state (input buffer, list selection) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── search: Arc<BookSearch>     // source + result store
//! ├── query: String               // last submitted query
//! ├── status_message: String      // status bar text
//! ├── is_loading: bool            // search in flight
//! ├── pending_search: Option<SearchTicket>  // search being waited on
//! ├── has_searched: bool          // any query submitted yet
//! ├── error: Option<String>       // last search failure
//! └── screen: Screen              // results list or details
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::books::BookRecord;
use crate::core::search::BookSearch;
use crate::core::store::{ResultSet, SearchTicket};

/// Which of the two screens is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Results,
    /// Details for the record with this id.
    Details(String),
}

pub struct App {
    pub search: Arc<BookSearch>,
    pub query: String,
    pub status_message: String,
    pub is_loading: bool,
    pub pending_search: Option<SearchTicket>,
    pub has_searched: bool,
    pub error: Option<String>,
    pub screen: Screen,
}

impl App {
    pub fn new(search: Arc<BookSearch>) -> Self {
        Self {
            search,
            query: String::new(),
            status_message: String::from("Type a query and press Enter"),
            is_loading: false,
            pending_search: None,
            has_searched: false,
            error: None,
            screen: Screen::Results,
        }
    }

    pub fn results(&self) -> ResultSet {
        self.search.results()
    }

    /// The record shown on the details screen, if any.
    pub fn details_record(&self) -> Option<BookRecord> {
        match &self.screen {
            Screen::Details(id) => self.search.find_by_id(id),
            Screen::Results => None,
        }
    }
}
