//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing the backend and status
//! - `BookDetails`: Details screen for one record
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: Query input with cursor
//! - `ResultList`: Selectable list of results (`ResultListState` persists)
//!
//! Components receive external data as props, never by reaching into `App`.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs
//! ├── search_box.rs
//! ├── result_list.rs
//! └── details.rs
//! ```

pub mod details;
pub mod result_list;
pub mod search_box;
mod title_bar;

pub use details::BookDetails;
pub use result_list::{ListEvent, ResultList, ResultListState};
pub use search_box::{SearchBox, SearchBoxEvent};
pub use title_bar::TitleBar;
