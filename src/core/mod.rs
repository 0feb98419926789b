//! # Core Application Logic
//!
//! This module contains bookfinder's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ResultStore          │
//!                    │  • BookSearch           │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   books    │
//!           │  Adapter   │              │  (HTTP +   │
//!           │ (ratatui)  │              │   JSON)    │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`]: `ResultStore`, the single shared result set
//! - [`search`]: `BookSearch`, runs a search and writes the store
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod search;
pub mod state;
pub mod store;
