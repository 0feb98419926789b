//! Turns a raw `volumes` response into ordered [`BookRecord`]s.
//!
//! A missing `items` array means "no matches", not an error. A missing
//! `volumeInfo.title` on any element fails the whole response.

use log::debug;

use super::source::SearchError;
use super::types::{BookRecord, SearchPage, SearchResponse};

/// Maps a response body. Input order is preserved.
pub fn map_response(body: &str) -> Result<Vec<BookRecord>, SearchError> {
    map_page(body).map(|page| page.records)
}

/// Maps a response body, keeping `totalItems` alongside the records.
pub fn map_page(body: &str) -> Result<SearchPage, SearchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;
    map_value(value)
}

/// Decodes an already-parsed JSON value against the response schema.
pub fn map_value(value: serde_json::Value) -> Result<SearchPage, SearchError> {
    let response: SearchResponse =
        serde_json::from_value(value).map_err(|e| SearchError::Parse(e.to_string()))?;
    let page = SearchPage {
        records: response.items.unwrap_or_default(),
        total_items: response.total_items,
    };
    debug!(
        "Mapped {} records (totalItems={:?})",
        page.records.len(),
        page.total_items
    );
    Ok(page)
}
