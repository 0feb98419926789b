//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::books::{BookRecord, BookSource, SearchError, VolumeInfo};
use crate::core::search::BookSearch;
use crate::core::store::ResultStore;

/// A record with only the required fields set.
pub fn record(id: &str, title: &str) -> BookRecord {
    BookRecord {
        id: id.to_string(),
        volume_info: VolumeInfo {
            title: title.to_string(),
            authors: None,
            published_date: None,
            page_count: None,
            publisher: None,
            image_links: None,
        },
    }
}

/// Returns a canned result for every query and remembers what it was asked.
pub struct FakeSource {
    result: Result<Vec<BookRecord>, SearchError>,
    queries: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn ok(records: Vec<BookRecord>) -> Self {
        Self {
            result: Ok(records),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn err(error: SearchError) -> Self {
        Self {
            result: Err(error),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookSource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn search(&self, query: &str) -> Result<Vec<BookRecord>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.result.clone()
    }
}

/// Holds every search open until the test releases it by query.
pub struct GatedSource {
    gates: Mutex<HashMap<String, oneshot::Sender<Vec<BookRecord>>>>,
    started: AtomicUsize,
}

impl GatedSource {
    pub fn new() -> Self {
        Self {
            gates: Mutex::new(HashMap::new()),
            started: AtomicUsize::new(0),
        }
    }

    /// Yields until at least `n` searches are parked on their gates.
    pub async fn wait_for_pending(&self, n: usize) {
        while self.started.load(Ordering::SeqCst) < n {
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        }
    }

    pub fn release(&self, query: &str, records: Vec<BookRecord>) {
        let gate = self.gates.lock().unwrap().remove(query);
        if let Some(tx) = gate {
            let _ = tx.send(records);
        }
    }
}

#[async_trait]
impl BookSource for GatedSource {
    fn name(&self) -> &str {
        "gated"
    }

    async fn search(&self, query: &str) -> Result<Vec<BookRecord>, SearchError> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(query.to_string(), tx);
        self.started.fetch_add(1, Ordering::SeqCst);
        rx.await
            .map_err(|_| SearchError::Network("gate dropped".to_string()))
    }
}

/// Creates a test App over a source that always returns no results.
pub fn test_app() -> crate::core::state::App {
    test_app_with(Vec::new())
}

/// Creates a test App whose store already holds `records`.
pub fn test_app_with(records: Vec<BookRecord>) -> crate::core::state::App {
    let store = Arc::new(ResultStore::new());
    store.replace(records);
    let search = BookSearch::new(Arc::new(FakeSource::ok(Vec::new())), store);
    crate::core::state::App::new(Arc::new(search))
}
