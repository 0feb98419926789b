//! # Search
//!
//! Binds a [`BookSource`] to the [`ResultStore`]. Every call replaces the
//! store, success or failure: a failed search leaves an empty set behind and
//! the error is handed back so the caller can tell "failed" from "no matches".

use std::sync::Arc;

use log::{info, warn};

use crate::books::{BookRecord, BookSource, SearchError};
use crate::core::store::{ResultSet, ResultStore, SearchTicket};

/// What a finished search did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The store now holds `count` records from this search, out of `total`
    /// server-side matches when the source reported a total.
    Replaced { count: usize, total: Option<u64> },
    /// A newer search was issued meanwhile; this result was dropped.
    Stale,
}

pub struct BookSearch {
    source: Arc<dyn BookSource>,
    store: Arc<ResultStore>,
}

impl BookSearch {
    pub fn new(source: Arc<dyn BookSource>, store: Arc<ResultStore>) -> Self {
        Self { source, store }
    }

    pub fn store(&self) -> &Arc<ResultStore> {
        &self.store
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Issues the ticket a later [`run`](Self::run) completes under.
    pub fn begin_search(&self) -> SearchTicket {
        self.store.begin_search()
    }

    pub async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let ticket = self.begin_search();
        self.run(ticket, query).await
    }

    /// Runs `query` under a ticket taken earlier with [`begin_search`](Self::begin_search).
    /// A ticket that is already superseded never reaches the source.
    pub async fn run(
        &self,
        ticket: SearchTicket,
        query: &str,
    ) -> Result<SearchOutcome, SearchError> {
        if !self.store.is_current(ticket) {
            info!("Search {:?} superseded before it started", query);
            return Ok(SearchOutcome::Stale);
        }
        info!(
            "Search {:?} started on {} (ticket {:?})",
            query,
            self.source.name(),
            ticket
        );

        match self.source.search_page(query).await {
            Ok(page) => {
                let count = page.records.len();
                let total = page.total_items;
                if self.store.complete(ticket, page.records) {
                    Ok(SearchOutcome::Replaced { count, total })
                } else {
                    info!("Search {:?} superseded, {} records dropped", query, count);
                    Ok(SearchOutcome::Stale)
                }
            }
            Err(e) => {
                warn!("Search {:?} failed: {}", query, e);
                if self.store.complete(ticket, Vec::new()) {
                    Err(e)
                } else {
                    Ok(SearchOutcome::Stale)
                }
            }
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<BookRecord> {
        self.store.find_by_id(id)
    }

    pub fn results(&self) -> ResultSet {
        self.store.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeSource, GatedSource, record};

    fn search_with(source: Arc<dyn BookSource>) -> BookSearch {
        BookSearch::new(source, Arc::new(ResultStore::new()))
    }

    #[tokio::test]
    async fn test_success_replaces_store() {
        let source = Arc::new(FakeSource::ok(vec![
            record("A1", "The Hobbit"),
            record("A2", "The Fellowship of the Ring"),
        ]));
        let search = search_with(source.clone());

        let outcome = search.search("tolkien").await.unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Replaced {
                count: 2,
                total: None
            }
        );
        assert_eq!(search.results().len(), 2);
        assert_eq!(source.queries(), vec!["tolkien".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_empties_store_and_returns_error() {
        let search = search_with(Arc::new(FakeSource::ok(vec![record("A1", "Old")])));
        search.search("first").await.unwrap();
        assert!(search.find_by_id("A1").is_some());

        let failing = BookSearch::new(
            Arc::new(FakeSource::err(SearchError::Api {
                status: 500,
                message: "boom".to_string(),
            })),
            search.store().clone(),
        );
        let result = failing.search("second").await;

        assert!(matches!(result, Err(SearchError::Api { status: 500, .. })));
        assert!(search.results().is_empty());
        assert!(search.find_by_id("A1").is_none());
    }

    #[tokio::test]
    async fn test_empty_query_is_forwarded() {
        let source = Arc::new(FakeSource::ok(Vec::new()));
        let search = search_with(source.clone());
        let outcome = search.search("").await.unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Replaced {
                count: 0,
                total: None
            }
        );
        assert_eq!(source.queries(), vec![String::new()]);
    }

    #[tokio::test]
    async fn test_out_of_order_completion_keeps_latest() {
        let source = Arc::new(GatedSource::new());
        let search = Arc::new(search_with(source.clone()));

        let older = {
            let search = search.clone();
            tokio::spawn(async move { search.search("older").await })
        };
        source.wait_for_pending(1).await;

        let newer = {
            let search = search.clone();
            tokio::spawn(async move { search.search("newer").await })
        };
        source.wait_for_pending(2).await;

        // Newer finishes first, older settles last.
        source.release("newer", vec![record("N", "Newer")]);
        assert_eq!(
            newer.await.unwrap().unwrap(),
            SearchOutcome::Replaced {
                count: 1,
                total: None
            }
        );
        source.release("older", vec![record("O", "Older")]);
        assert_eq!(older.await.unwrap().unwrap(), SearchOutcome::Stale);

        assert!(search.find_by_id("N").is_some());
        assert!(search.find_by_id("O").is_none());
    }

    #[tokio::test]
    async fn test_superseded_ticket_skips_source() {
        let source = Arc::new(FakeSource::ok(vec![record("A1", "The Hobbit")]));
        let search = search_with(source.clone());

        let older = search.begin_search();
        let newer = search.begin_search();

        assert_eq!(
            search.run(older, "older").await.unwrap(),
            SearchOutcome::Stale
        );
        assert!(source.queries().is_empty());

        assert_eq!(
            search.run(newer, "newer").await.unwrap(),
            SearchOutcome::Replaced {
                count: 1,
                total: None
            }
        );
        assert_eq!(source.queries(), vec!["newer".to_string()]);
    }
}
