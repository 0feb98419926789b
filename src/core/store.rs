//! # Result Store
//!
//! Holds the result set of the most recent search. There is exactly one set at
//! a time and it is only ever replaced wholesale.
//!
//! Backed by a `tokio::sync::watch` channel: the sender is the single writer,
//! every reader gets an `Arc` snapshot, so nobody ever observes a half-written
//! set.
//!
//! ```text
//! begin_search() ──► ticket 7
//! begin_search() ──► ticket 8
//! complete(7, ..)  ──► discarded (superseded)
//! complete(8, ..)  ──► replace()  ──► observers notified once
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use tokio::sync::watch;

use crate::books::BookRecord;

pub type ResultSet = Arc<Vec<BookRecord>>;

/// Identifies one issued search. Only the latest ticket may write the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

pub struct ResultStore {
    current: watch::Sender<ResultSet>,
    latest_ticket: AtomicU64,
}

impl ResultStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        let (current, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            current,
            latest_ticket: AtomicU64::new(0),
        }
    }

    /// Replaces the current set and notifies observers exactly once.
    pub fn replace(&self, records: Vec<BookRecord>) {
        debug!("Result store replaced with {} records", records.len());
        self.current.send_replace(Arc::new(records));
    }

    /// First record whose id equals `id`, in insertion order.
    pub fn find_by_id(&self, id: &str) -> Option<BookRecord> {
        self.current
            .borrow()
            .iter()
            .find(|record| record.id == id)
            .cloned()
    }

    pub fn snapshot(&self) -> ResultSet {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ResultSet> {
        self.current.subscribe()
    }

    pub fn len(&self) -> usize {
        self.current.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.borrow().is_empty()
    }

    /// Issues a new ticket, superseding every ticket issued before it.
    pub fn begin_search(&self) -> SearchTicket {
        SearchTicket(self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest_ticket.load(Ordering::SeqCst) == ticket.0
    }

    /// Replaces the set if `ticket` is still the latest one issued.
    /// Returns `false` (and leaves the store untouched) for a stale ticket.
    pub fn complete(&self, ticket: SearchTicket, records: Vec<BookRecord>) -> bool {
        let mut applied = false;
        self.current.send_if_modified(|current| {
            // Compared under the watch write lock.
            if !self.is_current(ticket) {
                return false;
            }
            *current = Arc::new(records);
            applied = true;
            true
        });
        if applied {
            debug!("Ticket {:?} applied to result store", ticket);
        } else {
            debug!("Ticket {:?} is stale, result discarded", ticket);
        }
        applied
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn test_new_store_is_empty() {
        let store = ResultStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.find_by_id("anything").is_none());
    }

    #[test]
    fn test_find_by_id_unique() {
        let store = ResultStore::new();
        store.replace(vec![record("A1", "The Hobbit"), record("A2", "Silmarillion")]);
        let found = store.find_by_id("A2").unwrap();
        assert_eq!(found.volume_info.title, "Silmarillion");
    }

    #[test]
    fn test_find_by_id_returns_first_duplicate() {
        let store = ResultStore::new();
        store.replace(vec![
            record("X", "First"),
            record("Y", "Other"),
            record("X", "Second"),
        ]);
        assert_eq!(store.find_by_id("X").unwrap().volume_info.title, "First");
    }

    #[test]
    fn test_find_by_id_no_match() {
        let store = ResultStore::new();
        store.replace(vec![record("A1", "The Hobbit")]);
        assert!(store.find_by_id("a1").is_none());
        assert!(store.find_by_id("").is_none());
    }

    #[test]
    fn test_replace_discards_previous_set() {
        let store = ResultStore::new();
        store.replace(vec![record("old-1", "Old"), record("old-2", "Older")]);
        store.replace(vec![record("new-1", "New")]);

        assert!(store.find_by_id("new-1").is_some());
        assert!(store.find_by_id("old-1").is_none());
        assert!(store.find_by_id("old-2").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_replace_notifies_once() {
        let store = ResultStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.replace(vec![record("A1", "The Hobbit")]);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let store = ResultStore::new();
        store.replace(vec![record("A1", "The Hobbit")]);
        let before = store.snapshot();
        store.replace(Vec::new());
        assert_eq!(before.len(), 1);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_tickets_increase() {
        let store = ResultStore::new();
        let first = store.begin_search();
        let second = store.begin_search();
        assert!(second > first);
        assert!(!store.is_current(first));
        assert!(store.is_current(second));
    }

    #[test]
    fn test_stale_ticket_discarded() {
        let store = ResultStore::new();
        let first = store.begin_search();
        let second = store.begin_search();

        assert!(store.complete(second, vec![record("new", "Newer search")]));
        assert!(!store.complete(first, vec![record("old", "Older search")]));

        assert!(store.find_by_id("new").is_some());
        assert!(store.find_by_id("old").is_none());
    }

    #[test]
    fn test_stale_ticket_does_not_notify() {
        let store = ResultStore::new();
        let stale = store.begin_search();
        let _latest = store.begin_search();
        let rx = store.subscribe();

        assert!(!store.complete(stale, vec![record("old", "Old")]));
        assert!(!rx.has_changed().unwrap());
    }
}
