//! Shared state container with a stale-fetch guard.
//!
//! Uses a read-write lock pattern: readers clone the current state out,
//! while reducer application is exclusive. All mutation goes through the
//! reducer, so the container itself has no resource-specific logic.

use std::sync::{Arc, RwLock};

use crate::store::Reducer;

/// Ticket identifying one issued fetch.
///
/// Obtained from [`Store::begin_fetch`] before the network call and
/// presented back to [`Store::settle_fetch`] with the completion intent.
/// Only the most recently issued ticket settles; anything older is a
/// superseded request whose response must not touch the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// State container for one resource store.
///
/// Cheap to clone; clones share the same state cell.
pub struct Store<R: Reducer> {
    inner: Arc<RwLock<Inner<R::State>>>,
}

struct Inner<S> {
    state: S,
    fetch_seq: u64,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding the resource's initial (empty) state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                state: R::State::default(),
                fetch_seq: 0,
            })),
        }
    }

    /// Get a clone of the current state.
    pub fn state(&self) -> R::State {
        self.inner.read().expect("store lock poisoned").state.clone()
    }

    /// Apply an intent unconditionally.
    ///
    /// Used for pending markers, mutation completions, and local view
    /// events. Mutations intentionally bypass the fetch guard: the store
    /// is last-write-wins for them.
    pub fn dispatch(&self, intent: R::Intent) {
        let mut guard = self.inner.write().expect("store lock poisoned");
        let state = guard.state.clone();
        guard.state = R::reduce(state, intent);
    }

    /// Register a new fetch and return its ticket.
    ///
    /// Issuing a ticket supersedes every ticket issued before it.
    pub fn begin_fetch(&self) -> FetchTicket {
        let mut guard = self.inner.write().expect("store lock poisoned");
        guard.fetch_seq += 1;
        FetchTicket(guard.fetch_seq)
    }

    /// Apply a fetch completion if the ticket is still current.
    ///
    /// Returns `true` when the intent was applied. A stale ticket means a
    /// newer fetch was started while this one was in flight; the response
    /// is discarded so it cannot overwrite newer data.
    pub fn settle_fetch(&self, ticket: FetchTicket, intent: R::Intent) -> bool {
        let mut guard = self.inner.write().expect("store lock poisoned");
        if ticket.0 != guard.fetch_seq {
            tracing::debug!(
                ticket = ticket.0,
                latest = guard.fetch_seq,
                "discarding response for superseded fetch"
            );
            return false;
        }
        let state = guard.state.clone();
        guard.state = R::reduce(state, intent);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Intent, StoreState};

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter {
        value: i32,
    }

    impl StoreState for Counter {}

    enum CounterIntent {
        Set(i32),
    }

    impl Intent for CounterIntent {}

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = Counter;
        type Intent = CounterIntent;

        fn reduce(_state: Counter, intent: CounterIntent) -> Counter {
            match intent {
                CounterIntent::Set(value) => Counter { value },
            }
        }
    }

    #[test]
    fn dispatch_applies_reducer() {
        let store: Store<CounterReducer> = Store::new();
        store.dispatch(CounterIntent::Set(7));
        assert_eq!(store.state().value, 7);
    }

    #[test]
    fn latest_ticket_settles() {
        let store: Store<CounterReducer> = Store::new();
        let ticket = store.begin_fetch();
        assert!(store.settle_fetch(ticket, CounterIntent::Set(1)));
        assert_eq!(store.state().value, 1);
    }

    #[test]
    fn superseded_ticket_is_discarded() {
        let store: Store<CounterReducer> = Store::new();
        let first = store.begin_fetch();
        let second = store.begin_fetch();

        assert!(!store.settle_fetch(first, CounterIntent::Set(1)));
        assert_eq!(store.state().value, 0, "stale response must not apply");

        assert!(store.settle_fetch(second, CounterIntent::Set(2)));
        assert_eq!(store.state().value, 2);
    }

    #[test]
    fn clones_share_state() {
        let store: Store<CounterReducer> = Store::new();
        let other = store.clone();
        store.dispatch(CounterIntent::Set(3));
        assert_eq!(other.state().value, 3);
    }
}
