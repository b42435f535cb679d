//! Store wiring for the events feature.

use crate::actions::EventsAction;
use crate::environment::EventsEnvironment;
use crate::filter::FilterState;
use crate::reducer::EventsReducer;
use crate::types::EventsState;
use eventdeck_api::{EventId, ListFilters};
use eventdeck_runtime::{EffectHandle, Store, StoreError};
use std::time::Duration;
use tokio::sync::broadcast;

/// The events store.
///
/// One instance exists per application, created at startup and shared by
/// reference; all state transitions flow through its reducer.
pub struct EventsStore {
    inner: Store<EventsState, EventsAction, EventsEnvironment, EventsReducer>,
}

impl EventsStore {
    /// Creates a store with an empty cache
    #[must_use]
    pub fn new(environment: EventsEnvironment) -> Self {
        Self {
            inner: Store::new(EventsState::new(), EventsReducer::new(), environment),
        }
    }

    /// Dispatch a listing fetch with the given filters
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn fetch_events(&self, filters: ListFilters) -> Result<EffectHandle, StoreError> {
        self.inner.send(EventsAction::FetchEvents { filters }).await
    }

    /// Dispatch a detail fetch for one event
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn fetch_event_by_id(&self, id: EventId) -> Result<EffectHandle, StoreError> {
        self.inner.send(EventsAction::FetchEventById { id }).await
    }

    /// Clear the detail selection
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn clear_selected_event(&self) -> Result<EffectHandle, StoreError> {
        self.inner.send(EventsAction::ClearSelectedEvent).await
    }

    /// Observe a URL change: parse filters from the query string and
    /// dispatch a listing fetch with them.
    ///
    /// This is the hook the consuming view calls when navigation (including
    /// back/forward) lands on the events listing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn refresh_from_query(&self, query: &str) -> Result<EffectHandle, StoreError> {
        let filters = FilterState::from_query(query).to_list_filters();
        self.fetch_events(filters).await
    }

    /// Snapshot of the current state
    pub async fn snapshot(&self) -> EventsState {
        self.inner.state(Clone::clone).await
    }

    /// Read current state via a closure
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&EventsState) -> T,
    {
        self.inner.state(f).await
    }

    /// Subscribe to fetch resolution actions as they are applied
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<EventsAction> {
        self.inner.subscribe_actions()
    }

    /// Gracefully shut down, waiting for in-flight fetches
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if fetches are still in
    /// flight when the timeout expires.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        self.inner.shutdown(timeout).await
    }
}
