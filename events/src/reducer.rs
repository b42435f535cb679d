//! Reducer for the events store.
//!
//! Each fetch kind is a small state machine: pending → (success | failure),
//! re-entering idle implicitly when the next fetch is dispatched. Both kinds
//! share the single `loading`/`error` pair.

use crate::actions::EventsAction;
use crate::environment::EventsEnvironment;
use crate::types::{EventsState, sort_newest_first};
use eventdeck_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Message shown when the events listing cannot be loaded
pub const EVENTS_LOAD_ERROR: &str = "Failed to load events. Please try again.";

/// Message shown when the detail view cannot be loaded
pub const EVENT_DETAIL_LOAD_ERROR: &str = "Failed to load event details.";

/// Reducer managing the events cache and its fetch lifecycles.
#[derive(Clone, Debug)]
pub struct EventsReducer;

impl EventsReducer {
    /// Creates a new `EventsReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for EventsReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for EventsReducer {
    type State = EventsState;
    type Action = EventsAction;
    type Environment = EventsEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            EventsAction::FetchEvents { filters } => {
                let request = state.begin_list_fetch();
                state.loading = true;
                state.error = None;

                let gateway = env.gateway();
                smallvec![Effect::Future(Box::pin(async move {
                    let action = match gateway.list_events(filters).await {
                        Ok(events) => EventsAction::EventsLoaded { request, events },
                        Err(error) => {
                            // The underlying error is not user-facing
                            tracing::warn!(%error, request, "events listing fetch failed");
                            EventsAction::EventsLoadFailed {
                                request,
                                message: EVENTS_LOAD_ERROR.to_string(),
                            }
                        },
                    };
                    Some(action)
                }))]
            },

            EventsAction::FetchEventById { id } => {
                let request = state.begin_detail_fetch();
                state.loading = true;
                state.error = None;

                let gateway = env.gateway();
                smallvec![Effect::Future(Box::pin(async move {
                    let action = match gateway.event_by_id(id).await {
                        Ok(event) => EventsAction::EventLoaded {
                            request,
                            event: Box::new(event),
                        },
                        Err(error) => {
                            tracing::warn!(%error, request, "event detail fetch failed");
                            EventsAction::EventLoadFailed {
                                request,
                                message: EVENT_DETAIL_LOAD_ERROR.to_string(),
                            }
                        },
                    };
                    Some(action)
                }))]
            },

            // ========== Resolutions ==========
            EventsAction::EventsLoaded { request, events } => {
                if state.is_current_list(request) {
                    let mut events = events;
                    sort_newest_first(&mut events);
                    state.events = events;
                    state.loading = false;
                } else {
                    tracing::debug!(request, "discarding superseded listing result");
                }
                SmallVec::new()
            },

            EventsAction::EventsLoadFailed { request, message } => {
                if state.is_current_list(request) {
                    state.loading = false;
                    state.error = Some(message);
                } else {
                    tracing::debug!(request, "discarding superseded listing failure");
                }
                SmallVec::new()
            },

            EventsAction::EventLoaded { request, event } => {
                if state.is_current_detail(request) {
                    state.selected_event = Some(*event);
                    state.loading = false;
                } else {
                    tracing::debug!(request, "discarding superseded detail result");
                }
                SmallVec::new()
            },

            EventsAction::EventLoadFailed { request, message } => {
                if state.is_current_detail(request) {
                    state.loading = false;
                    state.error = Some(message);
                } else {
                    tracing::debug!(request, "discarding superseded detail failure");
                }
                SmallVec::new()
            },

            EventsAction::ClearSelectedEvent => {
                state.selected_event = None;
                SmallVec::new()
            },
        }
    }
}
