//! Transition-sequence tests for the events reducer.
//!
//! These drive the reducer through multi-step fetch lifecycles directly,
//! without the async runtime, to pin down the state machine.

#![allow(clippy::unwrap_used)] // Test code

use crate::actions::EventsAction;
use crate::environment::{EventsEnvironment, EventsGateway, GatewayFuture};
use crate::reducer::{EVENT_DETAIL_LOAD_ERROR, EVENTS_LOAD_ERROR, EventsReducer};
use crate::types::EventsState;
use chrono::{TimeZone, Utc};
use eventdeck_api::{ApiError, Event, EventId, ListFilters};
use eventdeck_core::reducer::Reducer;
use std::sync::Arc;

struct IdleGateway;

impl EventsGateway for IdleGateway {
    fn list_events(&self, _filters: ListFilters) -> GatewayFuture<Vec<Event>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn event_by_id(&self, _id: EventId) -> GatewayFuture<Event> {
        Box::pin(async { Err(ApiError::Http { status: 404 }) })
    }
}

fn test_env() -> EventsEnvironment {
    EventsEnvironment::new(Arc::new(IdleGateway))
}

fn event_on_day(id: &str, day: i64) -> Event {
    Event {
        id: EventId::new(id),
        title: format!("Event {id}"),
        description: String::new(),
        date: Utc.timestamp_opt(day * 86_400, 0).single().unwrap(),
        duration: "2 hours".to_string(),
        location: "pune".to_string(),
        address: String::new(),
        organizer: String::new(),
        categories: Vec::new(),
        image: None,
    }
}

/// Dispatch a fetch command and return the sequence number it allocated
fn dispatch_list_fetch(state: &mut EventsState, env: &EventsEnvironment) -> u64 {
    let reducer = EventsReducer::new();
    let _effects = reducer.reduce(
        state,
        EventsAction::FetchEvents {
            filters: ListFilters::default(),
        },
        env,
    );
    state.current_list_request
}

fn dispatch_detail_fetch(state: &mut EventsState, env: &EventsEnvironment) -> u64 {
    let reducer = EventsReducer::new();
    let _effects = reducer.reduce(
        state,
        EventsAction::FetchEventById {
            id: EventId::new("1"),
        },
        env,
    );
    state.current_detail_request
}

#[test]
fn resolution_settles_exactly_one_outcome() {
    let reducer = EventsReducer::new();
    let env = test_env();
    let mut state = EventsState::new();

    let request = dispatch_list_fetch(&mut state, &env);
    assert!(state.loading);

    reducer.reduce(
        &mut state,
        EventsAction::EventsLoaded {
            request,
            events: vec![event_on_day("1", 1)],
        },
        &env,
    );

    assert!(!state.loading);
    assert_eq!(state.count(), 1);
    assert!(state.error.is_none());
}

#[test]
fn superseded_list_resolution_is_discarded() {
    let reducer = EventsReducer::new();
    let env = test_env();
    let mut state = EventsState::new();

    let first = dispatch_list_fetch(&mut state, &env);
    let second = dispatch_list_fetch(&mut state, &env);
    assert!(first < second);

    // The older fetch settles after the newer one was dispatched
    reducer.reduce(
        &mut state,
        EventsAction::EventsLoaded {
            request: first,
            events: vec![event_on_day("stale", 1)],
        },
        &env,
    );

    assert!(state.loading, "newest fetch is still outstanding");
    assert_eq!(state.count(), 0);

    reducer.reduce(
        &mut state,
        EventsAction::EventsLoaded {
            request: second,
            events: vec![event_on_day("fresh", 2)],
        },
        &env,
    );

    assert!(!state.loading);
    assert_eq!(state.events[0].id.as_str(), "fresh");
}

#[test]
fn superseded_failure_cannot_overwrite_fresh_success() {
    let reducer = EventsReducer::new();
    let env = test_env();
    let mut state = EventsState::new();

    let first = dispatch_list_fetch(&mut state, &env);
    let second = dispatch_list_fetch(&mut state, &env);

    reducer.reduce(
        &mut state,
        EventsAction::EventsLoaded {
            request: second,
            events: vec![event_on_day("fresh", 2)],
        },
        &env,
    );
    reducer.reduce(
        &mut state,
        EventsAction::EventsLoadFailed {
            request: first,
            message: EVENTS_LOAD_ERROR.to_string(),
        },
        &env,
    );

    assert!(state.error.is_none());
    assert!(!state.loading);
    assert_eq!(state.count(), 1);
}

#[test]
fn superseded_detail_resolution_is_discarded() {
    let reducer = EventsReducer::new();
    let env = test_env();
    let mut state = EventsState::new();

    let first = dispatch_detail_fetch(&mut state, &env);
    let second = dispatch_detail_fetch(&mut state, &env);

    reducer.reduce(
        &mut state,
        EventsAction::EventLoaded {
            request: first,
            event: Box::new(event_on_day("stale", 1)),
        },
        &env,
    );
    assert!(state.selected_event.is_none());

    reducer.reduce(
        &mut state,
        EventsAction::EventLoaded {
            request: second,
            event: Box::new(event_on_day("fresh", 2)),
        },
        &env,
    );
    assert_eq!(state.selected_event.as_ref().unwrap().id.as_str(), "fresh");
}

#[test]
fn new_fetch_clears_error_from_previous_failure() {
    let reducer = EventsReducer::new();
    let env = test_env();
    let mut state = EventsState::new();

    let request = dispatch_list_fetch(&mut state, &env);
    reducer.reduce(
        &mut state,
        EventsAction::EventsLoadFailed {
            request,
            message: EVENTS_LOAD_ERROR.to_string(),
        },
        &env,
    );
    assert!(state.error.is_some());

    dispatch_list_fetch(&mut state, &env);
    assert!(state.error.is_none());
    assert!(state.loading);
}

#[test]
fn list_and_detail_share_the_loading_flag() {
    let reducer = EventsReducer::new();
    let env = test_env();
    let mut state = EventsState::new();

    let list_request = dispatch_list_fetch(&mut state, &env);
    let detail_request = dispatch_detail_fetch(&mut state, &env);
    assert!(state.loading);

    // The list resolution lowers the shared flag even though the detail
    // fetch is still outstanding; the two operations race on loading/error
    // by design, last transition wins.
    reducer.reduce(
        &mut state,
        EventsAction::EventsLoaded {
            request: list_request,
            events: Vec::new(),
        },
        &env,
    );
    assert!(!state.loading);

    reducer.reduce(
        &mut state,
        EventsAction::EventLoadFailed {
            request: detail_request,
            message: EVENT_DETAIL_LOAD_ERROR.to_string(),
        },
        &env,
    );
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(EVENT_DETAIL_LOAD_ERROR));
}

#[test]
fn detail_failure_uses_detail_message() {
    let reducer = EventsReducer::new();
    let env = test_env();
    let mut state = EventsState::new();

    let request = dispatch_detail_fetch(&mut state, &env);
    reducer.reduce(
        &mut state,
        EventsAction::EventLoadFailed {
            request,
            message: EVENT_DETAIL_LOAD_ERROR.to_string(),
        },
        &env,
    );

    assert_eq!(state.error.as_deref(), Some("Failed to load event details."));
}

#[test]
fn fixed_messages_match_the_ui_copy() {
    assert_eq!(EVENTS_LOAD_ERROR, "Failed to load events. Please try again.");
    assert_eq!(EVENT_DETAIL_LOAD_ERROR, "Failed to load event details.");
}
