//! Events store feature for the Eventdeck client.
//!
//! This crate is the client-side authoritative cache of the events
//! directory: the event list, the selected detail event, and the status of
//! the most recent fetch.
//!
//! # Architecture
//!
//! ```text
//! URL change / user action → EventsStore
//!                 ↓
//!                 Dispatches FetchEvents / FetchEventById
//!                 ↓
//! EventsReducer marks the fetch pending and describes an Effect
//!                 ↓
//! Runtime executes the effect → EventsGateway (HTTP) resolves
//!                 ↓
//! …Loaded / …Failed action fed back into the reducer
//!                 ↓
//! State updated atomically; view layer reads a snapshot
//! ```
//!
//! # Key behaviors
//!
//! - One shared `loading`/`error` pair for both fetch kinds; a list fetch
//!   and a detail fetch race on those two fields, last accepted transition
//!   wins
//! - Every fetch carries a request sequence number; a resolution arriving
//!   for a superseded fetch is discarded, so the newest request wins
//! - A failed fetch surfaces a fixed user-facing message and never discards
//!   previously loaded data

pub mod actions;
pub mod environment;
pub mod filter;
pub mod reducer;
pub mod store;
#[cfg(test)]
mod tests;
pub mod types;

pub use actions::EventsAction;
pub use environment::{EventsEnvironment, EventsGateway, GatewayFuture};
pub use filter::{EventsFilterBinding, FilterState, Navigator};
pub use reducer::{EVENT_DETAIL_LOAD_ERROR, EVENTS_LOAD_ERROR, EventsReducer};
pub use store::EventsStore;
pub use types::{EventsState, sort_newest_first};
