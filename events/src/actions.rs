//! Actions for the events store.

use eventdeck_api::{Event, EventId, ListFilters};

/// All inputs to the events reducer, as a closed enum.
///
/// Fetch commands allocate a request sequence number when reduced;
/// resolution actions carry that number back so the reducer can discard
/// resolutions belonging to a superseded fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum EventsAction {
    /// Command: fetch the events listing with the given filters
    FetchEvents {
        /// Filters to apply to the listing
        filters: ListFilters,
    },

    /// Command: fetch a single event for the detail view
    FetchEventById {
        /// Event to fetch
        id: EventId,
    },

    /// The listing fetch with this sequence number succeeded
    EventsLoaded {
        /// Sequence number allocated when the fetch was dispatched
        request: u64,
        /// Events as returned by the server (unsorted)
        events: Vec<Event>,
    },

    /// The listing fetch with this sequence number failed
    EventsLoadFailed {
        /// Sequence number allocated when the fetch was dispatched
        request: u64,
        /// Fixed user-facing message
        message: String,
    },

    /// The detail fetch with this sequence number succeeded
    EventLoaded {
        /// Sequence number allocated when the fetch was dispatched
        request: u64,
        /// The fetched event
        event: Box<Event>,
    },

    /// The detail fetch with this sequence number failed
    EventLoadFailed {
        /// Sequence number allocated when the fetch was dispatched
        request: u64,
        /// Fixed user-facing message
        message: String,
    },

    /// Clear the detail selection
    ///
    /// Leaves the event list, `loading`, and `error` untouched; a no-op when
    /// nothing is selected.
    ClearSelectedEvent,
}
