//! State types for the events store.

use eventdeck_api::Event;

/// Client-side cache of the events directory plus the status of the most
/// recent fetch.
///
/// The request counters implement fetch supersession: every dispatched fetch
/// allocates the next sequence number and records it as current for its
/// operation, and resolutions carrying an older number are discarded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventsState {
    /// Events from the most recent successful listing fetch, newest first
    pub events: Vec<Event>,
    /// Event shown on the detail view, if one has been fetched
    pub selected_event: Option<Event>,
    /// True strictly between dispatch of a fetch and its accepted resolution
    pub loading: bool,
    /// Fixed user-facing message from the most recent failed fetch
    pub error: Option<String>,
    /// Sequence number of the newest listing fetch
    pub(crate) current_list_request: u64,
    /// Sequence number of the newest detail fetch
    pub(crate) current_detail_request: u64,
    /// Last allocated sequence number, shared by both operations
    pub(crate) last_request: u64,
}

impl EventsState {
    /// Creates a new empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a sequence number for a new listing fetch
    pub(crate) fn begin_list_fetch(&mut self) -> u64 {
        self.last_request += 1;
        self.current_list_request = self.last_request;
        self.last_request
    }

    /// Allocate a sequence number for a new detail fetch
    pub(crate) fn begin_detail_fetch(&mut self) -> u64 {
        self.last_request += 1;
        self.current_detail_request = self.last_request;
        self.last_request
    }

    /// Whether a listing resolution is still current
    pub(crate) const fn is_current_list(&self, request: u64) -> bool {
        self.current_list_request == request
    }

    /// Whether a detail resolution is still current
    pub(crate) const fn is_current_detail(&self, request: u64) -> bool {
        self.current_detail_request == request
    }

    /// Number of cached events
    #[must_use]
    pub fn count(&self) -> usize {
        self.events.len()
    }
}

/// Order events newest first by their date.
///
/// The sort is stable: events sharing a date keep their relative input
/// order.
pub fn sort_newest_first(events: &mut [Event]) {
    events.sort_by(|a, b| b.date.cmp(&a.date));
}
