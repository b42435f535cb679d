//! Filter-to-query binding for the events listing.
//!
//! Maps UI filter state (city, category, free-text search) to and from URL
//! query strings. The binding only requests navigation; it never calls the
//! store. The consumer observes the URL change and refreshes the store with
//! the new filters.

use eventdeck_api::ListFilters;
use std::sync::Arc;
use url::form_urlencoded;

/// Default city selection, meaning "all cities"
pub const DEFAULT_CITY: &str = "all";

/// Default category selection, meaning "all categories"
pub const DEFAULT_CATEGORY: &str = "all";

/// Path of the events listing view
pub const EVENTS_PATH: &str = "/events";

/// UI filter state, synchronized with URL query parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// Selected city, `"all"` when unfiltered
    pub city: String,
    /// Selected category, `"all"` when unfiltered
    pub category: String,
    /// Free-text search query, empty when unfiltered
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            query: String::new(),
        }
    }
}

impl FilterState {
    /// Read filter state from a URL query string (without the leading `?`).
    ///
    /// Absent parameters fall back to their defaults.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut state = Self::default();
        state.sync_from_query(query);
        state
    }

    /// Re-synchronize from a query string after an external URL change
    /// (e.g. back/forward navigation).
    pub fn sync_from_query(&mut self, query: &str) {
        let mut next = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "city" => next.city = value.into_owned(),
                "category" => next.category = value.into_owned(),
                "q" => next.query = value.into_owned(),
                _ => {},
            }
        }
        *self = next;
    }

    /// Serialize only the parameters that differ from their defaults.
    ///
    /// Returns an empty string when every filter is at its default.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if self.city != DEFAULT_CITY {
            serializer.append_pair("city", &self.city);
        }
        if self.category != DEFAULT_CATEGORY {
            serializer.append_pair("category", &self.category);
        }
        if !self.query.is_empty() {
            serializer.append_pair("q", &self.query);
        }
        serializer.finish()
    }

    /// Normalize to API filters: defaults become `None` and are omitted from
    /// requests entirely.
    #[must_use]
    pub fn to_list_filters(&self) -> ListFilters {
        let mut filters = ListFilters::default();
        if self.city != DEFAULT_CITY {
            filters = filters.with_city(self.city.clone());
        }
        if self.category != DEFAULT_CATEGORY {
            filters = filters.with_category(self.category.clone());
        }
        if !self.query.is_empty() {
            filters = filters.with_query(self.query.clone());
        }
        filters
    }

    /// True when every filter is at its default
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.city == DEFAULT_CITY && self.category == DEFAULT_CATEGORY && self.query.is_empty()
    }

    /// Path of the events listing with these filters applied.
    #[must_use]
    pub fn events_path(&self) -> String {
        let query_string = self.to_query_string();
        if query_string.is_empty() {
            EVENTS_PATH.to_string()
        } else {
            format!("{EVENTS_PATH}?{query_string}")
        }
    }
}

/// Performs navigations requested by the filter binding.
pub trait Navigator: Send + Sync {
    /// Navigate to the given path (query string included)
    fn navigate(&self, path: &str);
}

/// Binds filter controls to URL navigation.
pub struct EventsFilterBinding {
    filters: FilterState,
    navigator: Arc<dyn Navigator>,
}

impl EventsFilterBinding {
    /// Creates a binding with default filters and the given navigator
    #[must_use]
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            filters: FilterState::default(),
            navigator,
        }
    }

    /// Current filter values
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Initialize or re-synchronize from the current URL's query string
    pub fn sync_from_query(&mut self, query: &str) {
        self.filters.sync_from_query(query);
    }

    /// Select a city
    pub fn set_city(&mut self, city: impl Into<String>) {
        self.filters.city = city.into();
    }

    /// Select a category
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filters.category = category.into();
    }

    /// Update the free-text search query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
    }

    /// The search button was activated
    pub fn search_clicked(&self) {
        self.submit();
    }

    /// A key was pressed while the search field had focus.
    ///
    /// Enter submits exactly like the search button; every other key is
    /// ignored.
    pub fn search_key(&self, key: &str) {
        if key == "Enter" {
            self.submit();
        }
    }

    fn submit(&self) {
        self.navigator.navigate(&self.filters.events_path());
    }
}
