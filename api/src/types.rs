//! Wire types for the events resource.
//!
//! This module is the decode/validate boundary: exactly one canonical event
//! shape exists, and consumers never branch on alternative representations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for an event.
///
/// The server owns id assignment. Older server fixtures carry numeric ids
/// while newer ones carry strings, so decoding accepts both and normalizes
/// to a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates an `EventId` from anything string-like
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = EventId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer event id")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<EventId, E> {
                Ok(EventId(v.to_owned()))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<EventId, E> {
                Ok(EventId(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<EventId, E> {
                Ok(EventId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// A bookable happening: date, location, descriptive fields and category
/// metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier (server may assign or override on create)
    pub id: EventId,
    /// Event title
    pub title: String,
    /// Longer description
    pub description: String,
    /// When the event takes place
    pub date: DateTime<Utc>,
    /// Freeform duration (e.g. "2 hours")
    pub duration: String,
    /// City or venue area the event is listed under
    pub location: String,
    /// Street address
    pub address: String,
    /// Organizer name
    pub organizer: String,
    /// Category tags
    #[serde(default)]
    pub categories: Vec<String>,
    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Partial event for PATCH requests.
///
/// Only fields that are `Some` are serialized, so the server merges rather
/// than replaces.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EventPatch {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// New duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// New location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// New address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// New organizer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    /// New category tags (replaces the whole list)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// New cover image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Filters for the events listing.
///
/// `None` means "use the default" (all cities / all categories / no search
/// text) and is omitted from the request entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFilters {
    /// City to filter by
    pub city: Option<String>,
    /// Category to filter by
    pub category: Option<String>,
    /// Free-text search query
    pub query: Option<String>,
}

impl ListFilters {
    /// Sets the city filter
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the category filter
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the free-text query
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// True when every filter is at its default
    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        self.city.is_none() && self.category.is_none() && self.query.is_none()
    }

    /// The query parameters this filter set contributes to a request.
    ///
    /// Defaults contribute nothing, so an unfiltered listing produces a bare
    /// `/events` with no `?`.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(city) = &self.city {
            pairs.push(("city", city.as_str()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.as_str()));
        }
        if let Some(query) = &self.query {
            pairs.push(("q", query.as_str()));
        }
        pairs
    }
}
