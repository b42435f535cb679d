//! Events API client implementation

use crate::{
    config::ApiConfig,
    error::ApiError,
    types::{Event, EventId, EventPatch, ListFilters},
};
use reqwest::{Client, Response};

/// Events API client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct EventsClient {
    client: Client,
    base_url: String,
}

impl EventsClient {
    /// Create a new client with an explicit base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a new client from the `EVENTS_API_URL` environment variable
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_config(&ApiConfig::from_env())
    }

    /// Create a new client from a loaded configuration
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// List events, filtered
    ///
    /// Only non-default filters are encoded as query parameters; an
    /// unfiltered call requests a bare `/events`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] for network failures,
    /// [`ApiError::Http`] for non-success statuses, and [`ApiError::Decode`]
    /// when the body is not a list of events.
    pub async fn list_events(&self, filters: &ListFilters) -> Result<Vec<Event>, ApiError> {
        let mut request = self.client.get(format!("{}/events", self.base_url));

        let pairs = filters.query_pairs();
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }

        let response = request.send().await.map_err(ApiError::Transport)?;
        let response = Self::ensure_success(response)?;

        response
            .json::<Vec<Event>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetch a single event by id
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::list_events`]; a missing event surfaces as
    /// `Http { status: 404 }`.
    pub async fn event_by_id(&self, id: &EventId) -> Result<Event, ApiError> {
        let response = self
            .client
            .get(self.event_url(id))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let response = Self::ensure_success(response)?;

        response
            .json::<Event>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Create an event
    ///
    /// The body is the full event; the server may assign or override the id,
    /// and its representation is returned.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::list_events`].
    pub async fn create_event(&self, event: &Event) -> Result<Event, ApiError> {
        let response = self
            .client
            .post(format!("{}/events", self.base_url))
            .json(event)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let response = Self::ensure_success(response)?;

        response
            .json::<Event>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Update an event with a partial body
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::list_events`].
    pub async fn update_event(
        &self,
        id: &EventId,
        patch: &EventPatch,
    ) -> Result<Event, ApiError> {
        let response = self
            .client
            .patch(self.event_url(id))
            .json(patch)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let response = Self::ensure_success(response)?;

        response
            .json::<Event>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Delete an event
    ///
    /// No body is expected on success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] for network failures and
    /// [`ApiError::Http`] for non-success statuses.
    pub async fn delete_event(&self, id: &EventId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.event_url(id))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::ensure_success(response)?;

        Ok(())
    }

    fn event_url(&self, id: &EventId) -> String {
        format!("{}/events/{id}", self.base_url)
    }

    /// Map a non-success status to `ApiError::Http` without reading the body
    fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Http {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = EventsClient::new("http://localhost:3001");
        assert_eq!(client.base_url, "http://localhost:3001");
    }

    #[test]
    fn test_event_url() {
        let client = EventsClient::new("http://localhost:3001");
        let url = client.event_url(&EventId::new("17"));
        assert_eq!(url, "http://localhost:3001/events/17");
    }
}
