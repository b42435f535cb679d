//! Environment dependencies for the events reducer.

use eventdeck_api::{ApiError, Event, EventId, EventsClient, ListFilters};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by gateway methods
pub type GatewayFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send>>;

/// Read-side access to the events resource, abstracted for injection.
///
/// Only the operations the store drives live here. Create, update and
/// delete are view-layer calls made directly on [`EventsClient`]; the store
/// never inserts optimistically and sees new events on the next listing
/// refresh.
pub trait EventsGateway: Send + Sync {
    /// List events, filtered
    fn list_events(&self, filters: ListFilters) -> GatewayFuture<Vec<Event>>;

    /// Fetch a single event by id
    fn event_by_id(&self, id: EventId) -> GatewayFuture<Event>;
}

impl EventsGateway for EventsClient {
    fn list_events(&self, filters: ListFilters) -> GatewayFuture<Vec<Event>> {
        let client = self.clone();
        Box::pin(async move { client.list_events(&filters).await })
    }

    fn event_by_id(&self, id: EventId) -> GatewayFuture<Event> {
        let client = self.clone();
        Box::pin(async move { client.event_by_id(&id).await })
    }
}

/// Environment for the events reducer.
///
/// Production injects an [`EventsClient`]; tests inject scripted gateways.
#[derive(Clone)]
pub struct EventsEnvironment {
    gateway: Arc<dyn EventsGateway>,
}

impl EventsEnvironment {
    /// Creates an environment with the given gateway
    #[must_use]
    pub fn new(gateway: Arc<dyn EventsGateway>) -> Self {
        Self { gateway }
    }

    /// Production environment backed by an [`EventsClient`] configured from
    /// the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Arc::new(EventsClient::from_env()))
    }

    /// A shared handle to the gateway
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn EventsGateway> {
        Arc::clone(&self.gateway)
    }
}
