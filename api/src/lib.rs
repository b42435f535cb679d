//! # Eventdeck API Client
//!
//! Rust client library for the events REST resource: listing with filters,
//! single-event lookup, and create/update/delete.
//!
//! ## Example
//!
//! ```no_run
//! use eventdeck_api::{EventsClient, ListFilters};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from EVENTS_API_URL environment variable
//!     let client = EventsClient::from_env();
//!
//!     let filters = ListFilters::default().with_city("pune");
//!     let events = client.list_events(&filters).await?;
//!
//!     println!("{} events", events.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior
//!
//! - Exactly one canonical event shape; decoding and validation happen here,
//!   never at consumption sites
//! - Non-success statuses become [`ApiError::Http`] without reading the body
//! - No retries and no client-side timeouts; every call resolves or fails
//!   exactly once

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::EventsClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use types::{Event, EventId, EventPatch, ListFilters};
