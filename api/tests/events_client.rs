//! Integration tests for the events API client
//!
//! Exercises request construction and the error contract against a local
//! mock HTTP server.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use chrono::{DateTime, Utc};
use eventdeck_api::{ApiError, Event, EventId, EventPatch, EventsClient, ListFilters};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_event(id: &str, date: &str) -> Event {
    Event {
        id: EventId::new(id),
        title: format!("Event {id}"),
        description: "A sample event".to_string(),
        date: date.parse::<DateTime<Utc>>().unwrap(),
        duration: "2 hours".to_string(),
        location: "pune".to_string(),
        address: "12 MG Road".to_string(),
        organizer: "Eventdeck".to_string(),
        categories: vec!["music".to_string()],
        image: None,
    }
}

#[tokio::test]
async fn unfiltered_listing_has_empty_query_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param_is_missing("city"))
        .and(query_param_is_missing("category"))
        .and(query_param_is_missing("q"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![
            sample_event("1", "2025-03-14T19:00:00Z"),
            sample_event("2", "2025-03-15T19:00:00Z"),
        ]))
        .expect(1)
        .mount(&server)
        .await;

    let client = EventsClient::new(server.uri());
    let events = client.list_events(&ListFilters::default()).await.unwrap();

    assert_eq!(events.len(), 2);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn city_filter_is_encoded_as_query_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("city", "pune"))
        .and(query_param_is_missing("category"))
        .and(query_param_is_missing("q"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(vec![sample_event("1", "2025-03-14T19:00:00Z")]),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = EventsClient::new(server.uri());
    let filters = ListFilters::default().with_city("pune");
    let events = client.list_events(&filters).await.unwrap();

    assert_eq!(events.len(), 1);
}

#[tokio::test]
async fn all_filters_are_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("city", "pune"))
        .and(query_param("category", "music"))
        .and(query_param("q", "open air"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<Event>::new()))
        .expect(1)
        .mount(&server)
        .await;

    let client = EventsClient::new(server.uri());
    let filters = ListFilters::default()
        .with_city("pune")
        .with_category("music")
        .with_query("open air");
    let events = client.list_events(&filters).await.unwrap();

    assert!(events.is_empty());
}

#[tokio::test]
async fn server_error_surfaces_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = EventsClient::new(server.uri());
    let err = client.event_by_id(&EventId::new("1")).await.unwrap_err();

    assert!(matches!(err, ApiError::Http { status: 500 }));
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn missing_event_surfaces_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = EventsClient::new(server.uri());
    let err = client.event_by_id(&EventId::new("999")).await.unwrap_err();

    assert!(matches!(err, ApiError::Http { status: 404 }));
}

#[tokio::test]
async fn malformed_body_surfaces_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = EventsClient::new(server.uri());
    let err = client.list_events(&ListFilters::default()).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_surfaces_transport_error() {
    // Nothing listens on port 1
    let client = EventsClient::new("http://127.0.0.1:1");
    let err = client.list_events(&ListFilters::default()).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn event_by_id_decodes_single_event() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(sample_event("1", "2025-03-14T19:00:00Z")),
        )
        .mount(&server)
        .await;

    let client = EventsClient::new(server.uri());
    let event = client.event_by_id(&EventId::new("1")).await.unwrap();

    assert_eq!(event.id, EventId::new("1"));
    assert_eq!(event.location, "pune");
}

#[tokio::test]
async fn create_posts_json_body_and_returns_server_representation() {
    let server = MockServer::start().await;

    let draft = sample_event("client-id", "2025-06-01T18:00:00Z");
    let mut created = draft.clone();
    created.id = EventId::new("99");

    Mock::given(method("POST"))
        .and(path("/events"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::to_value(&draft).unwrap()))
        .respond_with(ResponseTemplate::new(201).set_body_json(&created))
        .expect(1)
        .mount(&server)
        .await;

    let client = EventsClient::new(server.uri());
    let result = client.create_event(&draft).await.unwrap();

    // The server's id wins
    assert_eq!(result.id, EventId::new("99"));
}

#[tokio::test]
async fn update_sends_only_provided_fields() {
    let server = MockServer::start().await;

    let mut updated = sample_event("1", "2025-03-14T19:00:00Z");
    updated.title = "Updated".to_string();

    Mock::given(method("PATCH"))
        .and(path("/events/1"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "title": "Updated" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&updated))
        .expect(1)
        .mount(&server)
        .await;

    let client = EventsClient::new(server.uri());
    let patch = EventPatch {
        title: Some("Updated".to_string()),
        ..EventPatch::default()
    };
    let result = client.update_event(&EventId::new("1"), &patch).await.unwrap();

    assert_eq!(result.title, "Updated");
}

#[tokio::test]
async fn delete_succeeds_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/events/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = EventsClient::new(server.uri());
    client.delete_event(&EventId::new("1")).await.unwrap();
}

#[tokio::test]
async fn delete_maps_failure_statuses() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/events/1"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = EventsClient::new(server.uri());
    let err = client.delete_event(&EventId::new("1")).await.unwrap_err();

    assert!(matches!(err, ApiError::Http { status: 403 }));
}
