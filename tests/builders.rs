//! Builder construction tests.

use ssf_rs::builders::CreateStreamRequestBuilder;
use ssf_rs::events::EventType;
use ssf_rs::types::{Delivery, DELIVERY_POLL, DELIVERY_PUSH};

#[test]
fn default_build_is_poll_delivery_with_no_events() {
    let request = CreateStreamRequestBuilder::new().build();

    assert_eq!(request.delivery.method, DELIVERY_POLL);
    assert!(request.delivery.endpoint_url.is_none());
    assert!(request.events_requested.is_empty());
    assert!(request.description.is_none());
}

#[test]
fn event_types_accumulate_in_order() {
    let request = CreateStreamRequestBuilder::new()
        .with_event_type(EventType::SessionRevoked)
        .with_event_type(EventType::CredentialChange)
        .with_event_uri("https://example.com/custom-event")
        .build();

    assert_eq!(
        request.events_requested,
        vec![
            EventType::SessionRevoked.uri().to_string(),
            EventType::CredentialChange.uri().to_string(),
            "https://example.com/custom-event".to_string(),
        ]
    );
}

#[test]
fn push_delivery_sets_endpoint() {
    let request = CreateStreamRequestBuilder::new()
        .with_push_delivery("https://receiver.example.com/events")
        .build();

    assert_eq!(request.delivery.method, DELIVERY_PUSH);
    assert_eq!(
        request.delivery.endpoint_url.as_deref(),
        Some("https://receiver.example.com/events")
    );
}

#[test]
fn explicit_delivery_overrides_default() {
    let request = CreateStreamRequestBuilder::new()
        .with_delivery(Delivery {
            method: "urn:example:custom".to_string(),
            endpoint_url: None,
        })
        .with_description("staging receiver")
        .build();

    assert_eq!(request.delivery.method, "urn:example:custom");
    assert_eq!(request.description.as_deref(), Some("staging receiver"));
}
