//! Serialization roundtrip tests for every stream-management model.
//!
//! These tests verify:
//! - Correct snake_case field names in JSON output
//! - Successful roundtrip (serialize -> deserialize -> equal)
//! - Optional fields are omitted when absent, never serialized as null
//! - The `format` discriminator on subject identifiers

use ssf_rs::types::*;
use serde_json::json;

// ============================================================================
// StreamStatus
// ============================================================================

#[test]
fn stream_status_all_variants_serialize() {
    let cases = vec![
        (StreamStatus::Enabled, "enabled"),
        (StreamStatus::Paused, "paused"),
        (StreamStatus::Disabled, "disabled"),
    ];

    for (status, expected) in cases {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", expected));

        // Roundtrip
        let deserialized: StreamStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, status);

        // Display matches the wire string
        assert_eq!(status.to_string(), expected);
    }
}

// ============================================================================
// Subject ("format" discriminator)
// ============================================================================

#[test]
fn email_subject_serialization() {
    let subject = Subject::email("user@example.com");
    let json = serde_json::to_value(&subject).unwrap();

    assert_eq!(json["format"], "email");
    assert_eq!(json["email"], "user@example.com");

    let decoded: Subject = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, subject);
}

#[test]
fn iss_sub_subject_serialization() {
    let subject = Subject::iss_sub("https://idp.example.com", "user-42");
    let json = serde_json::to_value(&subject).unwrap();

    assert_eq!(json["format"], "iss_sub");
    assert_eq!(json["iss"], "https://idp.example.com");
    assert_eq!(json["sub"], "user-42");

    let decoded: Subject = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, subject);
}

#[test]
fn phone_number_subject_uses_snake_case_format() {
    let subject = Subject::phone_number("+12065551212");
    let json = serde_json::to_value(&subject).unwrap();

    assert_eq!(json["format"], "phone_number");
    assert_eq!(json["phone_number"], "+12065551212");
}

#[test]
fn opaque_and_account_subject_roundtrip() {
    for subject in [
        Subject::opaque("a5e-42"),
        Subject::Account {
            uri: "acct:user@example.com".to_string(),
        },
        Subject::Aliases {
            identifiers: vec![json!({"format": "email", "email": "a@b.com"})],
        },
    ] {
        let json = serde_json::to_value(&subject).unwrap();
        let decoded: Subject = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, subject);
    }
}

// ============================================================================
// Delivery
// ============================================================================

#[test]
fn poll_delivery_omits_endpoint_url() {
    let delivery = Delivery::poll();
    let json = serde_json::to_value(&delivery).unwrap();

    assert_eq!(json["method"], DELIVERY_POLL);
    // endpoint_url should be omitted when None
    assert!(json.get("endpoint_url").is_none());

    let decoded: Delivery = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, delivery);
}

#[test]
fn push_delivery_carries_endpoint_url() {
    let delivery = Delivery::push("https://receiver.example.com/events");
    let json = serde_json::to_value(&delivery).unwrap();

    assert_eq!(json["method"], DELIVERY_PUSH);
    assert_eq!(json["endpoint_url"], "https://receiver.example.com/events");
}

// ============================================================================
// CreateStreamRequest / CreateStreamResponse
// ============================================================================

#[test]
fn create_stream_request_wire_shape() {
    let mut request = CreateStreamRequest::poll(vec![
        "https://schemas.openid.net/secevent/caep/event-type/session-revoked".to_string(),
    ]);
    request.add_event_requested(
        "https://schemas.openid.net/secevent/caep/event-type/credential-change",
    );

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["delivery"]["method"], DELIVERY_POLL);
    assert_eq!(
        json["events_requested"],
        json!([
            "https://schemas.openid.net/secevent/caep/event-type/session-revoked",
            "https://schemas.openid.net/secevent/caep/event-type/credential-change",
        ])
    );
    // description omitted when None
    assert!(json.get("description").is_none());

    let decoded: CreateStreamRequest = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, request);
}

#[test]
fn create_stream_response_roundtrip_full() {
    let wire = json!({
        "stream_id": "s-123",
        "iss": "https://transmitter.example.com",
        "aud": "https://receiver.example.com",
        "events_supported": [
            "https://schemas.openid.net/secevent/caep/event-type/session-revoked",
            "https://schemas.openid.net/secevent/caep/event-type/credential-change",
        ],
        "events_requested": [
            "https://schemas.openid.net/secevent/caep/event-type/session-revoked",
        ],
        "events_delivered": [
            "https://schemas.openid.net/secevent/caep/event-type/session-revoked",
        ],
        "description": "production stream",
        "delivery": {"method": "urn:ietf:rfc:8936"},
    });

    let response: CreateStreamResponse = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(response.stream_id.as_deref(), Some("s-123"));
    assert_eq!(
        response.events_supported.as_ref().map(Vec::len),
        Some(2),
    );
    // Lists preserve the order the transmitter sent
    assert_eq!(
        response.events_supported.as_ref().unwrap()[0],
        "https://schemas.openid.net/secevent/caep/event-type/session-revoked"
    );

    let reserialized = serde_json::to_value(&response).unwrap();
    assert_eq!(reserialized, wire);
}

#[test]
fn create_stream_response_empty_omits_all_fields() {
    let response = CreateStreamResponse::default();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json, json!({}));

    let decoded: CreateStreamResponse = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, response);
}

// ============================================================================
// Status models
// ============================================================================

#[test]
fn status_response_roundtrip() {
    let wire = json!({"status": "enabled", "stream_id": "s-123"});
    let response: StatusResponse = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(response.status, StreamStatus::Enabled);
    assert_eq!(response.stream_id.as_deref(), Some("s-123"));
    assert!(response.reason.is_none());

    assert_eq!(serde_json::to_value(&response).unwrap(), wire);
}

#[test]
fn update_status_request_omits_absent_subject_and_reason() {
    let request = UpdateStatusRequest::new("s-123", StreamStatus::Paused);
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json, json!({"stream_id": "s-123", "status": "paused"}));
}

#[test]
fn update_status_request_with_subject_roundtrip() {
    let mut request = UpdateStatusRequest::new("s-123", StreamStatus::Disabled);
    request.subject = Some(Subject::email("a@b.com"));
    request.reason = Some("offboarded".to_string());

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["subject"]["format"], "email");
    assert_eq!(json["reason"], "offboarded");

    let decoded: UpdateStatusRequest = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, request);
}

// ============================================================================
// Polling models
// ============================================================================

#[test]
fn poll_events_request_wire_shape() {
    let request = PollEventsRequest::new("s-123", 10);
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(
        json,
        json!({
            "stream_id": "s-123",
            "max_events": 10,
            "return_immediately": true,
        })
    );

    let decoded: PollEventsRequest = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, request);
}

#[test]
fn poll_events_response_roundtrip() {
    let wire = json!({
        "sets": {"jti-1": "a.b.c", "jti-2": "d.e.f"},
        "more_available": true,
    });

    let response: PollEventsResponse = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(response.len(), 2);
    assert_eq!(response.more_available, Some(true));
    assert_eq!(response.sets["jti-1"], "a.b.c");

    assert_eq!(serde_json::to_value(&response).unwrap(), wire);
}

#[test]
fn poll_events_response_tolerates_missing_sets() {
    let response: PollEventsResponse = serde_json::from_value(json!({})).unwrap();
    assert!(response.is_empty());
    assert!(response.more_available.is_none());
}

// ============================================================================
// RemoveSubjectRequest
// ============================================================================

#[test]
fn remove_subject_request_wire_shape() {
    let request = RemoveSubjectRequest::new("s-123", Subject::email("a@b.com"));
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(
        json,
        json!({
            "stream_id": "s-123",
            "subject": {"format": "email", "email": "a@b.com"},
        })
    );

    let decoded: RemoveSubjectRequest = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, request);
}

// ============================================================================
// TransmitterConfig
// ============================================================================

#[test]
fn transmitter_config_roundtrip() {
    let wire = json!({
        "issuer": "https://transmitter.example.com",
        "jwks_uri": "https://transmitter.example.com/jwks.json",
        "delivery_methods_supported": ["urn:ietf:rfc:8936"],
        "configuration_endpoint": "https://transmitter.example.com/streams",
        "status_endpoint": "https://transmitter.example.com/status",
        "spec_version": "1_0-ID2",
    });

    let config: TransmitterConfig = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(config.issuer, "https://transmitter.example.com");
    assert_eq!(
        config.status_endpoint.as_deref(),
        Some("https://transmitter.example.com/status")
    );

    assert_eq!(serde_json::to_value(&config).unwrap(), wire);
}

#[test]
fn transmitter_config_minimal() {
    let config: TransmitterConfig =
        serde_json::from_value(json!({"issuer": "https://t.example.com"})).unwrap();
    assert!(config.jwks_uri.is_none());
    assert!(config.authorization_schemes.is_none());

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json, json!({"issuer": "https://t.example.com"}));
}
