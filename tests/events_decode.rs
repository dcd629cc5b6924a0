//! SET decoding and typed event parsing.
//!
//! Tokens are assembled in-test as unsigned compact JWTs: the decoder only
//! reads the payload segment, so a fixed header and empty signature are
//! enough to exercise it.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::json;
use ssf_rs::events::{EventDetail, EventType, SecurityEventToken, SsfEvent, SubjectFormat};
use ssf_rs::types::PollEventsResponse;
use ssf_rs::SsfError;

const SESSION_REVOKED_URI: &str =
    "https://schemas.openid.net/secevent/caep/event-type/session-revoked";
const CREDENTIAL_CHANGE_URI: &str =
    "https://schemas.openid.net/secevent/caep/event-type/credential-change";

/// Build an unsigned compact JWT carrying the given claim set.
fn encode_set(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&json!({"alg": "none"})).unwrap());
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
    format!("{header}.{payload}.")
}

fn session_revoked_claims() -> serde_json::Value {
    json!({
        "iss": "https://transmitter.example.com",
        "iat": 1_700_000_000,
        "jti": "jti-1",
        "aud": "https://receiver.example.com",
        "events": {
            SESSION_REVOKED_URI: {
                "subject": {"format": "email", "email": "a@b.com"},
                "event_timestamp": 1_700_000_000,
            }
        }
    })
}

// ============================================================================
// EventType / SubjectFormat
// ============================================================================

#[test]
fn event_type_uri_roundtrip() {
    let types = [
        EventType::SessionRevoked,
        EventType::CredentialChange,
        EventType::AssuranceLevelChange,
        EventType::DeviceComplianceChange,
        EventType::TokenClaimsChange,
        EventType::StreamUpdated,
        EventType::Verification,
    ];

    for event_type in types {
        assert_eq!(EventType::from_uri(event_type.uri()), Some(event_type));
    }

    assert_eq!(EventType::from_uri("https://example.com/not-an-event"), None);
}

#[test]
fn subject_format_strings_match_rfc9493() {
    assert_eq!(SubjectFormat::from_str("email"), Some(SubjectFormat::Email));
    assert_eq!(
        SubjectFormat::from_str("iss_sub"),
        Some(SubjectFormat::IssSub)
    );
    assert_eq!(
        SubjectFormat::from_str("phone_number"),
        Some(SubjectFormat::PhoneNumber)
    );
    assert_eq!(SubjectFormat::from_str("no-such-format"), None);
}

// ============================================================================
// SecurityEventToken decoding
// ============================================================================

#[test]
fn decode_unverified_reads_payload_claims() {
    let token = SecurityEventToken::decode_unverified(&encode_set(session_revoked_claims()))
        .unwrap();

    assert_eq!(token.iss, "https://transmitter.example.com");
    assert_eq!(token.iat, Some(1_700_000_000));
    assert_eq!(token.jti.as_deref(), Some("jti-1"));
    assert_eq!(token.event_uris(), vec![SESSION_REVOKED_URI]);
}

#[test]
fn decode_rejects_non_jwt_input() {
    let err = SecurityEventToken::decode_unverified("definitely-not-a-jwt").unwrap_err();
    assert!(matches!(err, SsfError::InvalidJson(_)));

    let err = SecurityEventToken::decode_unverified("a.!!!not-base64!!!.c").unwrap_err();
    assert!(matches!(err, SsfError::InvalidJson(_)));
}

#[test]
fn decode_rejects_non_set_claims() {
    let payload = URL_SAFE_NO_PAD.encode(b"[1,2,3]");
    let err = SecurityEventToken::decode_unverified(&format!("h.{payload}.s")).unwrap_err();
    assert!(matches!(err, SsfError::InvalidJson(_)));
}

// ============================================================================
// Typed events
// ============================================================================

#[test]
fn session_revoked_event_parses() {
    let token =
        SecurityEventToken::decode_unverified(&encode_set(session_revoked_claims())).unwrap();
    let events = token.events().unwrap();
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event.event_type, EventType::SessionRevoked);
    assert_eq!(event.subject["email"], "a@b.com");
    assert_eq!(event.subject_format(), Some(SubjectFormat::Email));
    assert_eq!(event.event_timestamp, Some(1_700_000_000));
    assert_eq!(
        event.occurred_at().map(|t| t.timestamp()),
        Some(1_700_000_000)
    );
    assert_eq!(event.detail(), EventDetail::SessionRevoked);
}

#[test]
fn credential_change_detail_fields() {
    let event = SsfEvent::from_claim(
        CREDENTIAL_CHANGE_URI,
        json!({
            "subject": {"format": "iss_sub", "iss": "https://idp.example.com", "sub": "u-1"},
            "event_timestamp": 1_700_000_100,
            "credential_type": "fido2-roaming",
            "change_type": "create",
        }),
    )
    .unwrap();

    assert_eq!(event.subject_format(), Some(SubjectFormat::IssSub));
    assert_eq!(
        event.detail(),
        EventDetail::CredentialChange {
            credential_type: Some("fido2-roaming".to_string()),
            change_type: Some("create".to_string()),
        }
    );
}

#[test]
fn device_compliance_detail_fields() {
    let event = SsfEvent::from_claim(
        "https://schemas.openid.net/secevent/caep/event-type/device-compliance-change",
        json!({
            "subject": {"format": "opaque", "id": "device-7"},
            "event_timestamp": 1_700_000_200,
            "previous_status": "compliant",
            "current_status": "not-compliant",
        }),
    )
    .unwrap();

    assert_eq!(
        event.detail(),
        EventDetail::DeviceComplianceChange {
            previous_status: Some("compliant".to_string()),
            current_status: Some("not-compliant".to_string()),
        }
    );
}

#[test]
fn token_claims_change_carries_claims() {
    let event = SsfEvent::from_claim(
        "https://schemas.openid.net/secevent/caep/event-type/token-claims-change",
        json!({
            "subject": {"format": "email", "email": "a@b.com"},
            "event_timestamp": 1_700_000_300,
            "claims": {"role": "admin"},
        }),
    )
    .unwrap();

    assert_eq!(
        event.detail(),
        EventDetail::TokenClaimsChange {
            claims: json!({"role": "admin"}),
        }
    );
}

#[test]
fn unknown_event_uri_is_an_error() {
    let err = SsfEvent::from_claim("https://example.com/mystery", json!({})).unwrap_err();
    assert!(matches!(err, SsfError::InvalidJson(_)));
}

#[test]
fn subject_without_format_is_complex() {
    let event = SsfEvent::from_claim(
        SESSION_REVOKED_URI,
        json!({
            "subject": {"user": {"format": "email", "email": "a@b.com"}},
            "event_timestamp": 1_700_000_000,
        }),
    )
    .unwrap();

    assert_eq!(event.subject_format(), Some(SubjectFormat::Complex));
}

#[test]
fn legacy_string_timestamp_is_tolerated() {
    let event = SsfEvent::from_claim(
        SESSION_REVOKED_URI,
        json!({
            "subject": {"format": "email", "email": "a@b.com"},
            "timestamp": "1700000000",
        }),
    )
    .unwrap();

    assert_eq!(event.event_timestamp, Some(1_700_000_000));
}

// ============================================================================
// PollEventsResponse::events
// ============================================================================

#[test]
fn poll_response_events_are_jti_ordered() {
    let first = encode_set(json!({
        "iss": "https://t.example.com",
        "jti": "jti-a",
        "events": {
            SESSION_REVOKED_URI: {
                "subject": {"format": "email", "email": "first@example.com"},
                "event_timestamp": 1,
            }
        }
    }));
    let second = encode_set(json!({
        "iss": "https://t.example.com",
        "jti": "jti-b",
        "events": {
            SESSION_REVOKED_URI: {
                "subject": {"format": "email", "email": "second@example.com"},
                "event_timestamp": 2,
            }
        }
    }));

    let response: PollEventsResponse = serde_json::from_value(json!({
        "sets": {"jti-b": second, "jti-a": first},
    }))
    .unwrap();

    let events = response.events().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].subject["email"], "first@example.com");
    assert_eq!(events[1].subject["email"], "second@example.com");
}

#[test]
fn poll_response_with_undecodable_set_fails() {
    let response: PollEventsResponse = serde_json::from_value(json!({
        "sets": {"jti-1": "garbage"},
    }))
    .unwrap();

    assert!(matches!(
        response.events().unwrap_err(),
        SsfError::InvalidJson(_)
    ));
}
