//! SSF stream-management types — request/response models for the receiver API.
//!
//! Reference: <https://openid.net/specs/openid-sharedsignals-framework-1_0.html>
//! Subject identifier formats: <https://www.rfc-editor.org/rfc/rfc9493>
//!
//! Every model serializes with the snake_case field names the transmitter
//! speaks on the wire (`stream_id`, `events_supported`, ...). Optional fields
//! are omitted from the payload when absent, never serialized as `null`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Enums
// ============================================================================

/// The lifecycle status of an event stream.
///
/// Serialized as the lowercase strings the SSF status endpoints exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamStatus {
    /// The transmitter delivers events over the stream.
    Enabled,
    /// The transmitter holds events for later delivery.
    Paused,
    /// The transmitter drops events; the stream must be re-enabled.
    Disabled,
}

impl fmt::Display for StreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StreamStatus::Enabled => "enabled",
            StreamStatus::Paused => "paused",
            StreamStatus::Disabled => "disabled",
        };
        write!(f, "{}", s)
    }
}

// ============================================================================
// Subjects
// ============================================================================

/// A subject identifier, discriminated by its `format` member.
///
/// Covers the RFC 9493 identifier formats an SSF transmitter accepts in
/// subject-scoped requests. The wire shape is a JSON object whose `format`
/// field selects the variant:
///
/// ```json
/// {"format": "email", "email": "user@example.com"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum Subject {
    /// An `acct:` URI identifying an account.
    Account {
        /// The `acct:` URI.
        uri: String,
    },

    /// An email address.
    Email {
        /// The subject's email address.
        email: String,
    },

    /// An issuer/subject pair as found in JWT `iss`/`sub` claims.
    IssSub {
        /// The issuer.
        iss: String,
        /// The subject within that issuer.
        sub: String,
    },

    /// An opaque identifier agreed out of band.
    Opaque {
        /// The opaque identifier value.
        id: String,
    },

    /// A telephone number in E.164 format.
    PhoneNumber {
        /// The phone number.
        phone_number: String,
    },

    /// A decentralized identifier (DID) URL.
    Did {
        /// The DID URL.
        url: String,
    },

    /// A uniform resource identifier.
    Uri {
        /// The URI value.
        uri: String,
    },

    /// A set of identifiers that all refer to the same subject.
    Aliases {
        /// The constituent identifiers.
        identifiers: Vec<serde_json::Value>,
    },
}

impl Subject {
    /// Construct an email-format subject.
    pub fn email(email: impl Into<String>) -> Self {
        Subject::Email {
            email: email.into(),
        }
    }

    /// Construct an issuer/subject-format subject.
    pub fn iss_sub(iss: impl Into<String>, sub: impl Into<String>) -> Self {
        Subject::IssSub {
            iss: iss.into(),
            sub: sub.into(),
        }
    }

    /// Construct an opaque-format subject.
    pub fn opaque(id: impl Into<String>) -> Self {
        Subject::Opaque { id: id.into() }
    }

    /// Construct a phone-number-format subject.
    pub fn phone_number(phone_number: impl Into<String>) -> Self {
        Subject::PhoneNumber {
            phone_number: phone_number.into(),
        }
    }
}

// ============================================================================
// Delivery
// ============================================================================

/// Delivery method URN for poll-based delivery (RFC 8936).
pub const DELIVERY_POLL: &str = "urn:ietf:rfc:8936";

/// Delivery method URN for push-based delivery (RFC 8935).
pub const DELIVERY_PUSH: &str = "urn:ietf:rfc:8935";

/// How the transmitter should deliver events for a stream.
///
/// An embedded value object; equality is field-wise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// Delivery method URN ([`DELIVERY_POLL`] or [`DELIVERY_PUSH`]).
    pub method: String,

    /// Endpoint URL events are pushed to (push delivery) or polled from
    /// (poll delivery, filled in by the transmitter).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl Delivery {
    /// Poll-based delivery (the receiver fetches events via `/streams/poll`).
    pub fn poll() -> Self {
        Self {
            method: DELIVERY_POLL.to_string(),
            endpoint_url: None,
        }
    }

    /// Push-based delivery to the given receiver endpoint.
    pub fn push(endpoint_url: impl Into<String>) -> Self {
        Self {
            method: DELIVERY_PUSH.to_string(),
            endpoint_url: Some(endpoint_url.into()),
        }
    }
}

// ============================================================================
// Stream creation
// ============================================================================

/// Request body for `POST /streams`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStreamRequest {
    /// Requested delivery configuration.
    pub delivery: Delivery,

    /// Event-type URIs the receiver wants delivered.
    #[serde(default)]
    pub events_requested: Vec<String>,

    /// Human-readable stream description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateStreamRequest {
    /// Create a poll-delivery request for the given event-type URIs.
    pub fn poll(events_requested: Vec<String>) -> Self {
        Self {
            delivery: Delivery::poll(),
            events_requested,
            description: None,
        }
    }

    /// Append one event-type URI to `events_requested`.
    pub fn add_event_requested(&mut self, uri: impl Into<String>) -> &mut Self {
        self.events_requested.push(uri.into());
        self
    }
}

/// Response body for `POST /streams`.
///
/// Everything here is transmitter-owned; the identifiers are opaque tokens
/// and the event lists preserve the order the transmitter sent them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStreamResponse {
    /// Identifier of the created stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,

    /// Issuer of events delivered over this stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Audience the delivered events are addressed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,

    /// Event-type URIs the transmitter can deliver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_supported: Option<Vec<String>>,

    /// Event-type URIs the receiver asked for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_requested: Option<Vec<String>>,

    /// Event-type URIs the transmitter agreed to deliver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_delivered: Option<Vec<String>>,

    /// Stream description, if one was set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Negotiated delivery configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
}

impl CreateStreamResponse {
    /// Append to `events_supported`, initializing the list if absent.
    pub fn add_event_supported(&mut self, uri: impl Into<String>) -> &mut Self {
        self.events_supported
            .get_or_insert_with(Vec::new)
            .push(uri.into());
        self
    }

    /// Append to `events_requested`, initializing the list if absent.
    pub fn add_event_requested(&mut self, uri: impl Into<String>) -> &mut Self {
        self.events_requested
            .get_or_insert_with(Vec::new)
            .push(uri.into());
        self
    }

    /// Append to `events_delivered`, initializing the list if absent.
    pub fn add_event_delivered(&mut self, uri: impl Into<String>) -> &mut Self {
        self.events_delivered
            .get_or_insert_with(Vec::new)
            .push(uri.into());
        self
    }
}

// ============================================================================
// Stream status
// ============================================================================

/// Response body for `GET /status` and `POST /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Current status of the stream.
    pub status: StreamStatus,

    /// Identifier of the stream the status refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,

    /// Transmitter-supplied reason for the current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Request body for `POST /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// Identifier of the stream to update.
    pub stream_id: String,

    /// Target status.
    pub status: StreamStatus,

    /// Restrict the update to a single subject instead of the whole stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,

    /// Reason for the update, surfaced to transmitter operators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl UpdateStatusRequest {
    /// Request the given status for a whole stream.
    pub fn new(stream_id: impl Into<String>, status: StreamStatus) -> Self {
        Self {
            stream_id: stream_id.into(),
            status,
            subject: None,
            reason: None,
        }
    }
}

// ============================================================================
// Event polling
// ============================================================================

/// Request body for `POST /streams/poll` (RFC 8936 poll request).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollEventsRequest {
    /// Identifier of the stream to poll.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,

    /// Maximum number of events the transmitter should return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_events: Option<u32>,

    /// `jti`s of previously delivered SETs to acknowledge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ack: Option<Vec<String>>,

    /// Return immediately instead of long-polling for events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_immediately: Option<bool>,
}

impl PollEventsRequest {
    /// A non-blocking poll for up to `max_events` events on a stream.
    pub fn new(stream_id: impl Into<String>, max_events: u32) -> Self {
        Self {
            stream_id: Some(stream_id.into()),
            max_events: Some(max_events),
            ack: None,
            return_immediately: Some(true),
        }
    }

    /// Append one `jti` to the acknowledgement list, initializing it if absent.
    pub fn acknowledge(&mut self, jti: impl Into<String>) -> &mut Self {
        self.ack.get_or_insert_with(Vec::new).push(jti.into());
        self
    }
}

/// Response body for `POST /streams/poll`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollEventsResponse {
    /// Delivered Security Event Tokens, keyed by `jti`.
    #[serde(default)]
    pub sets: HashMap<String, String>,

    /// Whether more events are available for an immediate follow-up poll.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_available: Option<bool>,
}

impl PollEventsResponse {
    /// The `jti`s of the delivered SETs, for acknowledgement in the next poll.
    pub fn jtis(&self) -> Vec<&str> {
        self.sets.keys().map(String::as_str).collect()
    }

    /// Number of SETs delivered in this response.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether this response carried no SETs.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

// ============================================================================
// Subject removal
// ============================================================================

/// Request body for `POST /subjects/remove`.
///
/// Removes a single subject from the stream. Success is an empty 2xx
/// response; there is no response model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveSubjectRequest {
    /// Identifier of the stream to remove the subject from.
    pub stream_id: String,

    /// The subject to remove.
    pub subject: Subject,
}

impl RemoveSubjectRequest {
    /// Remove `subject` from the given stream.
    pub fn new(stream_id: impl Into<String>, subject: Subject) -> Self {
        Self {
            stream_id: stream_id.into(),
            subject,
        }
    }
}

// ============================================================================
// Transmitter configuration metadata
// ============================================================================

/// Transmitter configuration metadata, served from
/// `/.well-known/ssf-configuration`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransmitterConfig {
    /// Issuer the transmitter stamps into delivered SETs.
    pub issuer: String,

    /// URL of the transmitter's JWK Set for SET verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwks_uri: Option<String>,

    /// Delivery method URNs the transmitter supports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_methods_supported: Option<Vec<String>>,

    /// Endpoint for stream configuration calls (`POST /streams`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_endpoint: Option<String>,

    /// Endpoint for stream status calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_endpoint: Option<String>,

    /// SSF specification version the transmitter implements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_version: Option<String>,

    /// Authorization schemes the transmitter accepts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_schemes: Option<Vec<serde_json::Value>>,
}
