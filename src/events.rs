//! Security Event Token decoding and typed CAEP/SSF events.
//!
//! A poll response delivers SETs (RFC 8417) as compact JWTs. This module
//! decodes their claim sets and maps each `events` entry onto a typed
//! [`SsfEvent`]. Signature verification is out of scope here — decode the
//! payload segment only, and verify against the transmitter's JWKS upstream
//! if your deployment requires it.

use std::collections::HashMap;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SsfError, SsfResult};
use crate::types::PollEventsResponse;

// ============================================================================
// Event types
// ============================================================================

/// The CAEP and SSF event types a transmitter can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A session has been revoked.
    SessionRevoked,
    /// A credential was added, removed, or modified.
    CredentialChange,
    /// The subject's authenticator assurance level changed.
    AssuranceLevelChange,
    /// A device's compliance status changed.
    DeviceComplianceChange,
    /// Token claims have been updated.
    TokenClaimsChange,
    /// The stream's own configuration or status changed.
    StreamUpdated,
    /// SSF verification event, used to test stream liveness.
    Verification,
}

impl EventType {
    /// The full event-type URI for this event.
    pub fn uri(&self) -> &'static str {
        match self {
            Self::SessionRevoked => {
                "https://schemas.openid.net/secevent/caep/event-type/session-revoked"
            }
            Self::CredentialChange => {
                "https://schemas.openid.net/secevent/caep/event-type/credential-change"
            }
            Self::AssuranceLevelChange => {
                "https://schemas.openid.net/secevent/caep/event-type/assurance-level-change"
            }
            Self::DeviceComplianceChange => {
                "https://schemas.openid.net/secevent/caep/event-type/device-compliance-change"
            }
            Self::TokenClaimsChange => {
                "https://schemas.openid.net/secevent/caep/event-type/token-claims-change"
            }
            Self::StreamUpdated => {
                "https://schemas.openid.net/secevent/caep/event-type/stream-updated"
            }
            Self::Verification => {
                "https://schemas.openid.net/secevent/ssf/event-type/verification"
            }
        }
    }

    /// Map an event-type URI back to its variant.
    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            "https://schemas.openid.net/secevent/caep/event-type/session-revoked" => {
                Some(Self::SessionRevoked)
            }
            "https://schemas.openid.net/secevent/caep/event-type/credential-change" => {
                Some(Self::CredentialChange)
            }
            "https://schemas.openid.net/secevent/caep/event-type/assurance-level-change" => {
                Some(Self::AssuranceLevelChange)
            }
            "https://schemas.openid.net/secevent/caep/event-type/device-compliance-change" => {
                Some(Self::DeviceComplianceChange)
            }
            "https://schemas.openid.net/secevent/caep/event-type/token-claims-change" => {
                Some(Self::TokenClaimsChange)
            }
            "https://schemas.openid.net/secevent/caep/event-type/stream-updated" => {
                Some(Self::StreamUpdated)
            }
            "https://schemas.openid.net/secevent/ssf/event-type/verification" => {
                Some(Self::Verification)
            }
            _ => None,
        }
    }
}

/// The RFC 9493 format of an event's subject identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectFormat {
    /// `acct:` URI.
    Account,
    /// Email address.
    Email,
    /// Issuer/subject pair.
    IssSub,
    /// Opaque identifier.
    Opaque,
    /// Telephone number.
    PhoneNumber,
    /// Decentralized identifier.
    Did,
    /// Uniform resource identifier.
    Uri,
    /// Alias set.
    Aliases,
    /// Composite subject with no `format` member of its own.
    Complex,
}

impl SubjectFormat {
    /// Map an RFC 9493 format string to its variant.
    pub fn from_str(format: &str) -> Option<Self> {
        match format {
            "account" => Some(Self::Account),
            "email" => Some(Self::Email),
            "iss_sub" => Some(Self::IssSub),
            "opaque" => Some(Self::Opaque),
            "phone_number" => Some(Self::PhoneNumber),
            "did" => Some(Self::Did),
            "uri" => Some(Self::Uri),
            "aliases" => Some(Self::Aliases),
            _ => None,
        }
    }
}

// ============================================================================
// Security Event Token
// ============================================================================

/// The decoded claim set of a Security Event Token (RFC 8417).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityEventToken {
    /// Issuer of the token.
    pub iss: String,

    /// Issued-at timestamp, seconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Unique token identifier, acknowledged back to the transmitter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// Audience — a single string or an array of strings on the wire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<serde_json::Value>,

    /// Event payloads keyed by event-type URI.
    #[serde(default)]
    pub events: HashMap<String, serde_json::Value>,
}

impl SecurityEventToken {
    /// Decode a compact JWT's payload segment without verifying its
    /// signature.
    ///
    /// # Errors
    ///
    /// Returns [`SsfError::InvalidJson`] when the token is not a compact JWT,
    /// the payload segment is not valid base64url, or the claims do not
    /// decode into a SET.
    pub fn decode_unverified(token: &str) -> SsfResult<Self> {
        let mut segments = token.split('.');
        let (Some(_header), Some(payload)) = (segments.next(), segments.next()) else {
            return Err(SsfError::invalid_json("not a compact JWT"));
        };

        let claims = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| SsfError::invalid_json(format!("SET payload is not base64url: {e}")))?;

        serde_json::from_slice(&claims)
            .map_err(|e| SsfError::invalid_json(format!("SET claims do not decode: {e}")))
    }

    /// Parse every entry of the `events` claim into a typed [`SsfEvent`].
    ///
    /// # Errors
    ///
    /// Returns [`SsfError::InvalidJson`] when an event-type URI is unknown.
    pub fn events(&self) -> SsfResult<Vec<SsfEvent>> {
        let mut parsed = Vec::with_capacity(self.events.len());
        for (uri, payload) in &self.events {
            parsed.push(SsfEvent::from_claim(uri, payload.clone())?);
        }
        Ok(parsed)
    }

    /// The event-type URIs present in this SET.
    pub fn event_uris(&self) -> Vec<&str> {
        self.events.keys().map(String::as_str).collect()
    }
}

// ============================================================================
// Parsed events
// ============================================================================

/// One parsed security event from a SET's `events` claim.
#[derive(Debug, Clone, PartialEq)]
pub struct SsfEvent {
    /// The event type.
    pub event_type: EventType,

    /// The subject the event concerns, as delivered by the transmitter.
    pub subject: serde_json::Value,

    /// When the event occurred, seconds since the Unix epoch.
    pub event_timestamp: Option<i64>,

    /// The full event payload, for claims this SDK does not model.
    pub payload: serde_json::Value,
}

/// Event-type-specific fields carried by an [`SsfEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum EventDetail {
    /// No extra fields beyond subject and timestamp.
    SessionRevoked,
    /// What credential changed and how.
    CredentialChange {
        /// Kind of credential (e.g. `password`, `fido2-roaming`).
        credential_type: Option<String>,
        /// Kind of change (e.g. `create`, `revoke`).
        change_type: Option<String>,
    },
    /// Assurance level transition.
    AssuranceLevelChange {
        /// The new NIST AAL.
        current_level: Option<String>,
        /// The previous NIST AAL.
        previous_level: Option<String>,
        /// Whether the level went up or down.
        change_direction: Option<String>,
    },
    /// Device compliance transition.
    DeviceComplianceChange {
        /// Compliance status before the event.
        previous_status: Option<String>,
        /// Compliance status after the event.
        current_status: Option<String>,
    },
    /// Updated token claims.
    TokenClaimsChange {
        /// The claims that changed, with their new values.
        claims: serde_json::Value,
    },
    /// Stream configuration/status change.
    StreamUpdated {
        /// The stream's new status.
        status: Option<String>,
    },
    /// Verification challenge.
    Verification {
        /// The opaque state echoed from the verification request.
        state: Option<String>,
    },
}

impl SsfEvent {
    /// Build a typed event from one `events` claim entry.
    ///
    /// # Errors
    ///
    /// Returns [`SsfError::InvalidJson`] when `uri` is not a known event
    /// type.
    pub fn from_claim(uri: &str, payload: serde_json::Value) -> SsfResult<Self> {
        let event_type = EventType::from_uri(uri)
            .ok_or_else(|| SsfError::invalid_json(format!("unknown event type URI: {uri}")))?;

        let subject = payload
            .get("subject")
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        let event_timestamp = extract_timestamp(&payload);

        Ok(Self {
            event_type,
            subject,
            event_timestamp,
            payload,
        })
    }

    /// The RFC 9493 format of the event's subject, when it declares one.
    ///
    /// A subject object without a `format` member is reported as
    /// [`SubjectFormat::Complex`].
    pub fn subject_format(&self) -> Option<SubjectFormat> {
        let subject = self.subject.as_object()?;
        match subject.get("format").and_then(|f| f.as_str()) {
            Some(format) => SubjectFormat::from_str(format),
            None => Some(SubjectFormat::Complex),
        }
    }

    /// The event timestamp as a UTC datetime.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        self.event_timestamp.and_then(|ts| {
            DateTime::<Utc>::from_timestamp(ts, 0)
        })
    }

    /// The event-type-specific fields of this event.
    pub fn detail(&self) -> EventDetail {
        let get = |key: &str| {
            self.payload
                .get(key)
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        match self.event_type {
            EventType::SessionRevoked => EventDetail::SessionRevoked,
            EventType::CredentialChange => EventDetail::CredentialChange {
                credential_type: get("credential_type"),
                change_type: get("change_type"),
            },
            EventType::AssuranceLevelChange => EventDetail::AssuranceLevelChange {
                current_level: get("current_level"),
                previous_level: get("previous_level"),
                change_direction: get("change_direction"),
            },
            EventType::DeviceComplianceChange => EventDetail::DeviceComplianceChange {
                previous_status: get("previous_status"),
                current_status: get("current_status"),
            },
            EventType::TokenClaimsChange => EventDetail::TokenClaimsChange {
                claims: self
                    .payload
                    .get("claims")
                    .cloned()
                    .unwrap_or(serde_json::Value::Null),
            },
            EventType::StreamUpdated => EventDetail::StreamUpdated {
                status: get("status"),
            },
            EventType::Verification => EventDetail::Verification {
                state: get("state"),
            },
        }
    }
}

/// The `event_timestamp` claim, tolerating the numeric-string form some
/// transmitters emit under the legacy `timestamp` key.
fn extract_timestamp(payload: &serde_json::Value) -> Option<i64> {
    for key in ["event_timestamp", "timestamp"] {
        match payload.get(key) {
            Some(serde_json::Value::Number(n)) => return n.as_i64(),
            Some(serde_json::Value::String(s)) => return s.parse().ok(),
            _ => continue,
        }
    }
    None
}

impl PollEventsResponse {
    /// Decode every delivered SET and flatten the result into a single
    /// event list, ordered by `jti` for deterministic iteration.
    ///
    /// # Errors
    ///
    /// Returns [`SsfError::InvalidJson`] when any SET fails to decode or
    /// carries an unknown event-type URI.
    pub fn events(&self) -> SsfResult<Vec<SsfEvent>> {
        let mut jtis: Vec<&String> = self.sets.keys().collect();
        jtis.sort();

        let mut all = Vec::new();
        for jti in jtis {
            let token = SecurityEventToken::decode_unverified(&self.sets[jti])?;
            all.extend(token.events()?);
        }
        Ok(all)
    }
}
