//! Builder patterns for ergonomic construction of SSF types.

use crate::types::*;

#[cfg(feature = "client")]
use std::collections::HashMap;

/// Builder for constructing [`CreateStreamRequest`] with sensible defaults.
///
/// Defaults to poll-based delivery. Build once; the resulting request is a
/// plain value the dispatcher serializes as-is.
///
/// # Example
///
/// ```
/// use ssf_rs::builders::CreateStreamRequestBuilder;
/// use ssf_rs::events::EventType;
///
/// let request = CreateStreamRequestBuilder::new()
///     .with_event_type(EventType::SessionRevoked)
///     .with_event_type(EventType::CredentialChange)
///     .with_description("production receiver")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreateStreamRequestBuilder {
    delivery: Option<Delivery>,
    events_requested: Vec<String>,
    description: Option<String>,
}

impl CreateStreamRequestBuilder {
    /// Create a new builder. Delivery defaults to poll-based.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific delivery configuration.
    pub fn with_delivery(mut self, delivery: Delivery) -> Self {
        self.delivery = Some(delivery);
        self
    }

    /// Request push delivery to the given receiver endpoint.
    pub fn with_push_delivery(mut self, endpoint_url: impl Into<String>) -> Self {
        self.delivery = Some(Delivery::push(endpoint_url));
        self
    }

    /// Request one event type by its [`crate::events::EventType`] variant.
    pub fn with_event_type(mut self, event_type: crate::events::EventType) -> Self {
        self.events_requested.push(event_type.uri().to_string());
        self
    }

    /// Request one event type by its full URI.
    pub fn with_event_uri(mut self, uri: impl Into<String>) -> Self {
        self.events_requested.push(uri.into());
        self
    }

    /// Set the human-readable stream description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the request.
    pub fn build(self) -> CreateStreamRequest {
        CreateStreamRequest {
            delivery: self.delivery.unwrap_or_else(Delivery::poll),
            events_requested: self.events_requested,
            description: self.description,
        }
    }
}

/// Builder for constructing a configured [`crate::client::SsfClient`].
///
/// # Example
///
/// ```no_run
/// use ssf_rs::builders::ClientBuilder;
/// use std::time::Duration;
///
/// let client = ClientBuilder::new("https://transmitter.example.com")
///     .with_bearer_token("f843a2ce-4e94-48d4-aed6-c1617024b245")
///     .with_timeout(Duration::from_secs(30))
///     .build();
/// ```
#[cfg(feature = "client")]
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    bearer_token: Option<String>,
    timeout: Option<std::time::Duration>,
    headers: HashMap<String, String>,
}

#[cfg(feature = "client")]
impl ClientBuilder {
    /// Create a new client builder for the given transmitter base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
            timeout: None,
            headers: HashMap::new(),
        }
    }

    /// Set the bearer token sent on every request.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a custom HTTP header sent on every request.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Build the client with an [`crate::client::HttpTransport`] configured
    /// from this builder.
    pub fn build(self) -> crate::client::SsfClient {
        use crate::client::{HttpTransport, SsfClient, TransportConfig};

        let config = TransportConfig {
            timeout: self
                .timeout
                .unwrap_or_else(|| TransportConfig::default().timeout),
            headers: self.headers,
        };

        let mut transport = HttpTransport::with_config(self.base_url, config);
        if let Some(token) = self.bearer_token {
            transport = transport.with_bearer_token(token);
        }

        SsfClient::with_transport(Box::new(transport))
    }
}
