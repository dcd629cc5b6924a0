//! High-level SSF client for managing event streams on a transmitter.
//!
//! One typed method per stream-management endpoint. Each call is a single
//! request/response cycle: serialize the request model, hand it to the
//! transport, check the HTTP status, decode the body into the response
//! model. No retries, no batching, no cross-call state.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{SsfError, SsfResult};
use crate::types::{
    CreateStreamRequest, CreateStreamResponse, PollEventsRequest, PollEventsResponse,
    RemoveSubjectRequest, StatusResponse, StreamStatus, UpdateStatusRequest,
};

use super::transport::{ApiRequest, Transport};

/// Stream configuration endpoint.
pub const STREAMS_PATH: &str = "/streams";

/// Stream status endpoint (GET to read, POST to update).
pub const STATUS_PATH: &str = "/status";

/// Event polling endpoint.
pub const POLL_PATH: &str = "/streams/poll";

/// Subject removal endpoint.
pub const REMOVE_SUBJECT_PATH: &str = "/subjects/remove";

/// Client for an SSF transmitter's stream-management API.
///
/// Exposes one method per endpoint:
/// - [`create_stream`](Self::create_stream) — `POST /streams`
/// - [`get_status`](Self::get_status) — `GET /status`
/// - [`update_status`](Self::update_status) — `POST /status`
/// - [`poll_events`](Self::poll_events) — `POST /streams/poll`
/// - [`remove_subject`](Self::remove_subject) — `POST /subjects/remove`
///
/// The client is stateless across calls; base URL and credentials live in
/// the injected [`Transport`]. Share one client between tasks freely — every
/// call is self-contained.
///
/// # Construction
///
/// ```no_run
/// use ssf_rs::client::SsfClient;
///
/// // Configured via the builder:
/// let client = SsfClient::builder("https://transmitter.example.com")
///     .with_bearer_token("f843a2ce-4e94-48d4-aed6-c1617024b245")
///     .build();
///
/// // Or with a custom transport:
/// use ssf_rs::client::HttpTransport;
/// let transport = HttpTransport::new("https://transmitter.example.com");
/// let client = SsfClient::with_transport(Box::new(transport));
/// ```
pub struct SsfClient {
    transport: Box<dyn Transport>,
}

impl std::fmt::Debug for SsfClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsfClient").finish_non_exhaustive()
    }
}

impl SsfClient {
    /// Create a client for the given transmitter base URL with default
    /// transport settings and no authentication.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            transport: Box::new(super::transport::HttpTransport::new(base_url)),
        }
    }

    /// Start building a client with custom transport settings.
    pub fn builder(base_url: impl Into<String>) -> crate::builders::ClientBuilder {
        crate::builders::ClientBuilder::new(base_url)
    }

    /// Create a client with a custom transport.
    ///
    /// Use this for custom HTTP configuration, alternative authentication,
    /// or a stub transport in tests.
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    // ──────────────────────────────────────────────────
    // Stream-management operations
    // ──────────────────────────────────────────────────

    /// Create an event stream (`POST /streams`).
    ///
    /// The transmitter answers with the negotiated stream configuration,
    /// including the `stream_id` used by every other call.
    pub async fn create_stream(
        &self,
        request: CreateStreamRequest,
    ) -> SsfResult<CreateStreamResponse> {
        self.post_json(STREAMS_PATH, &request).await
    }

    /// Read a stream's current status (`GET /status?stream_id=...`).
    pub async fn get_status(&self, stream_id: &str) -> SsfResult<StatusResponse> {
        let request = ApiRequest::get(
            STATUS_PATH,
            vec![("stream_id".to_string(), stream_id.to_string())],
        );
        self.execute(request).await
    }

    /// Update a stream's status (`POST /status`).
    pub async fn update_status(&self, request: UpdateStatusRequest) -> SsfResult<StatusResponse> {
        self.post_json(STATUS_PATH, &request).await
    }

    /// Poll for delivered events (`POST /streams/poll`).
    ///
    /// Pagination stays with the caller: inspect
    /// [`PollEventsResponse::more_available`] and poll again, acknowledging
    /// the received `jti`s via [`PollEventsRequest::acknowledge`].
    pub async fn poll_events(&self, request: PollEventsRequest) -> SsfResult<PollEventsResponse> {
        self.post_json(POLL_PATH, &request).await
    }

    /// Remove a subject from a stream (`POST /subjects/remove`).
    ///
    /// Success is an empty 2xx response; there is no response body.
    pub async fn remove_subject(&self, request: RemoveSubjectRequest) -> SsfResult<()> {
        let body = to_body(&request)?;
        let response = self
            .transport
            .execute(ApiRequest::post(REMOVE_SUBJECT_PATH, body))
            .await?;
        if !response.is_success() {
            return Err(SsfError::http(response.status, response.body_text()));
        }
        Ok(())
    }

    // ──────────────────────────────────────────────────
    // Status convenience wrappers
    // ──────────────────────────────────────────────────

    /// Set the stream's status to `enabled`.
    pub async fn enable_stream(&self, stream_id: &str) -> SsfResult<StatusResponse> {
        self.update_status(UpdateStatusRequest::new(stream_id, StreamStatus::Enabled))
            .await
    }

    /// Set the stream's status to `paused`.
    pub async fn pause_stream(&self, stream_id: &str) -> SsfResult<StatusResponse> {
        self.update_status(UpdateStatusRequest::new(stream_id, StreamStatus::Paused))
            .await
    }

    /// Set the stream's status to `disabled`.
    pub async fn disable_stream(&self, stream_id: &str) -> SsfResult<StatusResponse> {
        self.update_status(UpdateStatusRequest::new(stream_id, StreamStatus::Disabled))
            .await
    }

    // ──────────────────────────────────────────────────
    // Dispatch plumbing
    // ──────────────────────────────────────────────────

    async fn post_json<B, T>(&self, path: &str, body: &B) -> SsfResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = to_body(body)?;
        self.execute(ApiRequest::post(path, body)).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> SsfResult<T> {
        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(SsfError::http(response.status, response.body_text()));
        }
        serde_json::from_slice(&response.body)
            .map_err(|e| SsfError::invalid_json(format!("response body does not decode: {e}")))
    }
}

fn to_body<B: Serialize>(body: &B) -> SsfResult<serde_json::Value> {
    serde_json::to_value(body)
        .map_err(|e| SsfError::transport(format!("failed to serialize request body: {e}")))
}
