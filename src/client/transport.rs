//! Transport layer for SSF client communication.
//!
//! Provides the `Transport` trait for abstracting over the HTTP exchange,
//! and `HttpTransport` for the standard JSON-over-HTTPS binding. The
//! transport owns shared configuration — base URL, bearer token, timeout,
//! extra headers — and performs the raw request/response cycle. Status-code
//! interpretation and body decoding stay with the dispatcher.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};

use crate::error::{SsfError, SsfResult};

/// HTTP method of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
}

/// One API request, ready for a transport to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the transmitter's base URL (e.g. `/streams`).
    pub path: String,
    /// Query parameters, appended in order.
    pub query: Vec<(String, String)>,
    /// JSON request body, if the endpoint takes one.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// A GET request for `path` with the given query parameters.
    pub fn get(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query,
            body: None,
        }
    }

    /// A POST request for `path` carrying a JSON body.
    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }
}

/// The raw outcome of an executed request.
///
/// Carries every HTTP status, success or not — the dispatcher converts
/// non-2xx responses into [`SsfError::Http`] so stub transports in tests can
/// exercise the same path.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body as UTF-8 text, lossy for diagnostics.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Transport abstraction for SSF communication.
///
/// Implementations handle the low-level exchange: building the URL,
/// injecting authentication headers, sending the request, and collecting the
/// response. Only connection-level faults are errors here; HTTP failure
/// statuses come back as an [`ApiResponse`] for the dispatcher to interpret.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request and return the raw response.
    async fn execute(&self, request: ApiRequest) -> SsfResult<ApiResponse>;
}

/// Configuration for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Request timeout. Defaults to 60 seconds.
    pub timeout: Duration,
    /// Additional HTTP headers to include on every request.
    pub headers: HashMap<String, String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            headers: HashMap::new(),
        }
    }
}

/// JSON-over-HTTPS transport using `reqwest`.
///
/// Sends requests against `{base_url}{path}` with `Content-Type:
/// application/json` and, when a bearer token is configured, an
/// `Authorization: Bearer ...` header on every call.
///
/// # Example
///
/// ```no_run
/// use ssf_rs::client::HttpTransport;
///
/// let transport = HttpTransport::new("https://transmitter.example.com")
///     .with_bearer_token("f843a2ce-4e94-48d4-aed6-c1617024b245");
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpTransport {
    /// Create a new transport targeting the given transmitter base URL.
    ///
    /// Uses default configuration (60s timeout, no extra headers).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(base_url, TransportConfig::default())
    }

    /// Create a new transport with custom configuration.
    pub fn with_config(base_url: impl Into<String>, config: TransportConfig) -> Self {
        let mut default_headers = HeaderMap::new();
        for (key, value) in &config.headers {
            if let (Ok(name), Ok(val)) = (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                default_headers.insert(name, val);
            }
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into(),
            bearer_token: None,
        }
    }

    /// Create a new transport with an existing `reqwest::Client`.
    ///
    /// Useful when you want to share a connection pool or configure TLS
    /// settings externally.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            bearer_token: None,
        }
    }

    /// Set the bearer token sent in the `Authorization` header
    /// (builder-style).
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Create a transport with a custom timeout (builder-style).
    pub fn with_timeout(self, timeout: Duration) -> Self {
        let config = TransportConfig {
            timeout,
            ..TransportConfig::default()
        };
        let token = self.bearer_token.clone();
        let mut transport = Self::with_config(self.base_url, config);
        transport.bearer_token = token;
        transport
    }

    /// Returns the base URL this transport sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, request: &ApiRequest) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}{}", base, request.path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> SsfResult<ApiResponse> {
        let url = self.build_url(&request);
        tracing::debug!(method = ?request.method, %url, "executing SSF request");

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &self.bearer_token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                SsfError::timeout(format!("request timed out: {e}"))
            } else if e.is_connect() {
                SsfError::transport(format!("connection failed: {e}"))
            } else {
                SsfError::transport(format!("HTTP request failed: {e}"))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| SsfError::transport(format!("failed to read response body: {e}")))?;

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}
