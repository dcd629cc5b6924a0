//! SSF error types — one failure taxonomy for every dispatcher call.
//!
//! The SDK performs no local recovery: every transport fault, non-2xx
//! response, and undecodable body surfaces to the caller as an [`SsfError`]
//! carrying the raw diagnostics. Callers decide whether to retry or abort.

/// Unified error type for all SSF receiver operations.
///
/// Wraps the two failure classes a dispatcher call can hit: transport-level
/// faults (connection refused, timeout, TLS) and protocol-level failures
/// (non-success HTTP status, body that does not decode into the expected
/// response model).
#[derive(Debug, Clone, thiserror::Error)]
pub enum SsfError {
    /// Transport-level error (connection failed, request failed, TLS, etc.).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request timed out.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Non-success HTTP response, with status code and raw body.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// Invalid JSON received from the transmitter (parse or deserialization
    /// failure), or an undecodable Security Event Token payload.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Client construction or configuration error (bad base URL, missing
    /// endpoint in transmitter metadata, invalid header value).
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience result type for SSF operations.
pub type SsfResult<T> = Result<T, SsfError>;

impl SsfError {
    /// Create a `Transport` error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create a `Timeout` error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    /// Create an `Http` error from a status code and body text.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Create an `InvalidJson` error.
    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::InvalidJson(message.into())
    }

    /// Create a `Config` error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The HTTP status code, if this is an `Http` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            SsfError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The raw response body, if this is an `Http` error.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            SsfError::Http { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Whether this error came from the transport layer rather than the
    /// transmitter (connection failures and timeouts).
    pub fn is_transport(&self) -> bool {
        matches!(self, SsfError::Transport(_) | SsfError::Timeout(_))
    }
}

impl From<serde_json::Error> for SsfError {
    fn from(err: serde_json::Error) -> Self {
        SsfError::InvalidJson(err.to_string())
    }
}
