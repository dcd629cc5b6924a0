//! Transmitter configuration discovery.
//!
//! Implements the well-known URI convention for discovering a transmitter's
//! SSF configuration metadata. The metadata names the endpoints the receiver
//! needs (stream configuration, status) along with the issuer, JWKS URI, and
//! supported delivery methods.

use crate::error::{SsfError, SsfResult};
use crate::types::TransmitterConfig;

/// Well-known path for SSF transmitter configuration metadata.
pub const SSF_CONFIGURATION_PATH: &str = "/.well-known/ssf-configuration";

/// Resolves [`TransmitterConfig`]s from transmitter base URLs.
///
/// Fetches `{base_url}/.well-known/ssf-configuration` and deserializes the
/// response into a [`TransmitterConfig`].
///
/// # Example
///
/// ```no_run
/// use ssf_rs::client::ConfigResolver;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = ConfigResolver::new();
/// let config = resolver.resolve("https://transmitter.example.com").await?;
/// println!("Issuer: {}", config.issuer);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    client: reqwest::Client,
    /// Override the default metadata path. If `None`, uses
    /// [`SSF_CONFIGURATION_PATH`].
    config_path: Option<String>,
}

impl ConfigResolver {
    /// Create a new resolver with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            config_path: None,
        }
    }

    /// Create a new resolver with an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            config_path: None,
        }
    }

    /// Override the metadata path (instead of `/.well-known/ssf-configuration`).
    ///
    /// Transmitters serving several issuers append the issuer's path to the
    /// well-known path; pass the full path here in that case.
    pub fn with_config_path(mut self, path: impl Into<String>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Fetch and parse the configuration metadata from the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SsfError::Transport`] on connection failures,
    /// [`SsfError::Http`] on non-2xx responses, and [`SsfError::InvalidJson`]
    /// on parse failures.
    pub async fn resolve(&self, base_url: &str) -> SsfResult<TransmitterConfig> {
        let base = base_url.trim_end_matches('/');
        let path = match self.config_path.as_deref() {
            Some(path) if path.starts_with('/') => path.to_string(),
            Some(path) => format!("/{path}"),
            None => SSF_CONFIGURATION_PATH.to_string(),
        };

        let url = format!("{base}{path}");

        tracing::debug!("resolving transmitter configuration from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    SsfError::transport(format!("failed to connect to transmitter at {url}: {e}"))
                } else if e.is_timeout() {
                    SsfError::timeout(format!("timed out fetching configuration from {url}: {e}"))
                } else {
                    SsfError::transport(format!("failed to fetch configuration from {url}: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SsfError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            SsfError::transport(format!("failed to read configuration response: {e}"))
        })?;

        let config: TransmitterConfig = serde_json::from_slice(&bytes).map_err(|e| {
            SsfError::invalid_json(format!("failed to parse transmitter configuration: {e}"))
        })?;

        tracing::debug!("resolved transmitter configuration for {}", config.issuer);

        Ok(config)
    }

    /// Extract the stream configuration endpoint from transmitter metadata.
    ///
    /// Returns an error when the transmitter does not advertise one — a
    /// receiver cannot create a stream without it.
    pub fn configuration_endpoint(config: &TransmitterConfig) -> SsfResult<&str> {
        config.configuration_endpoint.as_deref().ok_or_else(|| {
            SsfError::config(format!(
                "transmitter '{}' does not advertise a configuration endpoint",
                config.issuer
            ))
        })
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}
