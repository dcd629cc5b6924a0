//! SSF client — manage event streams on a remote transmitter.
//!
//! - [`SsfClient`] — high-level client with one typed method per
//!   stream-management endpoint (create stream, get/update status, poll
//!   events, remove subject)
//! - [`ConfigResolver`] — discover transmitter metadata via the well-known
//!   URL convention
//! - [`Transport`] / [`HttpTransport`] — pluggable transport layer
//!
//! # Quick Start
//!
//! ```no_run
//! use ssf_rs::client::SsfClient;
//! use ssf_rs::types::{CreateStreamRequest, PollEventsRequest};
//! use ssf_rs::events::EventType;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SsfClient::builder("https://transmitter.example.com")
//!     .with_bearer_token("f843a2ce-4e94-48d4-aed6-c1617024b245")
//!     .build();
//!
//! // Create a poll-delivery stream:
//! let stream = client
//!     .create_stream(CreateStreamRequest::poll(vec![
//!         EventType::SessionRevoked.uri().to_string(),
//!     ]))
//!     .await?;
//! let stream_id = stream.stream_id.as_deref().unwrap_or_default();
//!
//! // Poll for events:
//! let polled = client
//!     .poll_events(PollEventsRequest::new(stream_id, 10))
//!     .await?;
//! for event in polled.events()? {
//!     println!("{:?} at {:?}", event.event_type, event.occurred_at());
//! }
//! # Ok(())
//! # }
//! ```

mod config_resolver;
mod ssf_client;
mod transport;

pub use config_resolver::{ConfigResolver, SSF_CONFIGURATION_PATH};
pub use ssf_client::{
    SsfClient, POLL_PATH, REMOVE_SUBJECT_PATH, STATUS_PATH, STREAMS_PATH,
};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport, TransportConfig};
