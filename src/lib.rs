//! # ssf-rs — Rust SDK for the OpenID Shared Signals Framework (SSF)
//!
//! This crate is a typed client for an SSF / CAEP transmitter's
//! stream-management HTTP API: create event streams, read and update stream
//! status, remove subjects, and poll for Security Event Tokens.
//!
//! ## Overview
//!
//! An SSF transmitter delivers security events (session revoked, credential
//! change, device compliance change, ...) to receivers over streams. This
//! SDK provides:
//!
//! - **Complete request/response models** for the stream-management API
//!   ([`types`]), with the snake_case wire names transmitters speak
//! - **Client** with one typed method per endpoint ([`client::SsfClient`])
//! - **Transmitter discovery** via `/.well-known/ssf-configuration`
//!   ([`client::ConfigResolver`])
//! - **SET decoding** into typed CAEP/SSF events ([`events`])
//! - **Ergonomic builders** ([`CreateStreamRequestBuilder`], [`ClientBuilder`])
//!
//! ## Feature flags
//!
//! | Feature  | Default | Description |
//! |----------|---------|-------------|
//! | `client` | yes     | reqwest-backed HTTP transport and client |
//!
//! ## Quick Start
//!
//! ```no_run
//! use ssf_rs::builders::CreateStreamRequestBuilder;
//! use ssf_rs::client::SsfClient;
//! use ssf_rs::events::EventType;
//! use ssf_rs::types::PollEventsRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SsfClient::builder("https://transmitter.example.com")
//!         .with_bearer_token("f843a2ce-4e94-48d4-aed6-c1617024b245")
//!         .build();
//!
//!     // Register a poll-delivery stream for session-revoked events.
//!     let stream = client
//!         .create_stream(
//!             CreateStreamRequestBuilder::new()
//!                 .with_event_type(EventType::SessionRevoked)
//!                 .build(),
//!         )
//!         .await?;
//!
//!     let stream_id = stream.stream_id.as_deref().unwrap_or_default();
//!     println!("created stream {stream_id}");
//!
//!     // Fetch available events and inspect them.
//!     let polled = client
//!         .poll_events(PollEventsRequest::new(stream_id, 10))
//!         .await?;
//!     for event in polled.events()? {
//!         println!("{:?}: {:?}", event.event_type, event.subject);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Every dispatcher call returns [`error::SsfResult`]. There is exactly one
//! failure taxonomy at this layer, [`error::SsfError`]: transport faults,
//! timeouts, non-2xx HTTP responses (status code and raw body attached), and
//! undecodable bodies. The SDK never retries and never swallows a failure —
//! callers branch on the error and decide.
//!
//! ## Architecture
//!
//! - [`client::SsfClient`] — one method per endpoint, stateless across calls
//! - [`client::Transport`] — injected transport trait; [`client::HttpTransport`]
//!   is the reqwest binding and owns base URL, bearer token, and timeout
//! - [`types`] — plain serde models with structural equality; optional
//!   fields round-trip as omitted, list helpers initialize on first append
//! - [`events`] — [`events::SecurityEventToken`] payload decoding (no
//!   signature verification) and typed [`events::SsfEvent`]s
//! - [`error::SsfError`] — the single failure type
//!
//! ## Examples
//!
//! See the `demos/` directory for complete, runnable examples, one per
//! endpoint: `create_stream`, `get_status`, `update_status`, `poll_events`,
//! and `remove_subject`.

pub mod builders;
pub mod error;
pub mod events;
pub mod types;

#[cfg(feature = "client")]
pub mod client;

/// Prelude module that re-exports commonly used types and traits.
///
/// Import this module with `use ssf_rs::prelude::*;` to get access to the
/// most frequently used types without having to import them individually.
pub mod prelude {
    // Core types
    pub use crate::types::{
        CreateStreamRequest, CreateStreamResponse, Delivery, PollEventsRequest,
        PollEventsResponse, RemoveSubjectRequest, StatusResponse, StreamStatus, Subject,
        TransmitterConfig, UpdateStatusRequest,
    };

    // Events
    pub use crate::events::{EventType, SecurityEventToken, SsfEvent, SubjectFormat};

    // Error types
    pub use crate::error::{SsfError, SsfResult};

    // Builders
    pub use crate::builders::CreateStreamRequestBuilder;

    #[cfg(feature = "client")]
    pub use crate::builders::ClientBuilder;

    #[cfg(feature = "client")]
    pub use crate::client::{ConfigResolver, SsfClient, Transport};
}

// Re-export core types at crate root for convenience.
pub use builders::CreateStreamRequestBuilder;
pub use error::{SsfError, SsfResult};
pub use types::*;

#[cfg(feature = "client")]
pub use builders::ClientBuilder;

#[cfg(feature = "client")]
pub use client::SsfClient;
