//! Create Stream — register a poll-delivery event stream.
//!
//! Run against a transmitter:
//! ```sh
//! SSF_TRANSMITTER_URL=https://transmitter.example.com \
//! SSF_AUTH_TOKEN=... \
//! cargo run --example create_stream
//! ```

use ssf_rs::builders::CreateStreamRequestBuilder;
use ssf_rs::client::{ConfigResolver, SsfClient};
use ssf_rs::events::EventType;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url =
        std::env::var("SSF_TRANSMITTER_URL").unwrap_or_else(|_| "https://ssf.caep.dev".into());
    let token = std::env::var("SSF_AUTH_TOKEN").unwrap_or_default();

    // Discover the transmitter before registering a stream with it.
    let config = ConfigResolver::new().resolve(&base_url).await?;
    println!("Transmitter issuer: {}", config.issuer);

    let client = SsfClient::builder(&base_url)
        .with_bearer_token(token)
        .build();

    let request = CreateStreamRequestBuilder::new()
        .with_event_type(EventType::SessionRevoked)
        .with_event_type(EventType::CredentialChange)
        .with_description("demo receiver stream")
        .build();

    let stream = client.create_stream(request).await?;

    println!(
        "Created stream: {}",
        stream.stream_id.as_deref().unwrap_or("(no id)")
    );
    println!("Issuer:   {}", stream.iss.as_deref().unwrap_or("-"));
    println!("Audience: {}", stream.aud.as_deref().unwrap_or("-"));
    if let Some(delivered) = &stream.events_delivered {
        println!("Events the transmitter will deliver:");
        for uri in delivered {
            println!("  - {uri}");
        }
    }

    Ok(())
}
