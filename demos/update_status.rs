//! Update Status — pause a stream, then re-enable it.
//!
//! ```sh
//! SSF_TRANSMITTER_URL=https://transmitter.example.com \
//! SSF_AUTH_TOKEN=... \
//! SSF_STREAM_ID=s-123 \
//! cargo run --example update_status
//! ```

use ssf_rs::client::SsfClient;
use ssf_rs::types::{StreamStatus, UpdateStatusRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url =
        std::env::var("SSF_TRANSMITTER_URL").unwrap_or_else(|_| "https://ssf.caep.dev".into());
    let token = std::env::var("SSF_AUTH_TOKEN").unwrap_or_default();
    let stream_id = std::env::var("SSF_STREAM_ID").unwrap_or_else(|_| "stream-example".into());

    let client = SsfClient::builder(&base_url)
        .with_bearer_token(token)
        .build();

    // A full update request carries an optional reason.
    let mut pause = UpdateStatusRequest::new(&stream_id, StreamStatus::Paused);
    pause.reason = Some("maintenance window".into());
    let status = client.update_status(pause).await?;
    println!("Stream is now {}", status.status);

    // The convenience wrappers cover the plain transitions.
    let status = client.enable_stream(&stream_id).await?;
    println!("Stream is now {}", status.status);

    Ok(())
}
