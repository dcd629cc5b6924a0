//! Get Status — read the current status of a stream.
//!
//! ```sh
//! SSF_TRANSMITTER_URL=https://transmitter.example.com \
//! SSF_AUTH_TOKEN=... \
//! SSF_STREAM_ID=s-123 \
//! cargo run --example get_status
//! ```

use ssf_rs::client::SsfClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url =
        std::env::var("SSF_TRANSMITTER_URL").unwrap_or_else(|_| "https://ssf.caep.dev".into());
    let token = std::env::var("SSF_AUTH_TOKEN").unwrap_or_default();
    let stream_id = std::env::var("SSF_STREAM_ID").unwrap_or_else(|_| "stream-example".into());

    let client = SsfClient::builder(&base_url)
        .with_bearer_token(token)
        .build();

    let status = client.get_status(&stream_id).await?;

    println!("Stream {stream_id} is {}", status.status);
    if let Some(reason) = &status.reason {
        println!("Reason: {reason}");
    }

    Ok(())
}
