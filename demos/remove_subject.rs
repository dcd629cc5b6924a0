//! Remove Subject — stop receiving events about one subject.
//!
//! ```sh
//! SSF_TRANSMITTER_URL=https://transmitter.example.com \
//! SSF_AUTH_TOKEN=... \
//! SSF_STREAM_ID=s-123 \
//! cargo run --example remove_subject
//! ```

use ssf_rs::client::SsfClient;
use ssf_rs::types::{RemoveSubjectRequest, Subject};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url =
        std::env::var("SSF_TRANSMITTER_URL").unwrap_or_else(|_| "https://ssf.caep.dev".into());
    let token = std::env::var("SSF_AUTH_TOKEN").unwrap_or_default();
    let stream_id = std::env::var("SSF_STREAM_ID").unwrap_or_else(|_| "stream-example".into());

    let client = SsfClient::builder(&base_url)
        .with_bearer_token(token)
        .build();

    let request = RemoveSubjectRequest::new(&stream_id, Subject::email("a@b.com"));
    client.remove_subject(request).await?;

    println!("Subject removed from stream {stream_id}");

    Ok(())
}
