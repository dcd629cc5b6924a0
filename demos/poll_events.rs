//! Poll Events — fetch available events and print them.
//!
//! ```sh
//! SSF_TRANSMITTER_URL=https://transmitter.example.com \
//! SSF_AUTH_TOKEN=... \
//! SSF_STREAM_ID=s-123 \
//! cargo run --example poll_events
//! ```

use ssf_rs::client::SsfClient;
use ssf_rs::types::PollEventsRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let base_url =
        std::env::var("SSF_TRANSMITTER_URL").unwrap_or_else(|_| "https://ssf.caep.dev".into());
    let token = std::env::var("SSF_AUTH_TOKEN").unwrap_or_default();
    let stream_id = std::env::var("SSF_STREAM_ID").unwrap_or_else(|_| "stream-example".into());

    let client = SsfClient::builder(&base_url)
        .with_bearer_token(token)
        .build();

    let response = client
        .poll_events(PollEventsRequest::new(&stream_id, 10))
        .await?;

    println!("Number of events: {}", response.len());
    for event in response.events()? {
        println!("--------EVENT-------");
        println!("Type:      {:?}", event.event_type);
        println!("Subject:   {}", event.subject);
        println!("Timestamp: {:?}", event.occurred_at());
        println!("--------------------");
    }

    if response.more_available == Some(true) {
        println!("More events are available; poll again to fetch them.");
    }

    // Acknowledge what we received so the transmitter stops redelivering.
    if !response.is_empty() {
        let mut ack = PollEventsRequest::new(&stream_id, 0);
        for jti in response.jtis() {
            ack.acknowledge(jti);
        }
        client.poll_events(ack).await?;
    }

    Ok(())
}
