use std::io;
use std::time::Duration;

use pushover::{ApiToken, Message, PushoverClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("PUSHOVER_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PUSHOVER_TOKEN environment variable is required",
        )
    })?;
    let user = std::env::var("PUSHOVER_USER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PUSHOVER_USER environment variable is required",
        )
    })?;
    let text = std::env::var("PUSHOVER_MESSAGE")
        .unwrap_or_else(|_| "Disk almost full on db-1.".to_owned());

    let client = PushoverClient::builder(ApiToken::new(token)?)
        .timeout(Duration::from_secs(10))
        .build()?;

    let mut message = Message::new(user, text);
    message.title = "on-call alert".to_owned();
    message.sound = "siren".to_owned();
    message.priority = 2;
    message.retry = 60;
    message.expire = 3_600;

    client.send(&message).await?;
    println!("emergency message accepted; the API will retry every 60s for an hour");

    Ok(())
}
