use std::io;

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
        .unwrap_or_else(|_| "Hello from the pushover example.".to_owned());

    let client = PushoverClient::new(ApiToken::new(token)?);

    let mut message = Message::new(user, text);
    message.title = "pushover example".to_owned();

    client.send(&message).await?;
    println!("message accepted");

    Ok(())
}
