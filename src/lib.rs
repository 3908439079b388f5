//! Typed Rust client for the Pushover message API.
//!
//! The crate is split into a domain layer (the message record, the field
//! schema it is checked against, and the validation/encoding engine), a
//! transport layer for wire-format details, and a small client layer
//! orchestrating the HTTP round trip.
//!
//! ```rust,no_run
//! use pushover::{ApiToken, Message, PushoverClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pushover::PushoverError> {
//!     let token = ApiToken::new("azGDORePK8gMaC0QOYAMyEEuzJnyUi")?;
//!     let client = PushoverClient::new(token);
//!
//!     let mut message = Message::new("uQiRzpo4DXghDmr9QzzfQu27cmVRsG", "backup finished");
//!     message.title = "nightly cron".to_owned();
//!     client.send(&message).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{PushoverClient, PushoverClientBuilder, PushoverError};
pub use domain::{ApiToken, EncodedForm, Message, ValidationError, validate_and_encode};
