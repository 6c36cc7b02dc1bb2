//! slackhook: a minimal Slack incoming-webhook client.
//!
//! Build a [`Message`](message::Message), hand it to a
//! [`WebhookClient`](webhook::WebhookClient), get back `Ok(())` or a
//! [`PostError`](webhook::PostError). One call, one POST, no retries.
//!
//! ```
//! use slackhook::message::{Attachment, Message};
//! use slackhook::webhook::{Destination, WebhookClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // An unset URL disables posting; `slack://mock` skips the network.
//! let url = std::env::var("SLACK_WEBHOOK_URL").unwrap_or_default();
//! let client = WebhookClient::new(url.parse::<Destination>()?);
//!
//! let msg = Message::new("Nightly backup complete")
//!     .with_attachment(Attachment::new("42 GiB in 7m").with_color("good"));
//! client.post(&msg).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod message;
pub mod webhook;
