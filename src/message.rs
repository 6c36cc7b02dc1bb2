//! Message payload types for Slack incoming webhooks.
//!
//! These are plain value types: build one, hand it to
//! [`WebhookClient::post`](crate::webhook::WebhookClient::post), done.
//! The serde attributes define the exact JSON shape Slack expects;
//! unset or empty optional attributes are left out of the body entirely.
//!
//! # Example
//!
//! ```
//! use slackhook::message::{Attachment, Field, Message};
//!
//! let msg = Message::new("Deploy finished").with_attachment(
//!     Attachment::new("api v1.4.2 deployed")
//!         .with_color("good")
//!         .with_field(Field::new("Environment", "production").short()),
//! );
//! assert_eq!(msg.attachments.len(), 1);
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::webhook::PostError;

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;

/// The JSON object posted to a Slack webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Plain message body.
    pub text: String,

    /// Rich formatting blocks, rendered in order below the text.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Creates a message with the given text and no attachments.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachments: Vec::new(),
        }
    }

    /// Appends an attachment.
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Serializes the message into its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<Vec<u8>, PostError> {
        serde_json::to_vec(self).map_err(PostError::Serialization)
    }
}

/// A rich-content block within a message.
///
/// Only `fallback` is required by Slack; it is shown by clients that
/// cannot render attachments (notifications, IRC bridges).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Text shown above the attachment block.
    #[serde(skip_serializing_if = "is_blank")]
    pub pretext: Option<String>,

    /// Plain-text summary of the attachment.
    pub fallback: String,

    /// Color bar: `good`, `warning`, `danger`, or a hex value like `#36a64f`.
    #[serde(skip_serializing_if = "is_blank")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "is_blank")]
    pub title: Option<String>,

    /// Makes `title` a hyperlink.
    #[serde(skip_serializing_if = "is_blank")]
    pub title_link: Option<String>,

    #[serde(skip_serializing_if = "is_blank")]
    pub text: Option<String>,

    /// Seconds since the Unix epoch, shown in the attachment footer; 0 means unset.
    #[serde(rename = "ts", skip_serializing_if = "is_unset_ts")]
    pub timestamp: Option<i64>,

    /// Label/value pairs rendered as a table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl Attachment {
    /// Creates an attachment with only the required fallback text.
    #[must_use]
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_pretext(mut self, pretext: impl Into<String>) -> Self {
        self.pretext = Some(pretext.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_title_link(mut self, link: impl Into<String>) -> Self {
        self.title_link = Some(link.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the footer timestamp in raw epoch seconds.
    #[must_use]
    pub const fn with_ts(mut self, secs: i64) -> Self {
        self.timestamp = Some(secs);
        self
    }

    /// Sets the footer timestamp from a [`SystemTime`].
    ///
    /// Pre-epoch times clamp to 0.
    #[must_use]
    pub fn with_timestamp(self, time: SystemTime) -> Self {
        let secs = time
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX));
        self.with_ts(secs)
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

// Empty strings and a zero timestamp are omitted like unset values.
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

const fn is_unset_ts(value: &Option<i64>) -> bool {
    matches!(value, None | Some(0))
}

/// A label/value pair inside an attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Field {
    pub title: String,
    pub value: String,
    /// Hint that the field is narrow enough to sit beside another one.
    pub short: bool,
}

impl Field {
    /// Creates a full-width field.
    #[must_use]
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: false,
        }
    }

    /// Marks the field as short.
    #[must_use]
    pub const fn short(mut self) -> Self {
        self.short = true;
        self
    }
}
