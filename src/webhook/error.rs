//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for transport operations.
///
/// Describes what went wrong at the HTTP layer without dictating
/// recovery strategy. Nothing in this crate retries on these errors;
/// that decision belongs to the caller.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and errors while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The request URL was rejected by the transport.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The caller's cancellation token fired before the exchange finished.
    #[error("Request cancelled")]
    Cancelled,
}

/// Error returned by [`WebhookClient::post`](super::WebhookClient::post).
///
/// Every variant renders with a common prefix so failures are easy to
/// spot in aggregated logs; the underlying cause stays reachable through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum PostError {
    /// The message could not be encoded as JSON.
    #[error("problem sending message to Slack: could not encode message: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request never produced a usable response.
    #[error("problem sending message to Slack: {0}")]
    Transport(#[from] HttpError),

    /// Slack answered with something other than `200 OK`.
    #[error("problem sending message to Slack: unexpected status: {}", status_line(*status))]
    Status {
        /// Status code returned by the server
        status: http::StatusCode,
    },
}

impl PostError {
    /// Returns the HTTP status for [`PostError::Status`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the post was abandoned because of cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Transport(HttpError::Cancelled))
    }
}

/// Formats a status as `404 Not Found`, or just `599` for unknown codes.
fn status_line(status: http::StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}
