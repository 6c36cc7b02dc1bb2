//! Per-post logging hook.
//!
//! [`WebhookClient`](super::WebhookClient) reports each attempted post to a
//! [`PostLogger`]. The default [`NoopLogger`] discards the report;
//! [`TracingLogger`] forwards it to `tracing` as structured fields.

use std::collections::BTreeMap;

/// Which transport served a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostMode {
    /// The fixed-response mock transport.
    Mock,
    /// The configured HTTP transport.
    Live,
}

impl PostMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Live => "live",
        }
    }
}

/// What a single post attempt looked like, reported before the request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostEvent<'a> {
    pub mode: PostMode,
    /// Serialized body; only present in mock mode so real payloads stay
    /// out of production logs.
    pub payload: Option<&'a str>,
}

impl<'a> PostEvent<'a> {
    #[must_use]
    pub const fn mock(payload: &'a str) -> Self {
        Self {
            mode: PostMode::Mock,
            payload: Some(payload),
        }
    }

    #[must_use]
    pub const fn live() -> Self {
        Self {
            mode: PostMode::Live,
            payload: None,
        }
    }

    /// The event as named fields, in stable order.
    #[must_use]
    pub fn fields(&self) -> BTreeMap<&'static str, String> {
        let mut fields = BTreeMap::new();
        fields.insert("mock", self.is_mock().to_string());
        if let Some(payload) = self.payload {
            fields.insert("payload", payload.to_string());
        }
        fields
    }

    #[must_use]
    pub const fn is_mock(&self) -> bool {
        matches!(self.mode, PostMode::Mock)
    }
}

/// Receiver for post events.
pub trait PostLogger: Send + Sync {
    /// Called once per attempted post, before the request goes out.
    fn log(&self, event: &PostEvent<'_>);
}

/// Logger that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl PostLogger for NoopLogger {
    fn log(&self, _event: &PostEvent<'_>) {}
}

/// Logger that emits a `tracing` debug event per post.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl PostLogger for TracingLogger {
    fn log(&self, event: &PostEvent<'_>) {
        match event.payload {
            Some(payload) => tracing::debug!(
                mode = event.mode.as_str(),
                mock = event.is_mock(),
                payload,
                "posting message to Slack"
            ),
            None => tracing::debug!(
                mode = event.mode.as_str(),
                mock = event.is_mock(),
                "posting message to Slack"
            ),
        }
    }
}

impl<L: PostLogger> PostLogger for std::sync::Arc<L> {
    fn log(&self, event: &PostEvent<'_>) {
        (**self).log(event);
    }
}
