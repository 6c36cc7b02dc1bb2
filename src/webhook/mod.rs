//! Webhook layer for delivering messages to Slack.
//!
//! This module provides types and traits for:
//! - Choosing where messages go ([`Destination`])
//! - Posting messages ([`WebhookClient`])
//! - Abstracting HTTP transports ([`HttpClient`], [`ResponseBody`])
//! - Production and mock transports ([`ReqwestClient`], [`MockTransport`])
//! - Per-post logging hooks ([`PostLogger`])

mod client;
mod destination;
mod error;
mod http;
mod log;
mod mock;
mod sender;

#[cfg(test)]
mod destination_tests;
#[cfg(test)]
mod http_tests;

pub use client::{ReqwestBody, ReqwestClient};
pub use destination::{Destination, MOCK_SENTINEL};
pub use error::{HttpError, PostError};
pub use self::http::{BufferedBody, EmptyBody, HttpClient, HttpRequest, HttpResponse, ResponseBody};
pub use log::{NoopLogger, PostEvent, PostLogger, PostMode, TracingLogger};
pub use mock::MockTransport;
pub use sender::{DEFAULT_DRAIN_LIMIT, WebhookClient};
