//! Fixed-response transport used in mock mode.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{EmptyBody, HttpClient, HttpError, HttpRequest, HttpResponse};

/// Transport that answers every request with `200 OK` and an empty body.
///
/// Substituted automatically when a client's destination is
/// [`Destination::Mock`](super::Destination::Mock), so the full
/// serialization path runs without contacting Slack.
#[derive(Debug, Default)]
pub struct MockTransport {
    calls: AtomicUsize,
}

impl MockTransport {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of requests answered so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl HttpClient for MockTransport {
    type Body = EmptyBody;

    async fn request(&self, _req: HttpRequest) -> Result<HttpResponse<EmptyBody>, HttpError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            EmptyBody,
        ))
    }
}
