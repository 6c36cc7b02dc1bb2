//! The webhook client: one message in, one POST out.

use http::header::{CONTENT_TYPE, HeaderValue};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::config::ConfigError;
use crate::message::Message;

use super::{
    Destination, HttpClient, HttpError, HttpRequest, MOCK_SENTINEL, MockTransport, NoopLogger,
    PostError, PostEvent, PostLogger, ReqwestClient, ResponseBody,
};

/// Default cap on how much of a response body is read and discarded (640 KiB).
///
/// Reading the body lets the transport return the connection to its pool;
/// anything past the cap is left unread.
pub const DEFAULT_DRAIN_LIMIT: usize = 640 * 1024;

/// Posts [`Message`]s to a single Slack incoming webhook.
///
/// Behavior depends on the [`Destination`]:
/// - [`Destination::Disabled`]: every post succeeds without doing anything
/// - [`Destination::Mock`]: the message is serialized and answered by an
///   internal [`MockTransport`]; the configured transport is never used
/// - [`Destination::Webhook`]: one POST per call through the transport `H`
///
/// The client holds no per-call state, so a single instance can serve
/// concurrent posts (share it behind an `Arc`). Changing the destination
/// requires `&mut self` and therefore cannot race with in-flight posts.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
/// - `L`: The post-event logger (defaults to [`NoopLogger`])
///
/// # Example
///
/// ```
/// use slackhook::message::Message;
/// use slackhook::webhook::{Destination, WebhookClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = WebhookClient::new("slack://mock".parse::<Destination>()?);
/// client.post(&Message::new("Hello")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WebhookClient<H = ReqwestClient, L = NoopLogger> {
    destination: Destination,
    transport: H,
    mock: MockTransport,
    logger: L,
    drain_limit: usize,
}

impl WebhookClient<ReqwestClient, NoopLogger> {
    /// Creates a client that uses the shared default [`ReqwestClient`].
    #[must_use]
    pub fn new(destination: Destination) -> Self {
        Self::with_transport(destination, ReqwestClient::shared())
    }
}

impl<H> WebhookClient<H, NoopLogger> {
    /// Creates a client with a caller-supplied transport.
    #[must_use]
    pub const fn with_transport(destination: Destination, transport: H) -> Self {
        Self {
            destination,
            transport,
            mock: MockTransport::new(),
            logger: NoopLogger,
            drain_limit: DEFAULT_DRAIN_LIMIT,
        }
    }
}

impl<H, L> WebhookClient<H, L> {
    /// Sets the logger that receives one [`PostEvent`] per attempted post.
    #[must_use]
    pub fn with_logger<L2>(self, logger: L2) -> WebhookClient<H, L2> {
        WebhookClient {
            destination: self.destination,
            transport: self.transport,
            mock: self.mock,
            logger,
            drain_limit: self.drain_limit,
        }
    }

    /// Sets how many response body bytes are drained before a post completes.
    #[must_use]
    pub const fn with_drain_limit(mut self, limit: usize) -> Self {
        self.drain_limit = limit;
        self
    }

    #[must_use]
    pub const fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Returns true unless the destination is disabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.destination.is_enabled()
    }

    #[must_use]
    pub const fn is_mock(&self) -> bool {
        self.destination.is_mock()
    }

    #[must_use]
    pub const fn drain_limit(&self) -> usize {
        self.drain_limit
    }

    #[must_use]
    pub const fn transport(&self) -> &H {
        &self.transport
    }

    /// The fixed-response transport that serves mock-mode posts.
    #[must_use]
    pub const fn mock_transport(&self) -> &MockTransport {
        &self.mock
    }

    /// Replaces the destination.
    ///
    /// Accepts the same strings as [`Destination::from_str`](std::str::FromStr):
    /// empty, the mock sentinel, or an `http`/`https` URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `s` is not a valid destination; the
    /// current destination is kept in that case.
    pub fn set_destination(&mut self, s: &str) -> Result<(), ConfigError> {
        self.destination = s.parse()?;
        Ok(())
    }
}

impl<H: HttpClient, L: PostLogger> WebhookClient<H, L> {
    /// Posts a message with no deadline.
    ///
    /// # Errors
    ///
    /// See [`WebhookClient::post_with_cancel`].
    pub async fn post(&self, msg: &Message) -> Result<(), PostError> {
        self.post_with_cancel(&CancellationToken::new(), msg).await
    }

    /// Posts a message, giving up as soon as `cancel` fires.
    ///
    /// Makes exactly one request (none when disabled) and never retries.
    /// Dropping the in-flight request on cancellation also drops its
    /// connection.
    ///
    /// # Errors
    ///
    /// - [`PostError::Serialization`] if the message cannot be encoded
    /// - [`PostError::Transport`] on network failure, timeout, or cancellation
    /// - [`PostError::Status`] if the response status is anything but `200`
    pub async fn post_with_cancel(
        &self,
        cancel: &CancellationToken,
        msg: &Message,
    ) -> Result<(), PostError> {
        let target = match &self.destination {
            Destination::Disabled => {
                tracing::trace!("Slack webhook not configured, skipping post");
                return Ok(());
            }
            Destination::Mock => None,
            Destination::Webhook(url) => Some(url),
        };

        let body = msg.to_json()?;

        if cancel.is_cancelled() {
            return Err(HttpError::Cancelled.into());
        }

        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(HttpError::Cancelled.into()),
            result = self.dispatch(target, body) => result,
        }
    }

    /// Routes the serialized body to the live or mock transport.
    async fn dispatch(&self, target: Option<&Url>, body: Vec<u8>) -> Result<(), PostError> {
        if let Some(url) = target {
            self.logger.log(&PostEvent::live());
            return exchange(&self.transport, json_request(url.clone(), body), self.drain_limit)
                .await;
        }

        let payload = String::from_utf8_lossy(&body).into_owned();
        self.logger.log(&PostEvent::mock(&payload));

        let url = Url::parse(MOCK_SENTINEL).map_err(|e| HttpError::InvalidUrl(e.to_string()))?;
        exchange(&self.mock, json_request(url, body), self.drain_limit).await
    }
}

fn json_request(url: Url, body: Vec<u8>) -> HttpRequest {
    HttpRequest::post(url)
        .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .with_body(body)
}

/// Executes a single request and classifies the outcome.
///
/// A non-200 status takes precedence over a failure while draining.
async fn exchange<C: HttpClient>(
    client: &C,
    request: HttpRequest,
    drain_limit: usize,
) -> Result<(), PostError> {
    let mut response = client.request(request).await?;

    let drained = drain(&mut response.body, drain_limit).await;
    if let Ok(bytes) = &drained {
        tracing::trace!(bytes, status = %response.status, "drained response body");
    }

    if response.status != http::StatusCode::OK {
        return Err(PostError::Status {
            status: response.status,
        });
    }

    drained?;
    Ok(())
}

/// Reads and discards body chunks until end of stream or `limit` bytes.
///
/// The chunk that crosses `limit` is read whole.
async fn drain<B: ResponseBody>(body: &mut B, limit: usize) -> Result<usize, HttpError> {
    let mut total = 0;
    while total < limit {
        match body.chunk().await? {
            Some(chunk) => total += chunk.len(),
            None => break,
        }
    }
    Ok(total)
}
