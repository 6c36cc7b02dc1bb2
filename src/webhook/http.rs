//! HTTP request/response types and transport traits.

use std::future::Future;

use bytes::Bytes;

use super::HttpError;

/// An HTTP request to be sent.
///
/// This is a value type that can be constructed and passed to any
/// [`HttpClient`] implementation. It uses standard `http` crate types
/// for method and headers, ensuring compatibility with the broader ecosystem.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a new HTTP request with the given method and URL.
    ///
    /// Headers are initialized to an empty map and body is `None`.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header to the request.
    ///
    /// If the header name already exists, the value is appended.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// An HTTP response whose body has not been read yet.
///
/// The body is a [`ResponseBody`] stream so callers decide how much of it
/// to pull off the wire.
#[derive(Debug)]
pub struct HttpResponse<B = BufferedBody> {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Unread response body
    pub body: B,
}

impl<B> HttpResponse<B> {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: B) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }
}

/// A response body read chunk by chunk.
pub trait ResponseBody: Send {
    /// Returns the next chunk, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] if the stream breaks mid-read.
    fn chunk(&mut self) -> impl Future<Output = Result<Option<Bytes>, HttpError>> + Send;
}

/// A fully buffered body, yielded as a single chunk.
#[derive(Debug, Clone, Default)]
pub struct BufferedBody(Option<Bytes>);

impl BufferedBody {
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        let data = data.into();
        Self((!data.is_empty()).then_some(data))
    }
}

impl ResponseBody for BufferedBody {
    async fn chunk(&mut self) -> Result<Option<Bytes>, HttpError> {
        Ok(self.0.take())
    }
}

/// A body with no content.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyBody;

impl ResponseBody for EmptyBody {
    async fn chunk(&mut self) -> Result<Option<Bytes>, HttpError> {
        Ok(None)
    }
}

/// Trait for making HTTP requests.
///
/// # Design
///
/// This trait abstracts the HTTP client implementation, enabling:
/// - Dependency injection for testing with mock clients
/// - Sharing one connection pool, proxy, or timeout policy across clients
/// - Swapping HTTP libraries without changing calling code
///
/// # Example
///
/// ```
/// use slackhook::webhook::{EmptyBody, HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct AlwaysAccepted;
///
/// impl HttpClient for AlwaysAccepted {
///     type Body = EmptyBody;
///
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse<EmptyBody>, HttpError> {
///         Ok(HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), EmptyBody))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Body stream type handed back with each response.
    type Body: ResponseBody;

    /// Sends an HTTP request and returns the response with its body unread.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - Network connection fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - URL is invalid ([`HttpError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse<Self::Body>, HttpError>> + Send;
}

impl<C: HttpClient> HttpClient for std::sync::Arc<C> {
    type Body = C::Body;

    fn request(
        &self,
        req: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse<Self::Body>, HttpError>> + Send {
        (**self).request(req)
    }
}
