//! Production HTTP client implementation using reqwest.

use std::sync::OnceLock;

use bytes::Bytes;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse, ResponseBody};

/// Production HTTP client using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements
/// the [`HttpClient`] trait. It inherits reqwest's default configuration
/// including connection pooling. Cloning is cheap and clones share the pool.
///
/// # Example
///
/// ```no_run
/// use slackhook::webhook::{HttpClient, HttpRequest, ReqwestClient, ResponseBody};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://hooks.slack.com/services/T000/B000/XXXX")?;
/// let request = HttpRequest::post(url).with_body(br#"{"text":"hi"}"#.to_vec());
/// let mut response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// while let Some(chunk) = response.body.chunk().await? {
///     println!("{} bytes", chunk.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Returns a handle to the process-wide default client.
    ///
    /// Every handle shares one connection pool.
    #[must_use]
    pub fn shared() -> Self {
        static SHARED: OnceLock<ReqwestClient> = OnceLock::new();
        SHARED.get_or_init(Self::new).clone()
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, proxies, TLS).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Streaming body of a reqwest response.
#[derive(Debug)]
pub struct ReqwestBody(reqwest::Response);

impl ResponseBody for ReqwestBody {
    async fn chunk(&mut self) -> Result<Option<Bytes>, HttpError> {
        self.0.chunk().await.map_err(map_reqwest_error)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}

impl HttpClient for ReqwestClient {
    type Body = ReqwestBody;

    async fn request(&self, req: HttpRequest) -> Result<HttpResponse<ReqwestBody>, HttpError> {
        let mut builder = self
            .inner
            .request(req.method, req.url.as_str())
            .headers(req.headers);

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        let headers = response.headers().clone();

        Ok(HttpResponse::new(status, headers, ReqwestBody(response)))
    }
}
