//! Tests for HTTP request/response types and body streams.

use super::{BufferedBody, EmptyBody, HttpRequest, HttpResponse, ResponseBody};

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let url = url::Url::parse("https://example.com/api").unwrap();
        let req = HttpRequest::new(http::Method::PUT, url.clone());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, url);
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn post_creates_post_request() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::post(url);

        assert_eq!(req.method, http::Method::POST);
    }

    #[test]
    fn with_body_sets_body() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let body = br#"{"text":"hi"}"#.to_vec();
        let req = HttpRequest::post(url).with_body(body.clone());

        assert_eq!(req.body, Some(body));
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::post(url)
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/html"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }
}

mod bodies {
    use super::*;

    #[tokio::test]
    async fn buffered_body_yields_one_chunk_then_ends() {
        let mut body = BufferedBody::new(b"ok".to_vec());

        let first = body.chunk().await.unwrap();
        let second = body.chunk().await.unwrap();

        assert_eq!(first.as_deref(), Some(&b"ok"[..]));
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn empty_buffered_body_ends_immediately() {
        let mut body = BufferedBody::new(Vec::new());

        assert!(body.chunk().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_body_always_ends() {
        let mut body = EmptyBody;

        assert!(body.chunk().await.unwrap().is_none());
        assert!(body.chunk().await.unwrap().is_none());
    }

    #[test]
    fn response_new_keeps_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert("x-slack-req-id", http::HeaderValue::from_static("abc"));

        let response = HttpResponse::new(http::StatusCode::NOT_FOUND, headers, EmptyBody);

        assert_eq!(response.status, http::StatusCode::NOT_FOUND);
        assert_eq!(response.headers.get("x-slack-req-id").unwrap(), "abc");
    }
}
