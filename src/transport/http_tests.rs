//! Tests for HTTP request/response value types.

use super::{HttpRequest, HttpResponse};

fn test_url() -> url::Url {
    url::Url::parse("https://api.pearl.com/api/v1/webhook").unwrap()
}

mod request {
    use super::*;

    #[test]
    fn new_initializes_empty_headers_and_no_body() {
        let request = HttpRequest::new(http::Method::POST, test_url());

        assert_eq!(request.method, http::Method::POST);
        assert!(request.headers.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn post_and_put_set_methods() {
        assert_eq!(HttpRequest::post(test_url()).method, http::Method::POST);
        assert_eq!(HttpRequest::put(test_url()).method, http::Method::PUT);
    }

    #[test]
    fn with_body_sets_body() {
        let request = HttpRequest::post(test_url()).with_body(b"payload".to_vec());

        assert_eq!(request.body.as_deref(), Some(b"payload".as_slice()));
    }

    #[test]
    fn with_header_appends_values() {
        let request = HttpRequest::post(test_url())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/plain"),
            );

        let values: Vec<_> = request.headers.get_all(http::header::ACCEPT).iter().collect();
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn clone_is_identical() {
        let request = HttpRequest::post(test_url()).with_body(b"x".to_vec());
        let cloned = request.clone();

        assert_eq!(request.method, cloned.method);
        assert_eq!(request.url, cloned.url);
        assert_eq!(request.body, cloned.body);
    }
}

mod response {
    use super::*;

    #[test]
    fn is_success_for_2xx_only() {
        for status in [http::StatusCode::OK, http::StatusCode::CREATED] {
            let response = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(response.is_success());
        }

        for status in [
            http::StatusCode::MOVED_PERMANENTLY,
            http::StatusCode::UNPROCESSABLE_ENTITY,
            http::StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let response = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(!response.is_success());
        }
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        let response = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            b"{\"ok\":true}".to_vec(),
        );

        assert_eq!(response.body_text(), Some("{\"ok\":true}"));
    }

    #[test]
    fn body_text_is_none_for_invalid_utf8() {
        let response =
            HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), vec![0xff, 0xfe]);

        assert!(response.body_text().is_none());
    }
}
