//! HTTP response abstraction.

use bytes::Bytes;
use http::header::{self, HeaderName};
use http::{HeaderMap, HeaderValue, StatusCode};

use super::body::Body;

/// Common header name constants for fast lookup.
mod header_names {
    use super::*;
    pub static CONTENT_TYPE: HeaderName = header::CONTENT_TYPE;
}

/// Pre-allocated static header values for common content types.
mod content_types {
    use super::*;
    pub static TEXT_PLAIN: HeaderValue = HeaderValue::from_static("text/plain; charset=utf-8");
    pub static APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");
}

/// HTTP response.
///
/// The envelope (status, headers) is always available immediately; the
/// body may be a lazy stream whose size is unknown until it terminates.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Body,
}

/// Response envelope without the body.
#[derive(Debug)]
pub struct Parts {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
}

impl Response {
    /// Create a new response builder.
    #[inline]
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::new()
    }

    /// Create a 200 OK response with body.
    #[inline]
    pub fn ok(body: impl Into<Body>) -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Create a 204 No Content response.
    #[inline]
    pub fn no_content() -> Self {
        Self::empty(StatusCode::NO_CONTENT)
    }

    /// Create a 304 Not Modified response.
    #[inline]
    pub fn not_modified() -> Self {
        Self::empty(StatusCode::NOT_MODIFIED)
    }

    /// Create a 500 Internal Server Error response.
    #[inline]
    pub fn internal_error(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            headers: HeaderMap::new(),
            body: Body::full(Bytes::copy_from_slice(msg.as_bytes())),
        }
    }

    /// Create a bodyless response with the given status.
    #[inline]
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Body::Empty,
        }
    }

    /// Create a response with a streamed body.
    #[inline]
    pub fn streaming(status: StatusCode, body: super::body::BodyStream) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Body::Stream(body),
        }
    }

    // Getters

    /// Get the status code.
    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the headers.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get a mutable reference to headers.
    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Get the response body.
    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Consume the response, returning the body.
    #[inline]
    pub fn into_body(self) -> Body {
        self.body
    }

    /// Split the response into its envelope and body.
    #[inline]
    pub fn into_parts(self) -> (Parts, Body) {
        (
            Parts {
                status: self.status,
                headers: self.headers,
            },
            self.body,
        )
    }

    /// Reassemble a response from an envelope and a body.
    #[inline]
    pub fn from_parts(parts: Parts, body: Body) -> Self {
        Self {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }

    /// Get a header value by string name.
    #[inline]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get Content-Type header (fast path).
    #[inline]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(&header_names::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    // Modifiers

    /// Set the status code.
    #[inline]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Add a header by string name and value.
    #[inline]
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Set the body.
    #[inline]
    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    // Status checks

    /// Check if this is a successful response (2xx).
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Check if this is an error response (4xx or 5xx).
    #[inline]
    pub fn is_error(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }

    /// Check whether the status code permits a message body.
    ///
    /// 1xx, 204 and 304 responses must not carry one (RFC 9110 §6.4.1).
    #[inline]
    pub fn allows_body(&self) -> bool {
        status_allows_body(self.status)
    }
}

/// Whether a status code permits a response body.
#[inline]
pub fn status_allows_body(status: StatusCode) -> bool {
    !(status.is_informational()
        || status == StatusCode::NO_CONTENT
        || status == StatusCode::NOT_MODIFIED)
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Body::Empty,
        }
    }
}

/// Builder for creating HTTP responses.
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Option<HeaderMap>, // Lazy allocation
    body: Body,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseBuilder {
    /// Create a new response builder.
    #[inline]
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: None, // Don't allocate until needed
            body: Body::Empty,
        }
    }

    /// Set the status code.
    #[inline]
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Add header by strings.
    #[inline]
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.headers
                .get_or_insert_with(HeaderMap::new)
                .insert(name, value);
        }
        self
    }

    /// Set the body.
    #[inline]
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    /// Set Content-Type to application/json (uses static HeaderValue).
    #[inline]
    pub fn json(mut self) -> Self {
        self.headers.get_or_insert_with(HeaderMap::new).insert(
            header_names::CONTENT_TYPE.clone(),
            content_types::APPLICATION_JSON.clone(),
        );
        self
    }

    /// Set Content-Type to text/plain (uses static HeaderValue).
    #[inline]
    pub fn text(mut self) -> Self {
        self.headers.get_or_insert_with(HeaderMap::new).insert(
            header_names::CONTENT_TYPE.clone(),
            content_types::TEXT_PLAIN.clone(),
        );
        self
    }

    /// Build the response.
    #[inline]
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers.unwrap_or_default(),
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_builder() {
        let res = Response::builder()
            .status(StatusCode::CREATED)
            .header("x-custom", "value")
            .body("Hello")
            .build();

        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(res.header("x-custom"), Some("value"));
        assert_eq!(res.body().len(), Some(5));
    }

    #[test]
    fn test_response_ok() {
        let res = Response::ok("OK");
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.is_success());
        assert!(res.allows_body());
    }

    #[test]
    fn test_response_no_content() {
        let res = Response::no_content();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(res.body().is_empty());
        assert!(!res.allows_body());
    }

    #[test]
    fn test_status_allows_body() {
        assert!(status_allows_body(StatusCode::OK));
        assert!(status_allows_body(StatusCode::NOT_FOUND));
        assert!(status_allows_body(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!status_allows_body(StatusCode::NO_CONTENT));
        assert!(!status_allows_body(StatusCode::NOT_MODIFIED));
        assert!(!status_allows_body(StatusCode::CONTINUE));
        assert!(!status_allows_body(StatusCode::SWITCHING_PROTOCOLS));
    }

    #[test]
    fn test_response_parts_roundtrip() {
        let res = Response::ok("body").with_header("x-test", "1");
        let (parts, body) = res.into_parts();

        assert_eq!(parts.status, StatusCode::OK);

        let res = Response::from_parts(parts, body);
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.header("x-test"), Some("1"));
        assert_eq!(res.body().len(), Some(4));
    }

    #[test]
    fn test_response_with_modifiers() {
        let res = Response::ok("Original")
            .with_status(StatusCode::ACCEPTED)
            .with_header("x-test", "value")
            .with_body("Modified");

        assert_eq!(res.status(), StatusCode::ACCEPTED);
        assert_eq!(res.header("x-test"), Some("value"));
        assert_eq!(res.body().len(), Some(8));
    }

    #[test]
    fn test_response_content_types() {
        let json = Response::builder().json().body("{}").build();
        assert_eq!(json.content_type(), Some("application/json"));

        let text = Response::builder().text().body("Hello").build();
        assert_eq!(text.content_type(), Some("text/plain; charset=utf-8"));
    }

    #[test]
    fn test_response_empty_builder_no_headers() {
        // Builder should not allocate HeaderMap if no headers added
        let res = Response::builder().status(StatusCode::NO_CONTENT).build();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(res.headers().is_empty());
    }

    #[test]
    fn test_response_is_error() {
        assert!(Response::internal_error("boom").is_error());
        assert!(!Response::ok("fine").is_error());
    }
}
