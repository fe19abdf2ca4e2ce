//! Routing outcome vocabulary and the handler trait.
//!
//! A [`Handler`] turns a request into a [`RouteResult`]: either a
//! completed [`Response`] or a list of [`Rejection`]s explaining why no
//! route produced one. Rejections are structured reasons, distinct from
//! errors: a rejected request was understood but not handled.

use async_trait::async_trait;
use std::fmt;
use std::future::Future;

use crate::core::{Request, Response};

/// Outcome of attempting to handle a request.
#[derive(Debug)]
pub enum RouteResult {
    /// A handler produced a complete response.
    Complete(Response),
    /// No handler produced a response; the reasons say why.
    Rejected(Vec<Rejection>),
}

impl RouteResult {
    /// Check if this result carries a response.
    pub fn is_complete(&self) -> bool {
        matches!(self, RouteResult::Complete(_))
    }

    /// Check if this result is a rejection.
    pub fn is_rejected(&self) -> bool {
        matches!(self, RouteResult::Rejected(_))
    }

    /// Unwrap the response if this is a Complete result.
    pub fn into_response(self) -> Option<Response> {
        match self {
            RouteResult::Complete(res) => Some(res),
            RouteResult::Rejected(_) => None,
        }
    }

    /// Unwrap the rejections if this is a Rejected result.
    pub fn into_rejections(self) -> Option<Vec<Rejection>> {
        match self {
            RouteResult::Complete(_) => None,
            RouteResult::Rejected(rejections) => Some(rejections),
        }
    }
}

impl From<Response> for RouteResult {
    fn from(res: Response) -> Self {
        RouteResult::Complete(res)
    }
}

/// A structured reason a request was not handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// No route matched the request path.
    NotFound,
    /// A route matched the path but not the method.
    MethodNotAllowed,
    /// A required header was absent.
    MissingHeader(String),
    /// A required query parameter was absent.
    MissingQueryParam(String),
    /// Credentials were present but not valid.
    InvalidCredentials,
    /// The request could not be interpreted.
    Malformed(String),
}

impl Rejection {
    /// Stable textual identifier for this rejection.
    ///
    /// Parameterized variants contribute the identifier only; the detail
    /// stays available through `Debug`.
    pub fn kind(&self) -> &'static str {
        match self {
            Rejection::NotFound => "NotFound",
            Rejection::MethodNotAllowed => "MethodNotAllowed",
            Rejection::MissingHeader(_) => "MissingHeader",
            Rejection::MissingQueryParam(_) => "MissingQueryParam",
            Rejection::InvalidCredentials => "InvalidCredentials",
            Rejection::Malformed(_) => "Malformed",
        }
    }

    /// Comma-join the identifiers of a rejection list.
    pub fn join(rejections: &[Rejection]) -> String {
        rejections
            .iter()
            .map(Rejection::kind)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Trait for asynchronous request handlers.
///
/// This is the seam the access-log middleware wraps: anything that maps
/// a [`Request`] to a [`RouteResult`].
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle one request.
    async fn handle(&self, req: Request) -> RouteResult;
}

/// Adapter implementing [`Handler`] for plain async closures.
///
/// ```rust,ignore
/// let handler = HandlerFn::new(|req| async move {
///     RouteResult::Complete(Response::ok("hello"))
/// });
/// ```
pub struct HandlerFn<F>(F);

impl<F> HandlerFn<F> {
    /// Wrap a closure as a handler.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = RouteResult> + Send,
{
    async fn handle(&self, req: Request) -> RouteResult {
        (self.0)(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::Method;

    fn request(path: &str) -> Request {
        Request::new(
            Method::GET,
            path.parse().unwrap(),
            http::HeaderMap::new(),
            Bytes::new(),
        )
    }

    #[test]
    fn test_route_result_complete() {
        let result = RouteResult::Complete(Response::ok("done"));
        assert!(result.is_complete());
        assert!(!result.is_rejected());
        assert!(result.into_response().is_some());
    }

    #[test]
    fn test_route_result_rejected() {
        let result = RouteResult::Rejected(vec![Rejection::NotFound]);
        assert!(result.is_rejected());
        assert_eq!(
            result.into_rejections(),
            Some(vec![Rejection::NotFound])
        );
    }

    #[test]
    fn test_rejection_kinds() {
        assert_eq!(Rejection::NotFound.kind(), "NotFound");
        assert_eq!(Rejection::MethodNotAllowed.kind(), "MethodNotAllowed");
        assert_eq!(
            Rejection::MissingHeader("x-api-key".to_string()).kind(),
            "MissingHeader"
        );
        assert_eq!(Rejection::InvalidCredentials.kind(), "InvalidCredentials");
    }

    #[test]
    fn test_rejection_join() {
        let rejections = vec![
            Rejection::MethodNotAllowed,
            Rejection::MissingHeader("x-api-key".to_string()),
        ];
        assert_eq!(
            Rejection::join(&rejections),
            "MethodNotAllowed,MissingHeader"
        );
    }

    #[test]
    fn test_rejection_join_single() {
        assert_eq!(Rejection::join(&[Rejection::NotFound]), "NotFound");
    }

    #[tokio::test]
    async fn test_handler_fn() {
        let handler =
            HandlerFn::new(|_req| async move { RouteResult::Complete(Response::ok("hello")) });

        let result = handler.handle(request("/")).await;
        let res = result.into_response().unwrap();
        assert_eq!(res.status(), http::StatusCode::OK);
    }

    #[tokio::test]
    async fn test_handler_fn_rejecting() {
        let handler =
            HandlerFn::new(|_req| async move { RouteResult::Rejected(vec![Rejection::NotFound]) });

        let result = handler.handle(request("/missing")).await;
        assert!(result.is_rejected());
    }
}
