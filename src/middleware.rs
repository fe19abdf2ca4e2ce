//! Access logging middleware.
//!
//! Wraps a [`Handler`] and emits one NCSA-style log line per request:
//!
//! ```text
//! <remote> - <user> [<timestamp>] "<METHOD> <path> <PROTO>" <status> <size>
//! ```
//!
//! Bodyless outcomes (rejections, 1xx/204/304, HEAD, empty bodies) are
//! logged as soon as the handler returns. Responses with a body defer
//! the line until the body stream terminates, so the size field is the
//! number of bytes that actually went out. This holds when the client
//! disconnects mid-transfer too, in which case the partial count is logged.
//! The response envelope is never delayed and the body bytes are never
//! buffered or altered.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http::Method;

use crate::core::{Body, Error, Request, Response};
use crate::metadata::RequestMetadata;
use crate::route::{Handler, Rejection, RouteResult};
use crate::sink::LogSink;
use crate::tap::FoldTap;

/// Access-log middleware factory.
///
/// Holds the sink; [`AccessLog::wrap`] produces a logging handler
/// around any inner [`Handler`]. One factory can wrap any number of
/// handlers sharing the same sink.
pub struct AccessLog<S> {
    sink: Arc<S>,
}

impl<S: LogSink + 'static> AccessLog<S> {
    /// Create a middleware factory emitting to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// Wrap a handler so that every request it sees is logged.
    pub fn wrap<H: Handler>(&self, handler: H) -> Logged<H, S> {
        Logged {
            inner: handler,
            sink: self.sink.clone(),
        }
    }
}

/// A handler wrapped with access logging.
pub struct Logged<H, S> {
    inner: H,
    sink: Arc<S>,
}

#[async_trait]
impl<H, S> Handler for Logged<H, S>
where
    H: Handler,
    S: LogSink + 'static,
{
    async fn handle(&self, req: Request) -> RouteResult {
        // Snapshot before the handler can consume or mutate the request.
        let meta = RequestMetadata::capture(&req);
        let is_head = req.method() == Method::HEAD;

        match self.inner.handle(req).await {
            RouteResult::Rejected(rejections) => {
                self.sink
                    .info(&meta.format_line(&Rejection::join(&rejections), "-"));
                RouteResult::Rejected(rejections)
            }
            RouteResult::Complete(response) => {
                let status = response.status();

                // HEAD responses and statuses that forbid a body carry no
                // payload on the wire; empty bodies have nothing to count.
                if is_head || !response.allows_body() || response.body().is_empty() {
                    self.sink.info(&meta.format_line(status.as_str(), "-"));
                    return RouteResult::Complete(response);
                }

                // Return the envelope now; the log line waits for the
                // body stream to terminate.
                let (parts, body) = response.into_parts();
                let info_sink = self.sink.clone();
                let error_sink = self.sink.clone();
                let error_meta = meta.clone();

                let counted = FoldTap::new(
                    body.into_stream(),
                    0u64,
                    |acc, chunk: &Bytes| acc + chunk.len() as u64,
                    move |total: u64| {
                        info_sink.info(&meta.format_line(status.as_str(), &total.to_string()));
                    },
                    move |err: &Error| {
                        error_sink
                            .error(&error_meta.format_line(status.as_str(), &err.to_string()));
                    },
                );

                RouteResult::Complete(Response::from_parts(parts, Body::from_stream(counted)))
            }
        }
    }
}
