//! access-log - NCSA-style access logging middleware.
//!
//! This crate wraps an async request handler and emits one access-log
//! line per request in the fixed Apache/NCSA format, including for
//! responses whose body is streamed and whose size is only known once
//! the stream ends.
//!
//! # Features
//!
//! - **Streamed accounting**: response bodies pass through a counting
//!   stage untouched; the log line carries the exact byte count observed
//!   on the wire, never a length header
//! - **Cancellation-safe**: a client disconnect mid-body still produces
//!   exactly one log line with the partial count
//! - **Rejection logging**: unmatched requests log their rejection
//!   reasons in place of a status code
//! - **Pluggable sink**: lines go to any [`LogSink`]; the default emits
//!   through `tracing` under the `"access"` target
//!
//! # Example
//!
//! ```rust,ignore
//! use access_log::{AccessLog, HandlerFn, Response, RouteResult, TracingSink};
//!
//! let handler = HandlerFn::new(|_req| async {
//!     RouteResult::Complete(Response::ok("hello"))
//! });
//! let logged = AccessLog::new(TracingSink).wrap(handler);
//!
//! // Hand `logged` to your server loop; it implements Handler.
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod core;
pub mod metadata;
pub mod middleware;
pub mod route;
pub mod sink;
pub mod tap;

// Re-exports for convenience
pub use crate::core::{Body, BodyStream, Error, Request, Response};
pub use metadata::RequestMetadata;
pub use middleware::{AccessLog, Logged};
pub use route::{Handler, HandlerFn, Rejection, RouteResult};
pub use sink::{LogSink, TracingSink};
pub use tap::FoldTap;
