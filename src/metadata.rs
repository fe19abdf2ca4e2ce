//! Request metadata capture and log line formatting.
//!
//! Metadata is snapshotted synchronously when a request enters the
//! middleware, before the handler can touch it. Extraction never fails:
//! anything missing or malformed falls back to `"-"`, the NCSA
//! placeholder. The timestamp is deliberately not part of the snapshot;
//! it is rendered when the line is emitted, which for streamed bodies
//! can be long after the request arrived.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use http::Version;

use crate::core::Request;

/// NCSA placeholder for absent fields.
const DASH: &str = "-";

/// Remote address header candidates, in priority order.
///
/// The first header present on the request wins.
pub const REMOTE_ADDR_HEADERS: [&str; 3] = ["x-forwarded-for", "remote-address", "x-real-ip"];

/// HTTP protocol version as a static string (no allocation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Protocol(&'static str);

impl Protocol {
    pub const HTTP_10: Self = Self("HTTP/1.0");
    pub const HTTP_11: Self = Self("HTTP/1.1");
    pub const HTTP_20: Self = Self("HTTP/2.0");
    pub const HTTP_30: Self = Self("HTTP/3.0");

    /// Get the version string.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Create from http::Version.
    #[inline]
    pub fn from_http(version: Version) -> Self {
        match version {
            Version::HTTP_10 => Self::HTTP_10,
            Version::HTTP_11 => Self::HTTP_11,
            Version::HTTP_2 => Self::HTTP_20,
            Version::HTTP_3 => Self::HTTP_30,
            _ => Self::HTTP_11, // fallback
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Self::HTTP_11
    }
}

/// Immutable per-request snapshot used to build the log line.
#[derive(Clone, Debug)]
pub struct RequestMetadata {
    /// Caller address from the header chain, or `"-"`.
    pub remote_addr: String,
    /// Basic-auth username, or `"-"`.
    pub username: String,
    /// Request method name.
    pub method: String,
    /// Request path including the query string, as received.
    pub path: String,
    /// Protocol version.
    pub protocol: Protocol,
}

impl RequestMetadata {
    /// Snapshot the loggable facts of a request.
    ///
    /// Cheap and infallible; missing or unreadable headers degrade to
    /// `"-"` rather than affecting the request.
    pub fn capture(req: &Request) -> Self {
        Self {
            remote_addr: remote_addr(req).unwrap_or_else(|| DASH.to_string()),
            username: basic_username(req).unwrap_or_else(|| DASH.to_string()),
            method: req.method().to_string(),
            path: req.path_and_query().to_string(),
            protocol: Protocol::from_http(req.version()),
        }
    }

    /// Render the access-log line with the current time.
    ///
    /// `status` is either a numeric status code or joined rejection
    /// identifiers; `size` is a byte count, `"-"`, or an error message.
    pub fn format_line(&self, status: &str, size: &str) -> String {
        self.format_line_at(Utc::now(), status, size)
    }

    fn format_line_at(&self, time: DateTime<Utc>, status: &str, size: &str) -> String {
        format!(
            "{} - {} [{}] \"{} {} {}\" {} {}",
            self.remote_addr,
            self.username,
            common_log_timestamp(time),
            self.method,
            self.path,
            self.protocol,
            status,
            size,
        )
    }
}

/// Resolve the caller address from the header chain.
fn remote_addr(req: &Request) -> Option<String> {
    REMOTE_ADDR_HEADERS
        .iter()
        .find_map(|name| req.header(name))
        .map(str::to_string)
}

/// Extract the username from Basic authorization credentials.
fn basic_username(req: &Request) -> Option<String> {
    let value = req.authorization()?;
    let (scheme, payload) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let credentials = BASE64_STANDARD.decode(payload.trim()).ok()?;

    // slice::split_once() is unstable
    let user = match credentials.iter().position(|b| *b == b':') {
        Some(index) => String::from_utf8(credentials[..index].to_vec()).ok()?,
        None => String::from_utf8(credentials).ok()?,
    };

    if user.is_empty() {
        None
    } else {
        Some(user)
    }
}

/// Format a timestamp in Apache common-log style, e.g.
/// `10/Oct/2000:13:55:36 -0000`. The offset is the literal `-0000`;
/// times are UTC.
fn common_log_timestamp(time: DateTime<Utc>) -> String {
    format!("{} -0000", time.format("%d/%b/%Y:%H:%M:%S"))
}
