//! Log sink seam.
//!
//! The middleware hands finished lines to a [`LogSink`]; it never
//! formats structured fields or installs a subscriber itself. The
//! default sink forwards to `tracing` under the `"access"` target.

use tracing::{error, info};

/// Destination for finished access-log lines.
///
/// Implementations should be cheap and non-blocking; a line is emitted
/// at most once per request.
pub trait LogSink: Send + Sync {
    /// Emit a line for a normally completed or rejected request.
    fn info(&self, line: &str);

    /// Emit a line for a request whose response stream failed.
    fn error(&self, line: &str);
}

/// [`LogSink`] emitting through the `tracing` framework.
///
/// Lines are logged at INFO/ERROR level with target `"access"`, so
/// subscribers can route access logs independently of application logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, line: &str) {
        info!(target: "access", "{}", line);
    }

    fn error(&self, line: &str) {
        error!(target: "access", "{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_sink_is_object_safe() {
        let sink: &dyn LogSink = &TracingSink;
        sink.info("127.0.0.1 - - [10/Oct/2000:13:55:36 -0000] \"GET / HTTP/1.1\" 200 42");
        sink.error("127.0.0.1 - - [10/Oct/2000:13:55:36 -0000] \"GET / HTTP/1.1\" 200 reset");
    }
}
