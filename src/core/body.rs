//! Response body representation.
//!
//! A body is either known in full up front or produced lazily by an
//! async stream of chunks. Streamed bodies are the interesting case for
//! access logging: their final size is only known once the stream
//! terminates.

use std::fmt;

use bytes::{Bytes, BytesMut};
use futures_util::stream::{self, BoxStream, StreamExt};

use super::error::Result;

/// Boxed chunk stream used for streamed response bodies.
pub type BodyStream = BoxStream<'static, Result<Bytes>>;

/// HTTP response body.
pub enum Body {
    /// No body at all.
    Empty,

    /// Complete body known up front.
    Full(Bytes),

    /// Lazily produced body; chunks arrive as the stream is polled.
    Stream(BodyStream),
}

impl Body {
    /// Create an empty body.
    #[inline]
    pub fn empty() -> Self {
        Body::Empty
    }

    /// Create a body from in-memory bytes.
    #[inline]
    pub fn full(data: impl Into<Bytes>) -> Self {
        Body::Full(data.into())
    }

    /// Create a streaming body from a chunk stream.
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: futures_util::Stream<Item = Result<Bytes>> + Send + 'static,
    {
        Body::Stream(stream.boxed())
    }

    /// Check whether the body is known to be empty.
    ///
    /// A stream counts as non-empty even if it later yields no chunks;
    /// its size cannot be known without driving it.
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            Body::Empty => true,
            Body::Full(data) => data.is_empty(),
            Body::Stream(_) => false,
        }
    }

    /// Body size, if known without driving a stream.
    #[inline]
    pub fn len(&self) -> Option<usize> {
        match self {
            Body::Empty => Some(0),
            Body::Full(data) => Some(data.len()),
            Body::Stream(_) => None,
        }
    }

    /// Convert any variant into the stream form.
    ///
    /// `Empty` becomes a stream that ends immediately; `Full` becomes a
    /// single-chunk stream. The bytes delivered are identical in every
    /// case.
    pub fn into_stream(self) -> BodyStream {
        match self {
            Body::Empty => stream::empty().boxed(),
            Body::Full(data) => stream::once(futures_util::future::ready(Ok(data))).boxed(),
            Body::Stream(s) => s,
        }
    }

    /// Drain the body and return its bytes, or the first stream error.
    pub async fn collect(self) -> Result<Bytes> {
        match self {
            Body::Empty => Ok(Bytes::new()),
            Body::Full(data) => Ok(data),
            Body::Stream(mut s) => {
                let mut buf = BytesMut::new();
                while let Some(chunk) = s.next().await {
                    buf.extend_from_slice(&chunk?);
                }
                Ok(buf.freeze())
            }
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::Empty
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Empty => f.write_str("Body::Empty"),
            Body::Full(data) => write!(f, "Body::Full({} bytes)", data.len()),
            Body::Stream(_) => f.write_str("Body::Stream(..)"),
        }
    }
}

impl From<Bytes> for Body {
    fn from(data: Bytes) -> Self {
        Body::Full(data)
    }
}

impl From<Vec<u8>> for Body {
    fn from(data: Vec<u8>) -> Self {
        Body::Full(Bytes::from(data))
    }
}

impl From<&'static [u8]> for Body {
    fn from(data: &'static [u8]) -> Self {
        Body::Full(Bytes::from_static(data))
    }
}

impl From<String> for Body {
    fn from(data: String) -> Self {
        Body::Full(Bytes::from(data))
    }
}

impl From<&'static str> for Body {
    fn from(data: &'static str) -> Self {
        Body::Full(Bytes::from_static(data.as_bytes()))
    }
}
