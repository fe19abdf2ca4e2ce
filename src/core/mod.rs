//! Core types for HTTP request/response handling.
//!
//! This module provides the fundamental, framework-independent types the
//! middleware operates on:
//!
//! - [`Request`] - HTTP request abstraction
//! - [`Response`] - HTTP response abstraction with builder pattern
//! - [`Body`] - response body, either in-memory or streamed
//! - [`Error`] - body stream error type

mod body;
mod error;
mod request;
mod response;

pub use body::{Body, BodyStream};
pub use error::{Error, Result};
pub use request::Request;
pub use response::{status_allows_body, Parts, Response, ResponseBuilder};
