//! HTTP middleware for request processing.
//!
//! Provides the access log sink and request tracing spans.

pub mod access_log;
pub mod tracing;
