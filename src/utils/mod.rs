//! Utility functions for code generation, URL processing, and timestamps.
//!
//! - [`code_generator`] - Shortcode generation and validation
//! - [`url_normalizer`] - URL normalization and sanitization
//! - [`timestamp`] - Fixed UTC timestamp format used on the wire

pub mod code_generator;
pub mod timestamp;
pub mod url_normalizer;
