//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Short code generation and reserved path segments
//! - [`url_validator`] - Absolute URL validation
//! - [`request_origin`] - Public origin derivation from HTTP headers
//! - [`request_meta`] - Click metadata extraction from HTTP headers

pub mod code_generator;
pub mod request_meta;
pub mod request_origin;
pub mod url_validator;
