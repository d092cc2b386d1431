//! Machine-facing HTTP surface: health probe and request middleware.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies for JSON endpoints
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
