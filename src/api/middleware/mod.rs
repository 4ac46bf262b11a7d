//! HTTP middleware for request processing and protection.
//!
//! Provides CORS handling, panic recovery, and observability middleware.

pub mod cors;
pub mod panic;
pub mod tracing;
