//! Utility functions used across the application.
//!
//! - [`filename`] - Stored filename generation for uploads

pub mod filename;
