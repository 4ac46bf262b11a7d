//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod info;
pub mod upload;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use info::api_info_handler;
pub use upload::upload_handler;
