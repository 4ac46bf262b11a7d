//! DTOs for the API info endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub message: String,
}
