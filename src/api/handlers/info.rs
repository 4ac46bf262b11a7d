//! Handler for the API root.

use axum::Json;

use crate::api::dto::info::ApiInfoResponse;

/// `GET /api`
pub async fn api_info_handler() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        message: "AI Fortune Teller API is running".to_string(),
    })
}
