use crate::models::StatusResponse;
use axum::Json;
use tracing::debug;

/// Status probe endpoint
pub async fn status_check() -> Json<StatusResponse> {
    debug!("Status check requested");
    Json(StatusResponse {
        message: "OK".to_string(),
    })
}
