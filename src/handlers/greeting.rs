use crate::models::{ErrorResponse, GreetingResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use tracing::error;

/// Greeting endpoint, answers any request routed to it
pub async fn greeting(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<GreetingResponse>), (StatusCode, Json<ErrorResponse>)> {
    let body = GreetingResponse {
        message: "Hello from Lambda!".to_string(),
        environment: state.config.environment.clone(),
    };

    // Serialization is checked here so a failure maps to the fixed 500 body
    // rather than a framework error page.
    if let Err(e) = serde_json::to_string(&body) {
        error!("Error: {}", e);
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        return Err((
            status,
            Json(ErrorResponse {
                message: "Internal server error".to_string(),
            }),
        ));
    }

    Ok((StatusCode::OK, Json(body)))
}
