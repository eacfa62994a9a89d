use crate::models::*;
use utoipa::OpenApi;

/// Status probe endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = StatusResponse)
    )
)]
#[allow(dead_code)]
pub async fn status_check_doc() {}

/// Greeting endpoint
#[utoipa::path(
    get,
    path = "/cars",
    responses(
        (status = 200, description = "Greeting with environment name", body = GreetingResponse),
        (status = 500, description = "Greeting could not be built", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn greeting_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        status_check_doc,
        greeting_doc,
    ),
    components(
        schemas(StatusResponse, GreetingResponse, ErrorResponse)
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
