use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response for the status probe
#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub message: String,
}
