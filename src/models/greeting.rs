use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response for the greeting endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GreetingResponse {
    pub message: String,
    /// Absent when no ENVIRONMENT value is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}
