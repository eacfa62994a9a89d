use crate::config::Config;
use crate::handlers::{app_page, greeting, status_check};
use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Create application routes
///
/// `/` answers the status probe, `/app` serves the application page, and
/// every other path falls through to the greeting endpoint.
pub fn create_app_routes(config: Arc<Config>) -> Router {
    let state = AppState::new(config);
    Router::new()
        .route("/", get(status_check))
        .route("/app", get(app_page))
        .fallback(greeting)
        .with_state(state)
}
