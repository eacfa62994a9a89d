use crate::clients::GreetingClient;
use crate::config::Config;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub greeting_client: Arc<GreetingClient>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        let greeting_client = Arc::new(GreetingClient::new(config.react_app_api_url.clone()));
        Self {
            config,
            greeting_client,
        }
    }
}
