use crate::models::GreetingResponse;
use reqwest::Client;

/// HTTP client for the greeting endpoint the application page renders
#[derive(Debug)]
pub struct GreetingClient {
    client: Client,
    base_url: String,
}

impl GreetingClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// Fetch the greeting from the configured URL
    pub async fn fetch_greeting(&self) -> Result<GreetingResponse, reqwest::Error> {
        self.client.get(&self.base_url).send().await?.json().await
    }
}
