use crate::state::AppState;
use axum::{extract::State, response::Html};
use tracing::error;

/// Application page
///
/// Performs one read of the configured greeting endpoint per request and
/// renders the result, or a fixed error line when the read fails.
pub async fn app_page(State(state): State<AppState>) -> Html<String> {
    let content = match state.greeting_client.fetch_greeting().await {
        Ok(greeting) => {
            let environment = greeting.environment.unwrap_or_default();
            format!(
                "<p>{}</p>\n        <p>Environment: {}</p>",
                greeting.message, environment
            )
        }
        Err(e) => {
            error!("Error: {}", e);
            r#"<p style="color: red">Failed to fetch data from API</p>"#.to_string()
        }
    };

    Html(render_page(&content))
}

fn render_page(content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>Your App</title>
  </head>
  <body>
    <div class="App">
      <header class="App-header">
        <h1>Welcome to Your App</h1>
        {content}
      </header>
    </div>
  </body>
</html>
"#
    )
}
