use greeting_service::config::Config;
use greeting_service::routes::create_app_routes;
use std::net::SocketAddr;
use std::sync::Arc;

/// Start the application on an ephemeral port and return its address.
pub async fn spawn_app(config: Config) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener
        .local_addr()
        .expect("Failed to read test listener address");

    let app = create_app_routes(Arc::new(config));
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server failed");
    });

    addr
}

pub fn test_config(environment: Option<&str>) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: environment.map(str::to_string),
        react_app_api_url: "http://localhost:3000".to_string(),
    }
}
