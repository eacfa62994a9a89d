mod common;

use serde_json::Value;

/// Base URL under test: a deployed instance when API_URL is set, otherwise a
/// fresh in-process instance.
async fn api_base_url() -> String {
    if let Ok(url) = std::env::var("API_URL") {
        return url.trim_end_matches('/').to_string();
    }
    let addr = common::spawn_app(common::test_config(Some("test"))).await;
    format!("http://{}", addr)
}

#[tokio::test]
async fn get_root_returns_ok() {
    let base = api_base_url().await;

    let response = reqwest::get(format!("{}/", base))
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("body was not JSON");
    assert_eq!(body["message"], "OK");
}

#[tokio::test]
async fn get_cars_returns_greeting() {
    let base = api_base_url().await;

    let response = reqwest::get(format!("{}/cars", base))
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("body was not JSON");
    assert_eq!(body["message"], "Hello from Lambda!");
}

#[tokio::test]
async fn any_unrouted_path_returns_greeting() {
    let addr = common::spawn_app(common::test_config(Some("test"))).await;

    for path in ["/anything", "/deeply/nested/path", "/cars/42"] {
        let response = reqwest::get(format!("http://{}{}", addr, path))
            .await
            .expect("request failed");

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.expect("body was not JSON");
        assert_eq!(body["message"], "Hello from Lambda!");
    }
}

#[tokio::test]
async fn greeting_reports_configured_environment() {
    let addr = common::spawn_app(common::test_config(Some("staging"))).await;

    let response = reqwest::get(format!("http://{}/cars", addr))
        .await
        .expect("request failed");

    let body: Value = response.json().await.expect("body was not JSON");
    assert_eq!(body["environment"], "staging");
}

#[tokio::test]
async fn greeting_omits_environment_when_unset() {
    let addr = common::spawn_app(common::test_config(None)).await;

    let response = reqwest::get(format!("http://{}/cars", addr))
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("body was not JSON");
    assert_eq!(body["message"], "Hello from Lambda!");
    assert!(body.get("environment").is_none());
}
