//! HTTP API tests
#![cfg(feature = "server")]

use site2crx::{Generator, Settings, PACKAGE_CONTENT_TYPE};
use std::sync::Arc;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start the API on an ephemeral port and return its base URL.
async fn spawn_api() -> String {
    let settings = Settings::with_assets_root(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    let generator = Arc::new(Generator::new(&settings).unwrap());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, site2crx::server::router(generator)).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn post_generate(api: &str, body: &str) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/generate", api))
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_generate_returns_package_download() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>Dashboard</title>"))
        .mount(&site)
        .await;

    let api = spawn_api().await;
    let body = format!(r#"{{"url": "{}/"}}"#, site.uri());
    let response = post_generate(&api, &body).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.headers()["content-type"], PACKAGE_CONTENT_TYPE);
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"127.0.0.1.crx\""
    );
    let bytes = response.bytes().await.unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[tokio::test]
async fn test_invalid_url_is_rejected() {
    let api = spawn_api().await;

    let response = post_generate(&api, r#"{"url": "example.com"}"#).await;
    assert_eq!(response.status().as_u16(), 400);
    let text = response.text().await.unwrap();
    assert!(text.contains("http(s)://"));

    let response = post_generate(&api, "{}").await;
    assert_eq!(response.status().as_u16(), 400);
    let text = response.text().await.unwrap();
    assert!(text.contains("Please provide a URL"));
}

#[tokio::test]
async fn test_health() {
    let api = spawn_api().await;
    let response = reqwest::get(format!("{}/health", api)).await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains("\"ok\""));
}
