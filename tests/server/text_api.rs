use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::spawn_app;

#[tokio::test]
async fn text_generation_returns_cleaned_response() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(serde_json::json!({
            "messages": [{"role": "user", "content": "Write a short poem"}]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("  Roses are red\\nViolets are blue  "),
        )
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let client = reqwest::Client::new();
    let response = client
        .get(app.url("/api/ai/openai"))
        .query(&[("prompt", "Write a short poem")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Text generated successfully");
    assert_eq!(body["response"], "Roses are red\nViolets are blue");
    assert_eq!(body["model"], "openai");
    assert!(body["duration"].is_string());
}

#[tokio::test]
async fn text_generation_without_prompt_is_rejected_without_upstream_call() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("unused"))
        .expect(0)
        .mount(&app.mock_server)
        .await;

    let client = reqwest::Client::new();
    let response = client
        .get(app.url("/api/ai/openai"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
    assert!(body["duration"].is_string());
}

#[tokio::test]
async fn text_upstream_error_is_reported() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&app.mock_server)
        .await;

    let client = reqwest::Client::new();
    let response = client
        .get(app.url("/api/ai/openai"))
        .query(&[("prompt", "hello")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let error = body["error"].as_str().expect("error missing");
    assert!(error.contains("502"), "error should name the status: {error}");
    assert_eq!(body["response"], "bad gateway");
}
