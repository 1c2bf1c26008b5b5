use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{png_bytes, spawn_app};

#[tokio::test]
async fn unknown_image_id_returns_404_json() {
    let app = spawn_app().await;

    let client = reqwest::Client::new();
    let response = client
        .get(app.url("/cdn/images/deadbeefdeadbeef.png"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Image not found");
    assert_eq!(body["image_id"], "deadbeefdeadbeef");
}

#[tokio::test]
async fn non_png_filename_returns_404() {
    let app = spawn_app().await;

    let client = reqwest::Client::new();
    let response = client
        .get(app.url("/cdn/images/deadbeefdeadbeef.gif"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn cached_image_is_served_with_cache_headers() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path_regex("^/prompt/.+"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(png_bytes(), "image/png"))
        .mount(&app.mock_server)
        .await;

    let client = reqwest::Client::new();
    let body: serde_json::Value = client
        .get(app.url("/api/image"))
        .query(&[("prompt", "a lighthouse at dusk")])
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    let image_id = body["image_id"].as_str().expect("image_id missing");

    let response = client
        .get(app.url(&format!("/cdn/images/{image_id}.png")))
        .send()
        .await
        .expect("Failed to fetch image");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
    assert_eq!(
        response
            .headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok()),
        Some("public, max-age=86400")
    );
    let served = response.bytes().await.expect("Failed to read body");
    assert_eq!(served.as_ref(), png_bytes().as_slice());
}

#[tokio::test]
async fn repeated_generations_mint_distinct_ids() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path_regex("^/prompt/.+"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(png_bytes(), "image/png"))
        .mount(&app.mock_server)
        .await;

    let client = reqwest::Client::new();
    let mut ids = std::collections::HashSet::new();
    for _ in 0..5 {
        let body: serde_json::Value = client
            .get(app.url("/api/image"))
            .query(&[("prompt", "cute cat")])
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response");

        ids.insert(
            body["image_id"]
                .as_str()
                .expect("image_id missing")
                .to_string(),
        );
    }

    assert_eq!(ids.len(), 5, "every generation should mint a fresh id");
}
