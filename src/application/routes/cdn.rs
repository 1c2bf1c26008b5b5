use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::application::state::AppState;
use crate::domain::errors::RegistryError;

/// `GET /cdn/images/{id}.png` — serve cached image bytes verbatim.
#[tracing::instrument(skip(state))]
pub(crate) async fn serve_image(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Response {
    let Some(image_id) = file.strip_suffix(".png") else {
        return not_found(&file);
    };

    match state.image_registry.lookup(image_id).await {
        Ok(image) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "image/png")
            .header(header::CACHE_CONTROL, "public, max-age=86400")
            .body(Body::from(image.bytes))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(RegistryError::NotFound) => not_found(image_id),
    }
}

fn not_found(image_id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Image not found",
            "image_id": image_id,
        })),
    )
        .into_response()
}
