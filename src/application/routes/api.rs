use std::time::Instant;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::application::errors::{ApiError, format_duration};
use crate::application::state::AppState;
use crate::domain::images::ImageParameters;
use crate::infrastructure::upstream;

#[derive(Debug, Deserialize)]
pub(crate) struct PromptQuery {
    prompt: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageResponse {
    status: &'static str,
    message: &'static str,
    image: String,
    image_id: String,
    duration: String,
    parameters: ParametersBody,
}

#[derive(Debug, Serialize)]
struct ParametersBody {
    width: u32,
    height: u32,
    seed: u32,
    model: &'static str,
}

/// `GET /api/image?prompt=...` — generate an image upstream, cache the bytes,
/// and answer with a locally-minted URL for them.
#[tracing::instrument(skip(state))]
pub(crate) async fn generate_image(
    State(state): State<AppState>,
    Query(query): Query<PromptQuery>,
) -> Result<Response, ApiError> {
    let started = Instant::now();
    let prompt = query.prompt.unwrap_or_default();
    let params = ImageParameters::sample(&mut rand::rng());

    let bytes = upstream::generate_image(&state.http_client, &state.image_api_url, &prompt, params)
        .await
        .map_err(|err| ApiError::new(err, started.elapsed()))?;

    // The upstream call is finished before the registry lock is touched.
    let image_id = state.image_registry.insert(bytes).await;
    let image = state.image_url(&image_id);

    info!(
        %image_id,
        width = params.width,
        height = params.height,
        seed = params.seed,
        "image generated"
    );

    Ok(Json(ImageResponse {
        status: "success",
        message: "Image generated successfully",
        image,
        image_id,
        duration: format_duration(started.elapsed()),
        parameters: ParametersBody {
            width: params.width,
            height: params.height,
            seed: params.seed,
            model: upstream::IMAGE_MODEL,
        },
    })
    .into_response())
}

#[derive(Debug, Serialize)]
struct TextResponse {
    status: &'static str,
    message: &'static str,
    response: String,
    duration: String,
    model: &'static str,
}

/// `GET /api/ai/openai?prompt=...` — passthrough to the upstream text API.
#[tracing::instrument(skip(state))]
pub(crate) async fn generate_text(
    State(state): State<AppState>,
    Query(query): Query<PromptQuery>,
) -> Result<Response, ApiError> {
    let started = Instant::now();
    let prompt = query.prompt.unwrap_or_default();

    let text = upstream::generate_text(&state.http_client, &state.text_api_url, &prompt)
        .await
        .map_err(|err| ApiError::new(err, started.elapsed()))?;

    Ok(Json(TextResponse {
        status: "success",
        message: "Text generated successfully",
        response: text,
        duration: format_duration(started.elapsed()),
        model: "openai",
    })
    .into_response())
}
